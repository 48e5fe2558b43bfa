//! Fixed-capacity staging buffer for bulk inserts into a [`crate::genome::Genome`].
//!
//! Records are staged here and flushed in bulk rather than inserted one at
//! a time, for better cache locality during a parse. Batching is purely an
//! implementation detail: a parse produces the same genome regardless of
//! the capacity chosen.

use crate::genome::Genome;
use crate::snp::{Rsid, RsidSnp, Snp};

/// Reference staging capacity used by the parser driver.
pub const DEFAULT_BATCH_CAPACITY: usize = 200;

/// A fixed-capacity array of pending `(rsid, snp)` records.
pub struct RecordBatch<const N: usize = DEFAULT_BATCH_CAPACITY> {
    records: [RsidSnp; N],
    len: usize,
}

impl<const N: usize> Default for RecordBatch<N> {
    fn default() -> Self {
        RecordBatch::new()
    }
}

impl<const N: usize> RecordBatch<N> {
    pub fn new() -> Self {
        RecordBatch {
            records: [RsidSnp {
                rsid: 0,
                snp: Snp::default(),
            }; N],
            len: 0,
        }
    }

    /// Stage a record. Flushes into `genome` first if the batch is full.
    #[inline]
    pub fn push(&mut self, rsid: Rsid, snp: Snp, genome: &mut Genome) {
        if self.len == N {
            self.flush(genome);
        }
        self.records[self.len] = RsidSnp { rsid, snp };
        self.len += 1;
    }

    /// Insert all staged records into `genome` and reset the batch.
    pub fn flush(&mut self, genome: &mut Genome) {
        for record in &self.records[..self.len] {
            genome.insert(record.rsid, record.snp);
        }
        self.len = 0;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
