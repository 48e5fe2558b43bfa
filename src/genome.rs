//! The genome store: a hash-indexed collection of SNPs plus running
//! aggregates over the RSIDs it has seen.

use crate::index::RsidMap;
use crate::snp::{Rsid, RsidSnp, Snp, NONE_SNP};

/// Default capacity hint, matching a full 23andMe-style export (roughly
/// 600k-900k calls). Can be overridden at construction time or via
/// [`crate::config::set_default_genome_capacity`].
pub const DEFAULT_CAPACITY: usize = 1_000_000;

/// A queryable collection of SNPs keyed by RSID.
///
/// `first`/`last` track the lowest/highest RSID ever inserted (not the
/// lowest/highest currently present — nothing removes entries).
/// `y_chromosome` is true once any inserted SNP is on the Y chromosome with
/// a non-empty first nucleotide.
#[derive(Clone)]
pub struct Genome {
    map: RsidMap,
    first: Rsid,
    last: Rsid,
    y_chromosome: bool,
}

impl Default for Genome {
    fn default() -> Self {
        Genome::new(crate::config::default_genome_capacity())
    }
}

impl Genome {
    /// Create an empty genome sized to hold roughly `capacity_hint` SNPs.
    pub fn new(capacity_hint: usize) -> Genome {
        Genome {
            map: RsidMap::with_capacity(capacity_hint),
            first: i32::MAX,
            last: i32::MIN,
            y_chromosome: false,
        }
    }

    /// Add a SNP under `rsid`. Does not touch `first`/`last`/`y_chromosome`
    /// — those aggregates are maintained by the parser driver as it
    /// observes each record, not by the store itself.
    #[inline]
    pub fn insert(&mut self, rsid: Rsid, snp: Snp) {
        self.map.insert(rsid, snp);
    }

    #[inline]
    pub fn has(&self, rsid: Rsid) -> bool {
        self.map.contains(rsid)
    }

    /// Look up a SNP by RSID. Returns [`NONE_SNP`] on a miss rather than an
    /// error or `Option` — a miss is an ordinary, expected outcome here.
    #[inline]
    pub fn lookup(&self, rsid: Rsid) -> &Snp {
        self.map.get(rsid).unwrap_or(&NONE_SNP)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.map.load_factor()
    }

    /// Lowest RSID ever inserted. `i32::MAX` if the genome is empty.
    #[inline]
    pub fn first(&self) -> Rsid {
        self.first
    }

    /// Highest RSID ever inserted. `i32::MIN` if the genome is empty.
    #[inline]
    pub fn last(&self) -> Rsid {
        self.last
    }

    #[inline]
    pub fn y_chromosome(&self) -> bool {
        self.y_chromosome
    }

    /// Record an observed RSID and Y-chromosome call for aggregate
    /// purposes. Called by the parser driver once per record, independent
    /// of whether the record is actually inserted into the map.
    #[inline]
    pub fn observe(&mut self, rsid: Rsid, saw_y_call: bool) {
        self.first = self.first.min(rsid);
        self.last = self.last.max(rsid);
        self.y_chromosome |= saw_y_call;
    }

    /// All RSIDs currently stored, in table order.
    pub fn rsids(&self) -> Vec<Rsid> {
        self.map.iter().map(|e| e.rsid).collect()
    }

    /// A copy of every stored SNP, in table order.
    pub fn snps(&self) -> Vec<Snp> {
        self.map.iter().map(|e| e.snp).collect()
    }

    /// Iterate over all `(rsid, snp)` pairs, by value.
    pub fn iter(&self) -> impl Iterator<Item = RsidSnp> + '_ {
        self.map.iter()
    }
}

impl PartialEq for Genome {
    fn eq(&self, other: &Self) -> bool {
        // cheap tests first
        self.first == other.first
            && self.last == other.last
            && self.y_chromosome == other.y_chromosome
            && self.len() == other.len()
            && self.map == other.map
    }
}

impl Eq for Genome {}
