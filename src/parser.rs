//! The parser driver: a single linear sweep from mapped bytes to a
//! populated [`Genome`].

use crate::batch::RecordBatch;
use crate::genome::Genome;
use crate::mapped_file::MappedFile;
use crate::nucleotide::Nucleotide;
use crate::scan::Cursor;
use crate::snp::Snp;
use crate::Result;
use std::path::Path;

/// Summary of one parse run, returned by value so a caller can log or
/// display it however it likes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseStats {
    pub records_parsed: u64,
    pub lines_skipped: u64,
    pub y_chromosome: bool,
}

/// Parse a genotype export file at `path` into `genome`.
pub fn parse_file<P: AsRef<Path>>(path: P, genome: &mut Genome) -> Result<ParseStats> {
    let mapped = MappedFile::open(path)?;
    Ok(parse_bytes(mapped.as_bytes(), genome))
}

/// Parse an in-memory byte buffer into `genome`. This is the primitive
/// entry point; `parse_file` is a thin mmap-backed wrapper around it.
pub fn parse_bytes(data: &[u8], genome: &mut Genome) -> ParseStats {
    let mut cursor = Cursor::new(data);
    let mut batch: RecordBatch = RecordBatch::new();
    let mut stats = ParseStats::default();

    cursor.skip_comments();

    while !cursor.is_empty() {
        match cursor.peek() {
            Some(b'#') => {
                cursor.skip_comments();
                continue;
            }
            Some(b'r') | Some(b'i') => {
                let internal = cursor.peek() == Some(b'i');
                // advance past the "rs" or "i" prefix
                cursor.skip(if internal { 1 } else { 2 });
                let magnitude = cursor.parse_i32();
                let rsid = if internal { -magnitude } else { magnitude };

                cursor.skip_white();
                let chromosome = cursor.parse_chromosome();
                cursor.skip_white();
                let position = cursor.parse_u32();
                cursor.skip_white();
                let genotype = cursor.parse_genotype();

                let saw_y_call =
                    chromosome == crate::chromosome::Chromosome::Y && genotype.first != Nucleotide::None;
                genome.observe(rsid, saw_y_call);
                stats.y_chromosome |= saw_y_call;

                let snp = Snp::new(chromosome, position, genotype);
                batch.push(rsid, snp, genome);
                stats.records_parsed += 1;

                cursor.skip_line();
            }
            Some(_) => {
                cursor.skip_line();
                stats.lines_skipped += 1;
            }
            None => break,
        }
    }

    batch.flush(genome);
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use crate::genotype::Genotype;
    use crate::nucleotide::Nucleotide;

    // S1
    #[test]
    fn single_record_with_header() {
        let mut g = Genome::new(16);
        let stats = parse_bytes(b"# header\nrs1\t1\t100\tAG\n", &mut g);
        assert_eq!(stats.records_parsed, 1);
        assert_eq!(g.len(), 1);
        assert_eq!(g.first(), 1);
        assert_eq!(g.last(), 1);
        assert!(!g.y_chromosome());
        let snp = g.lookup(1);
        assert_eq!(snp.chromosome, Chromosome::Chr1);
        assert_eq!(snp.position, 100);
        assert_eq!(snp.genotype, Genotype::new(Nucleotide::A, Nucleotide::G));
    }

    // S2
    #[test]
    fn internal_id_negates_and_renders_single_char() {
        let mut g = Genome::new(16);
        parse_bytes(b"i100\t1\t5\tT-\n", &mut g);
        assert!(g.has(-100));
        let snp = g.lookup(-100);
        assert_eq!(snp.genotype.to_string(), "T");
    }

    // S3
    #[test]
    fn no_call_on_y_does_not_set_y_chromosome() {
        let mut g = Genome::new(16);
        parse_bytes(b"rs1\tY\t10\t--\n", &mut g);
        assert!(!g.y_chromosome());
    }

    #[test]
    fn a_call_on_y_sets_y_chromosome() {
        let mut g = Genome::new(16);
        parse_bytes(b"rs1\tY\t10\tA-\n", &mut g);
        assert!(g.y_chromosome());
    }

    // S4
    #[test]
    fn mt_chromosome_two_char_token() {
        let mut g = Genome::new(16);
        parse_bytes(b"rs1\tMT\t10\tAA\n", &mut g);
        assert_eq!(g.lookup(1).chromosome, Chromosome::Mt);
    }

    #[test]
    fn malformed_line_is_silently_skipped() {
        let mut g = Genome::new(16);
        let stats = parse_bytes(b"not a record\nrs1\t1\t1\tAA\n", &mut g);
        assert_eq!(stats.lines_skipped, 1);
        assert_eq!(stats.records_parsed, 1);
    }

    #[test]
    fn empty_file_yields_empty_genome() {
        let mut g = Genome::new(16);
        let stats = parse_bytes(b"", &mut g);
        assert_eq!(stats.records_parsed, 0);
        assert_eq!(g.len(), 0);
        assert_eq!(g.first(), i32::MAX);
        assert_eq!(g.last(), i32::MIN);
    }

    // S5
    #[test]
    fn multi_record_aggregates() {
        let mut g = Genome::new(16);
        parse_bytes(
            b"# h\nrs5\t1\t10\tAA\nrs2\t2\t20\tCC\nrs9\t3\t30\tGG\n",
            &mut g,
        );
        assert_eq!(g.len(), 3);
        assert_eq!(g.first(), 2);
        assert_eq!(g.last(), 9);
    }

    #[test]
    fn batch_boundary_crossing() {
        let mut g = Genome::new(16);
        let mut text = String::new();
        for i in 1..=205 {
            text.push_str(&format!("rs{i}\t1\t{i}\tAA\n"));
        }
        let stats = parse_bytes(text.as_bytes(), &mut g);
        assert_eq!(stats.records_parsed, 205);
        assert_eq!(g.len(), 205);
    }
}
