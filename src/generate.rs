//! Synthetic genotype file generation, for benchmarking and test fixtures.
//!
//! Grounded on the teacher's `commands/generate.rs` synthetic-dataset
//! generator: a seeded `SmallRng` drives reproducible output so a benchmark
//! or regression test can regenerate byte-identical input across runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Autosomes plus X/Y/MT, weighted roughly by chromosome size so a
/// generated file resembles a real chip's distribution rather than a
/// uniform one.
const CHROM_TOKENS: &[&str] = &[
    "1", "1", "1", "2", "2", "2", "3", "3", "4", "4", "5", "5", "6", "6", "7", "7", "8", "9", "10",
    "11", "12", "13", "14", "15", "16", "17", "18", "19", "20", "21", "22", "X", "X", "Y", "MT",
];

const NUCLEOTIDES: &[char] = &['A', 'C', 'G', 'T'];

/// Knobs for a generated file.
#[derive(Debug, Clone, Copy)]
pub struct GenerateConfig {
    /// Number of data records to emit.
    pub count: usize,
    /// RNG seed; the same seed always produces the same file.
    pub seed: u64,
    /// Fraction of records (0.0-1.0) emitted as internal (`i`-prefixed)
    /// ids rather than `rs`-prefixed ones.
    pub internal_fraction: f64,
    /// Fraction of records (0.0-1.0) given a no-call genotype (`--`).
    pub no_call_fraction: f64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig {
            count: 100_000,
            seed: 0,
            internal_fraction: 0.01,
            no_call_fraction: 0.02,
        }
    }
}

/// Write a synthetic genotype export file to `path` per `config`.
///
/// Output is a well-formed file per spec.md §6: a one-line comment header,
/// then `count` data lines, each either `rs<digits>` or `i<digits>`,
/// tab-separated chromosome/position/genotype. RSIDs are assigned
/// sequentially from 1 so the result is trivially checkable by a caller
/// that also knows `count`.
pub fn write_file<P: AsRef<Path>>(path: P, config: GenerateConfig) -> io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write(&mut writer, config)
}

/// Write a synthetic genotype export to any `Write`, e.g. for in-memory
/// test fixtures that avoid touching disk.
pub fn write<W: Write>(writer: &mut W, config: GenerateConfig) -> io::Result<()> {
    let mut rng = SmallRng::seed_from_u64(config.seed);
    writeln!(writer, "# synthetic genotype data, generated for testing")?;

    for n in 1..=config.count as u32 {
        let internal = rng.gen_bool(config.internal_fraction);
        if internal {
            write!(writer, "i{n}\t")?;
        } else {
            write!(writer, "rs{n}\t")?;
        }

        let chrom = CHROM_TOKENS[rng.gen_range(0..CHROM_TOKENS.len())];
        write!(writer, "{chrom}\t")?;

        let position = rng.gen_range(1..250_000_000u32);
        write!(writer, "{position}\t")?;

        if rng.gen_bool(config.no_call_fraction) {
            writeln!(writer, "--")?;
        } else if chrom == "Y" && rng.gen_bool(0.5) {
            // Haploid call: a single nucleotide, no second allele.
            let a = NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())];
            writeln!(writer, "{a}-")?;
        } else {
            let a = NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())];
            let b = NUCLEOTIDES[rng.gen_range(0..NUCLEOTIDES.len())];
            writeln!(writer, "{a}{b}")?;
        }
    }

    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Genome;
    use crate::parser::parse_bytes;

    #[test]
    fn generates_requested_record_count() {
        let mut buf = Vec::new();
        write(
            &mut buf,
            GenerateConfig {
                count: 500,
                seed: 1,
                internal_fraction: 0.0,
                no_call_fraction: 0.0,
            },
        )
        .unwrap();

        let mut genome = Genome::new(16);
        let stats = parse_bytes(&buf, &mut genome);
        assert_eq!(stats.records_parsed, 500);
        assert_eq!(genome.len(), 500);
    }

    #[test]
    fn same_seed_is_byte_identical() {
        let config = GenerateConfig {
            count: 1_000,
            seed: 42,
            ..GenerateConfig::default()
        };
        let mut a = Vec::new();
        let mut b = Vec::new();
        write(&mut a, config).unwrap();
        write(&mut b, config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        write(
            &mut a,
            GenerateConfig {
                count: 1_000,
                seed: 1,
                ..GenerateConfig::default()
            },
        )
        .unwrap();
        write(
            &mut b,
            GenerateConfig {
                count: 1_000,
                seed: 2,
                ..GenerateConfig::default()
            },
        )
        .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn all_internal_ids_produce_only_negative_rsids() {
        let mut buf = Vec::new();
        write(
            &mut buf,
            GenerateConfig {
                count: 200,
                seed: 7,
                internal_fraction: 1.0,
                no_call_fraction: 0.0,
            },
        )
        .unwrap();

        let mut genome = Genome::new(16);
        parse_bytes(&buf, &mut genome);
        assert!(genome.rsids().into_iter().all(|r| r < 0));
    }
}
