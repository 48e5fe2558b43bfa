//! SNP records and RSID keys.

use crate::chromosome::Chromosome;
use crate::genotype::Genotype;
use crate::nucleotide::Nucleotide;
use std::cmp::Ordering;

/// A reference SNP identifier. Positive values come from an `rs`-prefixed
/// token in the input; negative values are synthesized from an internal
/// (`i`-prefixed) identifier. Zero is reserved: it never names a real SNP
/// and is used as the empty-slot sentinel in [`crate::index::RsidMap`].
pub type Rsid = i32;

/// One called position: chromosome, 1-based position, and the genotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snp {
    pub chromosome: Chromosome,
    pub position: u32,
    pub genotype: Genotype,
}

impl Snp {
    #[inline]
    pub fn new(chromosome: Chromosome, position: u32, genotype: Genotype) -> Snp {
        Snp {
            chromosome,
            position,
            genotype,
        }
    }
}

/// Ordering used for deterministic iteration/sorting: position, then
/// chromosome, then genotype.
impl PartialOrd for Snp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Snp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position
            .cmp(&other.position)
            .then_with(|| self.chromosome.cmp(&other.chromosome))
            .then_with(|| self.genotype.cmp(&other.genotype))
    }
}

/// Returned by [`crate::genome::Genome::lookup`] when an RSID is absent.
/// `chromosome = None`, `position = 0`, `genotype = (None, None)`.
pub const NONE_SNP: Snp = Snp {
    chromosome: Chromosome::None,
    position: 0,
    genotype: Genotype {
        first: Nucleotide::None,
        second: Nucleotide::None,
    },
};

/// An RSID paired with its SNP, as produced by [`crate::genome::Genome`]
/// iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsidSnp {
    pub rsid: Rsid,
    pub snp: Snp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_position_first() {
        let a = Snp::new(Chromosome::Chr2, 100, Genotype::default());
        let b = Snp::new(Chromosome::Chr1, 200, Genotype::default());
        assert!(a < b);
    }

    #[test]
    fn none_snp_is_the_default() {
        assert_eq!(NONE_SNP, Snp::default());
    }
}
