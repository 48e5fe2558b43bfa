//! Set operations between two genomes.

use crate::genome::Genome;
use crate::snp::Rsid;
use rayon::prelude::*;

/// RSIDs present in both genomes. Iterates the smaller genome's entries and
/// probes the larger one, so cost is `O(min(|a|, |b|))` expected, not
/// `O(|a|)` regardless of which side is smaller.
pub fn intersect_rsid(a: &Genome, b: &Genome) -> Vec<Rsid> {
    let (small, large) = smaller_first(a, b);
    small
        .iter()
        .filter(|entry| large.has(entry.rsid))
        .map(|entry| entry.rsid)
        .collect()
}

/// RSIDs present in both genomes with an identical genotype call.
pub fn intersect_snp(a: &Genome, b: &Genome) -> Vec<Rsid> {
    let (small, large) = smaller_first(a, b);
    small
        .iter()
        .filter(|entry| large.lookup(entry.rsid) == &entry.snp)
        .map(|entry| entry.rsid)
        .collect()
}

/// Rayon-parallel variant of [`intersect_rsid`], for large genomes.
pub fn intersect_rsid_parallel(a: &Genome, b: &Genome) -> Vec<Rsid> {
    let (small, large) = smaller_first(a, b);
    let entries: Vec<_> = small.iter().collect();
    entries
        .into_par_iter()
        .filter(|entry| large.has(entry.rsid))
        .map(|entry| entry.rsid)
        .collect()
}

/// Rayon-parallel variant of [`intersect_snp`], for large genomes.
pub fn intersect_snp_parallel(a: &Genome, b: &Genome) -> Vec<Rsid> {
    let (small, large) = smaller_first(a, b);
    let entries: Vec<_> = small.iter().collect();
    entries
        .into_par_iter()
        .filter(|entry| large.lookup(entry.rsid) == &entry.snp)
        .map(|entry| entry.rsid)
        .collect()
}

#[inline]
fn smaller_first<'a>(a: &'a Genome, b: &'a Genome) -> (&'a Genome, &'a Genome) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}
