#![allow(clippy::too_many_arguments)]
#![allow(clippy::should_implement_trait)]

//! A queryable in-memory store for personal genotyping data.
//!
//! This crate parses 23andMe-style genotype export files into a compact,
//! hash-indexed collection of SNPs keyed by RSID, and exposes set
//! operations (intersection by RSID and by genotype) between two such
//! collections.
//!
//! # Example
//!
//! ```rust,no_run
//! use snptraits::{genome::Genome, parser};
//!
//! let mut genome = Genome::default();
//! parser::parse_file("genome.txt", &mut genome).unwrap();
//!
//! if genome.has(123) {
//!     println!("{}", genome.lookup(123).genotype);
//! }
//! ```

pub mod batch;
pub mod chromosome;
pub mod config;
pub mod error;
pub mod generate;
pub mod genome;
pub mod genotype;
pub mod index;
pub mod mapped_file;
pub mod nucleotide;
pub mod parser;
pub mod scan;
pub mod setops;
pub mod snp;

pub use error::{GenomeError, Result};
pub use genome::Genome;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::chromosome::Chromosome;
    pub use crate::error::{GenomeError, Result};
    pub use crate::genome::Genome;
    pub use crate::genotype::Genotype;
    pub use crate::nucleotide::Nucleotide;
    pub use crate::parser::{parse_bytes, parse_file, ParseStats};
    pub use crate::setops::{intersect_rsid, intersect_snp};
    pub use crate::snp::{Rsid, RsidSnp, Snp, NONE_SNP};
}
