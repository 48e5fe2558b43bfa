//! Crate-level error type.

use thiserror::Error;

/// Errors produced by this crate. Per the parser's contract, only I/O
/// failures ever surface here — malformed lines are skipped silently and a
/// missing RSID lookup returns [`crate::snp::NONE_SNP`] rather than an error.
#[derive(Error, Debug)]
pub enum GenomeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenomeError>;
