//! Global configuration for runtime behavior.
//!
//! This module provides thread-safe global configuration that affects
//! genome construction without adding overhead to hot loops.

use crate::genome::DEFAULT_CAPACITY;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Process-wide initial capacity hint used by `Genome::default()`.
///
/// Set once at startup, before constructing any `Genome` via `Default`.
/// Callers that need per-instance control should use `Genome::new(n)`
/// directly instead.
static DEFAULT_GENOME_CAPACITY: AtomicUsize = AtomicUsize::new(DEFAULT_CAPACITY);

/// Override the capacity hint used by `Genome::default()`.
///
/// # Example
///
/// ```
/// use snptraits::config;
///
/// config::set_default_genome_capacity(2_000_000);
/// ```
#[inline]
pub fn set_default_genome_capacity(capacity: usize) {
    DEFAULT_GENOME_CAPACITY.store(capacity, Ordering::Release);
}

/// Read the current default genome capacity hint.
#[inline]
pub fn default_genome_capacity() -> usize {
    DEFAULT_GENOME_CAPACITY.load(Ordering::Acquire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Both tests mutate the same process-wide atomic, so they must not
    // interleave with each other (or with any other test that reads the
    // default capacity) across threads.
    #[test]
    #[serial]
    fn default_is_the_reference_capacity() {
        set_default_genome_capacity(DEFAULT_CAPACITY);
        assert_eq!(default_genome_capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    #[serial]
    fn override_is_observed() {
        set_default_genome_capacity(42);
        assert_eq!(default_genome_capacity(), 42);
        set_default_genome_capacity(DEFAULT_CAPACITY);
    }
}
