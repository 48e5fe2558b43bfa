//! Memory-mapped byte-range provider for input files.

use crate::error::Result;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// A read-only view over a file's bytes, backed by an mmap.
pub struct MappedFile {
    mmap: Mmap,
}

impl MappedFile {
    /// Open and map `path`. Fails with `GenomeError::Io` if the file can't
    /// be opened or mapped.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<MappedFile> {
        let file = File::open(path)?;
        // Safety: the mapping is read-only and this struct owns the file
        // handle for its lifetime; external truncation of the underlying
        // file while mapped is the caller's responsibility to avoid, as
        // with any mmap use.
        let mmap = unsafe { Mmap::map(&file) }?;
        Ok(MappedFile { mmap })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.mmap[..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn maps_file_contents() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"rs1\t1\t100\tAG\n").unwrap();
        let mapped = MappedFile::open(f.path()).unwrap();
        assert_eq!(mapped.as_bytes(), b"rs1\t1\t100\tAG\n");
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = MappedFile::open("/nonexistent/path/does-not-exist");
        assert!(result.is_err());
    }
}
