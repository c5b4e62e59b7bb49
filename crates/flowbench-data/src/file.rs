//! File-backed reference handles

use crate::error::DataError;
use crate::handle::{DataHandle, HandleKind};
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Handle over a reference indirected through the filesystem
///
/// The size probe reads file metadata only; content is touched exclusively
/// by the materialization operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    /// Create a handle over the file at `path`
    #[inline]
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The referenced path
    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataHandle for FileHandle {
    fn kind(&self) -> HandleKind {
        HandleKind::Reference
    }

    fn size_in_bytes(&self) -> Result<u64, DataError> {
        Ok(fs::metadata(&self.path)?.len())
    }

    fn as_string(&self) -> Result<String, DataError> {
        let bytes = fs::read(&self.path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn open(&self) -> Result<Box<dyn Read + '_>, DataError> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn probes_size_from_metadata() {
        let file = write_temp(b"0123456789");
        let handle = FileHandle::new(file.path());
        assert_eq!(handle.kind(), HandleKind::Reference);
        assert_eq!(handle.size_in_bytes().unwrap(), 10);
    }

    #[test]
    fn materializes_content() {
        let file = write_temp(b"reference content");
        let handle = FileHandle::new(file.path());
        assert_eq!(handle.as_string().unwrap(), "reference content");

        let mut buf = Vec::new();
        handle.open().unwrap().read_to_end(&mut buf).unwrap();
        assert_eq!(buf, b"reference content");
    }

    #[test]
    fn missing_file_fails_with_io_error() {
        let handle = FileHandle::new("/nonexistent/flowbench-test-path");
        let err = handle.size_in_bytes().unwrap_err();
        assert!(matches!(err, DataError::Io(_)));
        assert!(handle.as_string().is_err());
    }
}
