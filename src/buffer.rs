//! Whole-file buffer loading.
//!
//! The loader reads an input file fully into memory and hands the bytes,
//! unchanged, to every strategy. Loader failures abort the run before any
//! strategy executes; an over-long input is clipped with a warning instead.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use thiserror::Error;

/// Largest buffer length a scan accepts. Longer inputs are clipped to this
/// many bytes, with a logged warning.
pub const MAX_BUFFER_LEN: u64 = u32::MAX as u64;

/// Why an input file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input file does not exist.
    #[error("input file \"{path}\" not found")]
    NotFound {
        /// Path as given on the command line.
        path: String,
    },
    /// The input file exists but could not be opened or read.
    #[error("unable to read \"{path}\": {source}")]
    Unreadable {
        /// Path as given on the command line.
        path: String,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// The input file is empty; there is nothing to scan.
    #[error("input file \"{path}\" is empty")]
    Empty {
        /// Path as given on the command line.
        path: String,
    },
    /// The buffer allocation failed.
    #[error("unable to allocate {len} bytes for \"{path}\"")]
    Alloc {
        /// Path as given on the command line.
        path: String,
        /// Requested allocation size.
        len: usize,
    },
}

/// An immutable, exclusively owned byte buffer.
///
/// Created by [`load`], owned by the harness for the duration of a run, and
/// released after all strategies complete. The loader guarantees the buffer
/// is non-empty; strategies must still tolerate an empty slice without
/// reading out of bounds.
#[derive(Debug)]
pub struct ByteBuffer {
    bytes: Box<[u8]>,
}

impl ByteBuffer {
    /// The buffer contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no bytes. Never true for loaded buffers.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for ByteBuffer {
    /// Wraps in-memory bytes directly, bypassing the loader. Unlike [`load`],
    /// this performs no emptiness check.
    fn from(bytes: Vec<u8>) -> Self {
        Self {
            bytes: bytes.into_boxed_slice(),
        }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Reads `path` fully into memory as raw bytes. No format is assumed.
pub fn load(path: impl AsRef<Path>) -> Result<ByteBuffer, LoadError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let mut file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: display.clone(),
        },
        _ => LoadError::Unreadable {
            path: display.clone(),
            source: err,
        },
    })?;

    let metadata = file.metadata().map_err(|err| LoadError::Unreadable {
        path: display.clone(),
        source: err,
    })?;

    let mut len = metadata.len();
    if len == 0 {
        return Err(LoadError::Empty { path: display });
    }
    if len > MAX_BUFFER_LEN {
        warn!("clipping \"{display}\" from {len} to {MAX_BUFFER_LEN} bytes");
        len = MAX_BUFFER_LEN;
    }
    let len = len as usize;

    let mut bytes = Vec::new();
    bytes
        .try_reserve_exact(len)
        .map_err(|_| LoadError::Alloc {
            path: display.clone(),
            len,
        })?;
    file.by_ref()
        .take(len as u64)
        .read_to_end(&mut bytes)
        .map_err(|err| LoadError::Unreadable {
            path: display.clone(),
            source: err,
        })?;

    // The file may have shrunk between the metadata call and the read.
    if bytes.is_empty() {
        return Err(LoadError::Empty { path: display });
    }

    debug!("loaded {} bytes from \"{display}\"", bytes.len());
    Ok(ByteBuffer::from(bytes))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn empty_file_is_rejected() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::Empty { .. }));
    }

    #[test]
    fn loads_raw_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"the quick brown fox").unwrap();
        let buffer = load(file.path()).unwrap();
        assert_eq!(buffer.as_bytes(), b"the quick brown fox");
        assert_eq!(buffer.len(), 19);
        assert!(!buffer.is_empty());
    }
}
