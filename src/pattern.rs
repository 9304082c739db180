//! The search pattern.

use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// Error raised when a pattern cannot be constructed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// An empty pattern would make every scan range degenerate, so it is
    /// rejected before any strategy runs.
    #[error("pattern must not be empty")]
    Empty,
}

/// The literal byte sequence every strategy searches for.
///
/// Immutable, guaranteed non-empty, and shared read-only across all
/// strategies for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    bytes: Box<[u8]>,
}

impl Pattern {
    /// Builds a pattern from raw bytes, rejecting empty input.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, PatternError> {
        let bytes: Vec<u8> = bytes.into();
        if bytes.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            bytes: bytes.into_boxed_slice(),
        })
    }

    /// The pattern bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the pattern. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// The first pattern byte.
    pub fn first(&self) -> u8 {
        self.bytes[0]
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::new(s.as_bytes())
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}
