//! Substring-search strategies.
//!
//! Every strategy implements [`ScanEngine`], the exact-match contract:
//!
//! - all overlapping occurrences are reported; after an occurrence starting
//!   at `i`, scanning resumes at `i + 1`, never ahead by the pattern length;
//! - reported end offsets are the index of the final matching byte;
//! - neither the haystack nor the pattern is mutated;
//! - an empty haystack must be tolerated without reading out of bounds, even
//!   though the loader never produces one;
//! - only unrecoverable setup failures are errors. Per-byte mismatches are
//!   not.

use std::fmt::Display;

use thiserror::Error;

use crate::sink::MatchSink;

pub mod external;
pub mod first_byte;
pub mod lanes;
pub mod nested;
pub mod noop;

/// Unrecoverable strategy setup failure.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The external engine rejected the pattern.
    #[error("unable to compile pattern \"{pattern}\": {message}")]
    PatternCompile {
        /// The offending pattern, lossily decoded for display.
        pattern: String,
        /// The engine's explanation.
        message: String,
    },
}

/// One algorithmic implementation of the exact-match contract.
pub trait ScanEngine: Display {
    /// Scans `haystack`, reporting every occurrence to `sink`.
    ///
    /// All sink callbacks complete before this returns.
    fn scan(&self, haystack: &[u8], sink: &mut dyn MatchSink) -> Result<(), ScanError>;
}
