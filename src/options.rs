//! Configuration options for haybench.

use std::path::PathBuf;

use derive_builder::Builder;

/// hb - substring scan benchmark
///
/// Times every registered substring-search strategy against the contents of
/// one input file and prints a report row per strategy.
#[derive(Debug, Clone, Default, Builder)]
#[builder(default)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "hb", args_override_self = true, version, about)
)]
pub struct Options {
    /// Literal pattern to search for
    ///
    /// Matched byte-for-byte; regex metacharacters have no special meaning.
    #[cfg_attr(feature = "cli", arg(value_name = "PATTERN"))]
    pub pattern: String,

    /// File whose contents are scanned
    ///
    /// Read fully into memory as raw bytes; no format is assumed.
    #[cfg_attr(feature = "cli", arg(value_name = "INPUT"))]
    pub input: PathBuf,

    /// Cross-check hit counts after the timed runs
    ///
    /// Re-runs the plain nested scan as the reference count and exits
    /// non-zero if any full-verification strategy disagrees.
    #[cfg_attr(feature = "cli", arg(long))]
    pub check: bool,
}
