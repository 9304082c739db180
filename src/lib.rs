//! Haybench times several literal substring-search strategies against the
//! same in-memory byte buffer.
//!
//! Every strategy implements one contract ([`ScanEngine`]) and reports each
//! occurrence it finds to a [`MatchSink`]; the harness owns the hit counter,
//! resets it before each strategy, times the scan, and reports one result row
//! per strategy. Strategies never mutate the buffer or the pattern, and one
//! failing strategy does not abort the batch.
//!
//! # Examples
//!
//! ```no_run
//! use haybench::prelude::*;
//!
//! let pattern = Pattern::new("int".as_bytes()).unwrap();
//! let buffer = load("src/main.rs").unwrap();
//!
//! let registry = default_registry(&pattern);
//! run_all(&registry, &buffer, |result| {
//!     println!("{}: {} hits", result.name, result.hits);
//! });
//! ```

#![warn(missing_docs)]

#[macro_use]
extern crate log;

pub mod buffer;
pub mod engine;
pub mod harness;
pub mod options;
pub mod pattern;
pub mod prelude;
pub mod registry;
pub mod sink;

pub use crate::buffer::{ByteBuffer, LoadError, load};
pub use crate::engine::{ScanEngine, ScanError};
pub use crate::harness::{BenchmarkResult, RunStatus};
pub use crate::options::Options;
pub use crate::pattern::{Pattern, PatternError};
pub use crate::sink::{HitCounter, MatchEvent, MatchSink};
