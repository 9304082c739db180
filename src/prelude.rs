//! Common imports for library consumers.

pub use crate::buffer::{ByteBuffer, LoadError, MAX_BUFFER_LEN, load};
pub use crate::engine::external::{CompiledScan, EngineScan, LiteralCompiler, RegexCompiler};
pub use crate::engine::first_byte::FirstByteScan;
pub use crate::engine::lanes::LaneScan;
pub use crate::engine::nested::NestedScan;
pub use crate::engine::noop::NoopScan;
pub use crate::engine::{ScanEngine, ScanError};
pub use crate::harness::{BenchmarkResult, CountMismatch, RunStatus, run_all, verify_counts};
pub use crate::options::{Options, OptionsBuilder};
pub use crate::pattern::{Pattern, PatternError};
pub use crate::registry::{StrategyDescriptor, default_registry};
pub use crate::sink::{HitCounter, MatchEvent, MatchSink};
