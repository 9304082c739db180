//! The benchmark harness.
//!
//! Runs every registered strategy, in registration order, against one loaded
//! buffer: reset the hit counter, time the scan, report a result row. A
//! failing strategy is reported as failed and the batch continues.

use std::time::Instant;

use crate::buffer::ByteBuffer;
use crate::engine::ScanEngine;
use crate::engine::ScanError;
use crate::engine::nested::NestedScan;
use crate::pattern::Pattern;
use crate::registry::StrategyDescriptor;
use crate::sink::HitCounter;

/// Outcome of one strategy run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    /// The strategy ran to completion.
    Done,
    /// The strategy aborted during setup; the message names the cause.
    Failed(String),
}

impl RunStatus {
    /// Whether the strategy completed.
    pub fn is_done(&self) -> bool {
        matches!(self, RunStatus::Done)
    }
}

/// One report row.
///
/// Produced per strategy, handed to the reporter, and not retained by the
/// harness.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// Strategy display name.
    pub name: String,
    /// Whether the strategy completed or why it failed.
    pub status: RunStatus,
    /// Hits reported during this run.
    pub hits: u64,
    /// Elapsed wall-clock time for the scan, in milliseconds.
    pub elapsed_ms: f64,
}

/// Runs every strategy in `registry` against `buffer`, calling `report` with
/// each result as it is produced.
pub fn run_all<R>(registry: &[StrategyDescriptor], buffer: &ByteBuffer, mut report: R)
where
    R: FnMut(BenchmarkResult),
{
    let mut counter = HitCounter::new();
    for descriptor in registry {
        counter.reset();
        trace!("running {}", descriptor.engine());
        let started = Instant::now();
        let outcome = descriptor.engine().scan(buffer.as_bytes(), &mut counter);
        let elapsed_ms = started.elapsed().as_secs_f64() * 1e3;

        let status = match outcome {
            Ok(()) => RunStatus::Done,
            Err(err) => {
                warn!("strategy {} failed: {err}", descriptor.name());
                RunStatus::Failed(err.to_string())
            }
        };
        report(BenchmarkResult {
            name: descriptor.name().to_string(),
            status,
            hits: counter.hits(),
            elapsed_ms,
        });
    }
}

/// A strategy whose hit count disagreed with the reference count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountMismatch {
    /// Strategy display name.
    pub name: String,
    /// What the strategy reported.
    pub hits: u64,
    /// What the plain nested scan reported.
    pub expected: u64,
}

/// Cross-checks every full-verification strategy against the plain nested
/// scan's count on the same input.
///
/// Proxy strategies are exempt: their counts are not true occurrence counts
/// by design. Strategies that fail to run are skipped here; their failure is
/// already surfaced by [`run_all`].
pub fn verify_counts(
    registry: &[StrategyDescriptor],
    buffer: &ByteBuffer,
    pattern: &Pattern,
) -> Result<Vec<CountMismatch>, ScanError> {
    let mut counter = HitCounter::new();
    NestedScan::new(pattern).scan(buffer.as_bytes(), &mut counter)?;
    let expected = counter.hits();

    let mut mismatches = Vec::new();
    for descriptor in registry.iter().filter(|d| !d.is_proxy()) {
        counter.reset();
        if descriptor.engine().scan(buffer.as_bytes(), &mut counter).is_err() {
            debug!("skipping {} during cross-check: strategy failed to run", descriptor.name());
            continue;
        }
        if counter.hits() != expected {
            mismatches.push(CountMismatch {
                name: descriptor.name().to_string(),
                hits: counter.hits(),
                expected,
            });
        }
    }
    Ok(mismatches)
}
