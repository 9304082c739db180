use std::fmt::{Display, Error, Formatter};

use crate::engine::{ScanEngine, ScanError};
use crate::pattern::Pattern;
use crate::sink::MatchSink;

/// Number of independent hit lanes. Matches a 16-byte vector register width.
const LANES: usize = 16;

//------------------------------------------------------------------------------
// Lane-accumulated nested engine
/// Nested scan with deferred, lane-accumulated counting.
///
/// Behaviorally identical to [`NestedScan`](crate::engine::nested::NestedScan):
/// same comparisons, same set of occurrences. Hits land in 16 independent lane
/// counters selected by end offset, so the scan loop carries no single shared
/// counter dependency, and the summed total reaches the sink exactly once
/// after the scan completes.
#[derive(Debug)]
pub struct LaneScan {
    pattern: Pattern,
}

impl LaneScan {
    /// Builds the engine over `pattern`.
    pub fn new(pattern: &Pattern) -> Self {
        Self {
            pattern: pattern.clone(),
        }
    }
}

impl ScanEngine for LaneScan {
    fn scan(&self, haystack: &[u8], sink: &mut dyn MatchSink) -> Result<(), ScanError> {
        let needle = self.pattern.as_bytes();
        let mut lanes = [0u64; LANES];
        let starts = haystack.len().saturating_sub(needle.len() - 1);
        for i in 0..starts {
            for (j, &expected) in needle.iter().enumerate() {
                if haystack[i + j] != expected {
                    break;
                }
                if j == needle.len() - 1 {
                    lanes[(i + j) % LANES] += 1;
                }
            }
        }
        sink.on_bulk(lanes.iter().sum());
        Ok(())
    }
}

impl Display for LaneScan {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Lanes: {})", self.pattern)
    }
}
