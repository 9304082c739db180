use std::fmt::{Display, Error, Formatter};

use memchr::memchr_iter;

use crate::engine::{ScanEngine, ScanError};
use crate::pattern::Pattern;
use crate::sink::{MatchEvent, MatchSink};

//------------------------------------------------------------------------------
// First-byte engine
/// Reports a hit at every position whose byte equals the pattern's first byte.
///
/// This is a proxy check, not substring verification: its hit count is a
/// superset of the true occurrence count, and it serves as the cost floor for
/// touching every buffer position once.
#[derive(Debug)]
pub struct FirstByteScan {
    byte: u8,
}

impl FirstByteScan {
    /// Builds the engine from the pattern's first byte.
    pub fn new(pattern: &Pattern) -> Self {
        Self {
            byte: pattern.first(),
        }
    }
}

impl ScanEngine for FirstByteScan {
    fn scan(&self, haystack: &[u8], sink: &mut dyn MatchSink) -> Result<(), ScanError> {
        for position in memchr_iter(self.byte, haystack) {
            sink.on_match(MatchEvent::new(0, position, position));
        }
        Ok(())
    }
}

impl Display for FirstByteScan {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(FirstByte: {:#04x})", self.byte)
    }
}
