use std::fmt::{Display, Error, Formatter};

use crate::engine::{ScanEngine, ScanError};
use crate::sink::MatchSink;

//------------------------------------------------------------------------------
// Noop engine
/// Placeholder strategy: scans nothing, reports nothing, never errors.
///
/// Registered to keep the registry's shape for future strategies.
#[derive(Debug, Default)]
pub struct NoopScan;

impl ScanEngine for NoopScan {
    fn scan(&self, _haystack: &[u8], _sink: &mut dyn MatchSink) -> Result<(), ScanError> {
        Ok(())
    }
}

impl Display for NoopScan {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Noop)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::test_util::Recorder;

    #[test]
    fn reports_nothing_and_never_errors() {
        let mut sink = Recorder::default();
        NoopScan.scan(b"anything at all", &mut sink).unwrap();
        assert_eq!(sink.total(), 0);
    }
}
