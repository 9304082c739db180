use std::fmt::{Display, Error, Formatter};

use crate::engine::{ScanEngine, ScanError};
use crate::pattern::Pattern;
use crate::sink::{MatchEvent, MatchSink};

//------------------------------------------------------------------------------
// Nested engine
/// Brute-force nested scan.
///
/// Compares the pattern byte-by-byte at every start offset, abandoning an
/// offset on the first mismatch. All overlapping occurrences are reported.
#[derive(Debug)]
pub struct NestedScan {
    pattern: Pattern,
}

impl NestedScan {
    /// Builds the engine over `pattern`.
    pub fn new(pattern: &Pattern) -> Self {
        Self {
            pattern: pattern.clone(),
        }
    }
}

impl ScanEngine for NestedScan {
    fn scan(&self, haystack: &[u8], sink: &mut dyn MatchSink) -> Result<(), ScanError> {
        let needle = self.pattern.as_bytes();
        // saturating_sub keeps the range empty when the needle is longer than
        // the haystack, instead of underflowing into a huge iteration count.
        let starts = haystack.len().saturating_sub(needle.len() - 1);
        for i in 0..starts {
            for (j, &expected) in needle.iter().enumerate() {
                if haystack[i + j] != expected {
                    break;
                }
                if j == needle.len() - 1 {
                    sink.on_match(MatchEvent::new(0, i, i + j));
                }
            }
        }
        Ok(())
    }
}

impl Display for NestedScan {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Nested: {})", self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::test_util::Recorder;

    fn scan(haystack: &[u8], pattern: &[u8]) -> Recorder {
        let engine = NestedScan::new(&Pattern::new(pattern).unwrap());
        let mut sink = Recorder::default();
        engine.scan(haystack, &mut sink).unwrap();
        sink
    }

    #[test]
    fn reports_overlapping_occurrences() {
        let sink = scan(b"aaa", b"aa");
        assert_eq!(sink.ends(), vec![1, 2]);
    }

    #[test]
    fn end_offsets_are_the_final_matching_byte() {
        let sink = scan(b"abababab", b"aba");
        assert_eq!(sink.ends(), vec![2, 4, 6]);
        assert_eq!(sink.events[0].start, 0);
        assert_eq!(sink.events[1].start, 2);
        assert_eq!(sink.events[2].start, 4);
    }

    #[test]
    fn single_byte_pattern_matches_first_byte_scan() {
        let sink = scan(b"the quick brown fox", b"o");
        assert_eq!(sink.ends(), vec![12, 17]);
    }

    #[test]
    fn needle_longer_than_haystack_reports_nothing() {
        let sink = scan(b"ab", b"abc");
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn tolerates_empty_haystack() {
        let sink = scan(b"", b"abc");
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn repeated_scans_agree() {
        let engine = NestedScan::new(&Pattern::new(&b"fox"[..]).unwrap());
        let mut first = Recorder::default();
        let mut second = Recorder::default();
        engine.scan(b"the quick brown fox", &mut first).unwrap();
        engine.scan(b"the quick brown fox", &mut second).unwrap();
        assert_eq!(first.total(), second.total());
    }
}
