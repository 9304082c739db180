use std::fmt::{Display, Error, Formatter};
use std::str;

use regex::bytes::{Regex, RegexBuilder};

use crate::engine::{ScanEngine, ScanError};
use crate::pattern::Pattern;
use crate::sink::{MatchEvent, MatchSink};

//------------------------------------------------------------------------------
// External engine
/// A matcher produced by [`LiteralCompiler::compile`].
///
/// `scan` reports every occurrence synchronously: all sink callbacks complete
/// before it returns. Any scratch memory lives in the compiled matcher and is
/// released when it is dropped, at the end of the strategy run.
pub trait CompiledScan {
    /// Scans `haystack`, reporting every occurrence to `sink`.
    fn scan(&self, haystack: &[u8], sink: &mut dyn MatchSink);
}

/// Compiles a literal pattern into a [`CompiledScan`].
///
/// Injected into [`EngineScan`] so tests can substitute a deterministic fake
/// for the production engine.
pub trait LiteralCompiler {
    /// Compiles `pattern`, or explains why the engine rejected it.
    fn compile(&self, pattern: &Pattern) -> Result<Box<dyn CompiledScan>, ScanError>;
}

/// Production compiler: the pattern escaped into a literal `regex` expression
/// over raw bytes, with `.` matching newlines.
#[derive(Debug, Default)]
pub struct RegexCompiler;

impl LiteralCompiler for RegexCompiler {
    fn compile(&self, pattern: &Pattern) -> Result<Box<dyn CompiledScan>, ScanError> {
        let text = str::from_utf8(pattern.as_bytes()).map_err(|err| ScanError::PatternCompile {
            pattern: pattern.to_string(),
            message: err.to_string(),
        })?;
        let regex = RegexBuilder::new(&regex::escape(text))
            .dot_matches_new_line(true)
            .build()
            .map_err(|err| ScanError::PatternCompile {
                pattern: text.to_string(),
                message: err.to_string(),
            })?;
        Ok(Box::new(CompiledRegex { regex }))
    }
}

struct CompiledRegex {
    regex: Regex,
}

impl CompiledScan for CompiledRegex {
    fn scan(&self, haystack: &[u8], sink: &mut dyn MatchSink) {
        // find_iter skips overlaps, so resume one past each match start
        // instead. The pattern is non-empty, so every match advances.
        let mut at = 0;
        while let Some(m) = self.regex.find_at(haystack, at) {
            sink.on_match(MatchEvent::new(0, m.start(), m.end() - 1));
            at = m.start() + 1;
        }
    }
}

/// Strategy backed by an external matching engine.
///
/// Compiles the pattern at scan time and delegates the search to the compiled
/// matcher, so each run exercises the engine's full compile/scan/release
/// lifecycle. A compile failure aborts this strategy only.
pub struct EngineScan<C = RegexCompiler> {
    pattern: Pattern,
    compiler: C,
}

impl EngineScan<RegexCompiler> {
    /// Builds the strategy with the production regex compiler.
    pub fn new(pattern: &Pattern) -> Self {
        Self::with_compiler(pattern, RegexCompiler)
    }
}

impl<C: LiteralCompiler> EngineScan<C> {
    /// Builds the strategy with an injected compiler.
    pub fn with_compiler(pattern: &Pattern, compiler: C) -> Self {
        Self {
            pattern: pattern.clone(),
            compiler,
        }
    }
}

impl<C: LiteralCompiler> ScanEngine for EngineScan<C> {
    fn scan(&self, haystack: &[u8], sink: &mut dyn MatchSink) -> Result<(), ScanError> {
        let compiled = self.compiler.compile(&self.pattern)?;
        compiled.scan(haystack, sink);
        Ok(())
    }
}

impl<C> Display for EngineScan<C> {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "(Engine: {})", self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::test_util::Recorder;

    fn scan(haystack: &[u8], pattern: &[u8]) -> Recorder {
        let engine = EngineScan::new(&Pattern::new(pattern).unwrap());
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
    fn agrees_with_nested_scan_on_end_offsets() {
        let sink = scan(b"abababab", b"aba");
        assert_eq!(sink.ends(), vec![2, 4, 6]);
    }

    #[test]
    fn treats_metacharacters_literally() {
        let sink = scan(b"a.c abc", b"a.c");
        assert_eq!(sink.ends(), vec![2]);
    }

    #[test]
    fn matches_across_newlines() {
        let sink = scan(b"a\nb a\nb", b"a\nb");
        assert_eq!(sink.total(), 2);
    }

    #[test]
    fn invalid_utf8_pattern_fails_to_compile() {
        let engine = EngineScan::new(&Pattern::new(vec![0xff, 0xfe]).unwrap());
        let mut sink = Recorder::default();
        let err = engine.scan(b"abc", &mut sink).unwrap_err();
        assert!(matches!(err, ScanError::PatternCompile { .. }));
        assert_eq!(sink.total(), 0);
    }

    #[test]
    fn fake_compiler_is_injectable() {
        struct FixedEvents(Vec<MatchEvent>);

        impl CompiledScan for FixedEvents {
            fn scan(&self, _haystack: &[u8], sink: &mut dyn MatchSink) {
                for &event in &self.0 {
                    sink.on_match(event);
                }
            }
        }

        struct FakeCompiler;

        impl LiteralCompiler for FakeCompiler {
            fn compile(&self, _pattern: &Pattern) -> Result<Box<dyn CompiledScan>, ScanError> {
                Ok(Box::new(FixedEvents(vec![
                    MatchEvent::new(0, 1, 3),
                    MatchEvent::new(0, 2, 4),
                ])))
            }
        }

        let pattern = Pattern::new(&b"xyz"[..]).unwrap();
        let engine = EngineScan::with_compiler(&pattern, FakeCompiler);
        let mut sink = Recorder::default();
        engine.scan(b"whatever", &mut sink).unwrap();
        assert_eq!(sink.ends(), vec![3, 4]);
    }
}
