//! Match reporting.
//!
//! Strategies communicate occurrences through a [`MatchSink`]; they get write
//! access only. The production sink is [`HitCounter`], owned by the harness
//! and handed to each strategy by exclusive mutable reference, so totals stay
//! order-insensitive and no strategy can branch on another's results.

/// One reported occurrence.
///
/// Offsets follow the reference convention: `end` is the index of the final
/// matching byte (inclusive), the position where the match was confirmed. For
/// a single-byte check, `start == end`. The event only lives for the duration
/// of one sink callback; sinks that need it must copy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchEvent {
    /// Identifier of the pattern that matched. Single-pattern runs use 0.
    pub pattern_id: u32,
    /// Offset of the first byte of the occurrence.
    pub start: usize,
    /// Offset of the last byte of the occurrence (inclusive).
    pub end: usize,
    /// Reserved for future use.
    pub flags: u32,
}

impl MatchEvent {
    /// Creates an event for pattern `pattern_id` spanning `start..=end`.
    pub fn new(pattern_id: u32, start: usize, end: usize) -> Self {
        Self {
            pattern_id,
            start,
            end,
            flags: 0,
        }
    }
}

/// Receiver for match reports.
pub trait MatchSink {
    /// Called once per occurrence, in scan order.
    fn on_match(&mut self, event: MatchEvent);

    /// Called at most once per scan by strategies that accumulate hits in
    /// private lanes and flush the total after the scan completes.
    fn on_bulk(&mut self, hits: u64);
}

/// Counting sink.
///
/// Reset before each strategy runs, incremented once per match event (or by a
/// bulk total), read once after the strategy returns.
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: u64,
}

impl HitCounter {
    /// Creates a counter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the counter to zero.
    pub fn reset(&mut self) {
        self.hits = 0;
    }

    /// Returns the number of hits reported since the last reset.
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

impl MatchSink for HitCounter {
    fn on_match(&mut self, _event: MatchEvent) {
        self.hits += 1;
    }

    fn on_bulk(&mut self, hits: u64) {
        self.hits += hits;
    }
}
