//! Bounded command history
//!
//! The console-facing consumer of [`RingBuffer`]: a small overwriting
//! window of accepted command lines with fuzzy-matched suggestions for
//! autocompletion.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use tracing::trace;

use crate::ring::RingBuffer;

/// Default number of remembered command lines.
pub const DEFAULT_HISTORY_CAPACITY: usize = 8;

/// A bounded history of accepted command lines.
///
/// Backed by an overwriting [`RingBuffer`]: once the window is full, each
/// newly accepted line displaces the oldest one. Entries are listed
/// oldest-to-newest, matching how a console renders its history.
pub struct CommandHistory {
    entries: RingBuffer<String>,
    matcher: SkimMatcherV2,
}

impl CommandHistory {
    /// Create a history with the default window of
    /// [`DEFAULT_HISTORY_CAPACITY`] lines.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history remembering at most `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RingBuffer::with_overwrite(capacity, true),
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Record an accepted command line.
    ///
    /// Leading and trailing whitespace is trimmed; empty lines and exact
    /// repeats of the most recent entry are ignored.
    pub fn record(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }
        if let Ok(last) = self.entries.peek_back() {
            if last == line {
                return;
            }
        }
        trace!(line, "recording command line");
        // Overwrite is on, so add cannot fail on a non-zero window.
        let _ = self.entries.add(line.to_string());
    }

    /// All remembered lines, oldest to newest.
    pub fn entries(&self) -> Vec<String> {
        match self.entries.peek_n(self.entries.len()) {
            Ok(lines) => lines,
            Err(_) => Vec::new(),
        }
    }

    /// Number of remembered lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no lines have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every recorded line.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// History entries fuzzily matching `input`, best match first.
    ///
    /// Ties are broken toward more recent entries so the suggestion a user
    /// most likely wants to repeat surfaces first.
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        if input.trim().is_empty() {
            let mut recent = self.entries();
            recent.reverse();
            return recent;
        }
        let mut scored: Vec<(i64, usize, &String)> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(age, line)| {
                self.matcher
                    .fuzzy_match(line, input)
                    .map(|score| (score, age, line))
            })
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));
        scored.into_iter().map(|(_, _, line)| line.clone()).collect()
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}
