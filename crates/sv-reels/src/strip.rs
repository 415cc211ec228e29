//! Reel strip sequences and circular window reads

use serde::{Deserialize, Serialize};

/// An ordered, logically circular sequence of symbol ids.
///
/// The position before index 0 reads as the last element and the position
/// after the last index reads as the first, so a visible window may wrap
/// around either end. Immutable per round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ReelStrip {
    pub symbols: Vec<String>,
}

impl ReelStrip {
    pub fn new(symbols: Vec<String>) -> Self {
        Self { symbols }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Exclusive upper bound of the valid stop range: stops are drawn from
    /// `0..stop_bound()`, leaving room for a full default window.
    pub fn stop_bound(&self) -> usize {
        self.len().saturating_sub(2)
    }

    /// Read `size` consecutive symbols starting at `stop`, wrapping through
    /// the circular extension.
    pub fn window(&self, stop: usize, size: usize) -> Vec<String> {
        if self.symbols.is_empty() {
            return Vec::new();
        }
        (0..size)
            .map(|i| self.symbols[(stop + i) % self.symbols.len()].clone())
            .collect()
    }

    /// All valid stop indices where `symbol` sits in the first window row.
    pub fn stops_showing(&self, symbol: &str) -> Vec<usize> {
        (0..self.stop_bound())
            .filter(|&i| self.symbols[i] == symbol)
            .collect()
    }

    /// Occurrences of each symbol on this strip.
    pub fn count_of(&self, symbol: &str) -> usize {
        self.symbols.iter().filter(|s| s.as_str() == symbol).count()
    }
}

impl From<Vec<&str>> for ReelStrip {
    fn from(symbols: Vec<&str>) -> Self {
        Self::new(symbols.into_iter().map(String::from).collect())
    }
}
