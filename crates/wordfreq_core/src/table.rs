use std::collections::HashMap;

use crate::{tokenize, Token};

/// Occurrence count per distinct token. Iteration order is unspecified.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    counts: HashMap<Token, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        table.extend(tokenize(text));
        table
    }

    pub fn count(&mut self, token: &str) {
        self.count_n(token, 1);
    }

    pub fn count_n(&mut self, token: &str, n: u64) {
        // Avoid allocating a key for tokens already present.
        if let Some(slot) = self.counts.get_mut(token) {
            *slot += n;
        } else {
            self.counts.insert(token.to_owned(), n);
        }
    }

    /// Merges `other` into `self` by summing counts.
    pub fn absorb(&mut self, other: FrequencyTable) {
        for (token, n) in other.counts {
            *self.counts.entry(token).or_default() += n;
        }
    }

    pub fn get(&self, token: &str) -> u64 {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub(crate) fn into_counts(self) -> HashMap<Token, u64> {
        self.counts
    }
}

impl<'a> Extend<&'a str> for FrequencyTable {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for token in iter {
            self.count(token);
        }
    }
}
