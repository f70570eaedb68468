use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};

use crate::{FrequencyTable, Token};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    pub token: Token,
    pub count: u64,
}

/// Higher counts sort first; equal counts fall back to ascending token order.
impl Ord for ReportEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.token.cmp(&other.token))
    }
}

impl PartialOrd for ReportEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.count, self.token)
    }
}

/// Sorted view of a [`FrequencyTable`], ready to be written out.
///
/// Entries are ordered by descending count, then by ascending token. Tokens
/// are unique, so the order is total and the output is deterministic no
/// matter how the table was built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub fn from_table(table: FrequencyTable) -> Self {
        let mut entries: Vec<ReportEntry> = table
            .into_counts()
            .into_iter()
            .map(|(token, count)| ReportEntry { token, count })
            .collect();
        entries.sort_unstable();
        Self { entries }
    }

    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Writes one `{count} {token}\n` line per entry.
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(out, "{entry}")?;
        }
        out.flush()
    }
}

impl From<FrequencyTable> for Report {
    fn from(table: FrequencyTable) -> Self {
        Self::from_table(table)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
