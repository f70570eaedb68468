//! Wordfreq core: pure token counting and report ordering.
mod report;
mod table;
mod token;
mod vocabulary;

pub use report::{Report, ReportEntry};
pub use table::FrequencyTable;
pub use token::{tokenize, Token};
pub use vocabulary::{Vocabulary, DEFAULT_WORDS};
