use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use wordfreq_core::{FrequencyTable, Report};
use wordfreq_logging::{wf_debug, wf_info};

use crate::{AtomicFileWriter, EngineError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateSummary {
    pub distinct: usize,
    pub total: u64,
    pub output_path: PathBuf,
    pub report: Report,
}

/// Reads all of `source`, counts its tokens and writes the sorted report.
pub fn aggregate<R, W>(mut source: R, destination: W) -> io::Result<Report>
where
    R: Read,
    W: Write,
{
    let mut text = String::new();
    source.read_to_string(&mut text)?;
    let report = Report::from_table(FrequencyTable::from_text(&text));
    report.write_to(destination)?;
    Ok(report)
}

pub fn aggregate_file(input: &Path, output: &Path) -> Result<AggregateSummary, EngineError> {
    aggregate_files(&[input], output)
}

/// Counts tokens across every input and writes one combined report.
///
/// All inputs are read before the output is touched, so an unreadable input
/// leaves an existing report untouched.
pub fn aggregate_files<P>(inputs: &[P], output: &Path) -> Result<AggregateSummary, EngineError>
where
    P: AsRef<Path>,
{
    let mut table = FrequencyTable::new();
    for input in inputs {
        table.absorb(count_file(input.as_ref())?);
    }

    let report = Report::from_table(table);
    let writer = AtomicFileWriter::new(output);
    let ((), output_path) = writer
        .write_with(|out| report.write_to(out))
        .map_err(|e| EngineError::write(output, e))?;

    wf_info!(
        "Wrote {} distinct tokens ({} total) to {:?}",
        report.len(),
        report.total(),
        output_path
    );
    Ok(AggregateSummary {
        distinct: report.len(),
        total: report.total(),
        output_path,
        report,
    })
}

fn count_file(path: &Path) -> Result<FrequencyTable, EngineError> {
    let text = fs::read_to_string(path).map_err(|e| EngineError::read(path, e))?;
    let table = FrequencyTable::from_text(&text);
    wf_debug!(
        "Counted {} tokens ({} distinct) in {:?}",
        table.total(),
        table.distinct(),
        path
    );
    Ok(table)
}
