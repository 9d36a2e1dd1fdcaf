//! Classification of search executable output and CSV report writing.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, Writer, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordhoodError};

const BUILD_PREFIX: &str = "Build:";
const REAL_FOOTPRINT_PREFIX: &str = "Real memory footprint:";
const ALLOCATED_FOOTPRINT_PREFIX: &str = "Allocated memory footprint:";

/// Which memory measurement a footprint line reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FootprintKind {
    /// Real memory footprint.
    Size,
    /// Allocated memory footprint.
    Capacity,
}

impl FootprintKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FootprintKind::Size => "size",
            FootprintKind::Capacity => "capacity",
        }
    }
}

/// One classified line of executable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputLine {
    Build { time: String },
    Footprint { kind: FootprintKind, value: String },
    Query { id: String, time: String },
}

/// Classify a line by its prefix.
///
/// Anything that is not a build or footprint line is read as
/// `<query-id>: <time>`. Parsing is best effort: missing fields become empty
/// strings rather than errors.
pub fn parse_line(line: &str) -> OutputLine {
    if line.starts_with(BUILD_PREFIX) {
        OutputLine::Build {
            time: field(line, 1),
        }
    } else if line.starts_with(REAL_FOOTPRINT_PREFIX) {
        OutputLine::Footprint {
            kind: FootprintKind::Size,
            value: field(line, 1),
        }
    } else if line.starts_with(ALLOCATED_FOOTPRINT_PREFIX) {
        OutputLine::Footprint {
            kind: FootprintKind::Capacity,
            value: field(line, 1),
        }
    } else {
        OutputLine::Query {
            id: field(line, 0),
            time: field(line, 1),
        }
    }
}

/// The trimmed `index`-th `:`-separated field, or an empty string.
fn field(line: &str, index: usize) -> String {
    line.split(':')
        .nth(index)
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

/// Writes classified lines into the build, footprint and query CSV files.
///
/// Rows end in `\r\n` and fields are quoted only when they contain a
/// delimiter, quote or line break.
pub struct ReportWriter<W: Write> {
    build: Writer<W>,
    footprint: Writer<W>,
    query: Writer<W>,
}

impl ReportWriter<File> {
    /// Create (or truncate) the three report files.
    pub fn create(build: &Path, footprint: &Path, query: &Path) -> Result<Self> {
        Ok(ReportWriter::new(
            File::create(build)?,
            File::create(footprint)?,
            File::create(query)?,
        ))
    }
}

impl<W: Write> ReportWriter<W> {
    pub fn new(build: W, footprint: W, query: W) -> Self {
        ReportWriter {
            build: csv_writer(build),
            footprint: csv_writer(footprint),
            query: csv_writer(query),
        }
    }

    /// Append the row for `line`, tagged with the dataset and algorithm.
    pub fn record(&mut self, dataset: &str, algorithm: &str, line: &OutputLine) -> Result<()> {
        match line {
            OutputLine::Build { time } => {
                self.build.write_record([dataset, algorithm, time.as_str()])?
            }
            OutputLine::Footprint { kind, value } => self.footprint.write_record([
                dataset,
                algorithm,
                kind.as_str(),
                value.as_str(),
            ])?,
            OutputLine::Query { id, time } => {
                self.query
                    .write_record([dataset, algorithm, id.as_str(), time.as_str()])?
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.build.flush()?;
        self.footprint.flush()?;
        self.query.flush()?;
        Ok(())
    }

    /// Flush and consume the writer, returning the build, footprint and
    /// query sinks.
    pub fn into_inner(self) -> Result<(W, W, W)> {
        Ok((
            unwrap_sink(self.build)?,
            unwrap_sink(self.footprint)?,
            unwrap_sink(self.query)?,
        ))
    }
}

fn csv_writer<W: Write>(sink: W) -> Writer<W> {
    WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(sink)
}

fn unwrap_sink<W: Write>(writer: Writer<W>) -> Result<W> {
    writer
        .into_inner()
        .map_err(|e| WordhoodError::Io(e.into_error()))
}
