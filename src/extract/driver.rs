//! Batch driver: reads the input file, runs every line through a
//! [`LineProcessor`], and writes the collected rows.
//!
//! # Error Handling
//!
//! Setup problems (unreadable input, a header without a `query` column,
//! an unwritable output path) abort the run. Everything that goes wrong
//! inside a single line is logged and counted, and the run continues.

use std::borrow::Cow;
use std::fs;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::answer::{AnswerKind, DurationMode, Normalizer};

use super::line::{ColumnLayout, LineOutcome, LineProcessor, LineStatus};
use super::row::{output_header, OutputRow};

/// Header name of the query column (matched ignoring ASCII case).
pub const QUERY_COLUMN: &str = "query";
/// Header name of the response column, when the header names it.
pub const RESPONSE_COLUMN: &str = "base64response";

/// Problems with the input header row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("input file is empty, expected a header row")]
    Empty,

    #[error("input header has no 'query' column (found: {})", .columns.join(", "))]
    MissingQueryColumn { columns: Vec<String> },
}

/// Column positions resolved from the input header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputHeader {
    pub columns: Vec<String>,
    pub layout: ColumnLayout,
}

impl InputHeader {
    /// Parse a tab-separated header row.
    ///
    /// The response column is `base64response` when present, otherwise the
    /// first column.
    pub fn parse(line: &str) -> Result<Self, HeaderError> {
        let line = line.trim_start_matches('\u{feff}').trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(HeaderError::Empty);
        }

        let columns: Vec<String> = line.split('\t').map(|c| c.trim().to_string()).collect();
        let find = |name: &str| columns.iter().position(|c| c.eq_ignore_ascii_case(name));

        let query = find(QUERY_COLUMN).ok_or_else(|| HeaderError::MissingQueryColumn {
            columns: columns.clone(),
        })?;
        let response = find(RESPONSE_COLUMN).unwrap_or(0);

        Ok(Self {
            columns,
            layout: ColumnLayout { query, response },
        })
    }
}

/// Run parameters for one extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Raw answer kind selector; only 0 and 1 are understood.
    pub video_type: i64,
    pub top_n: usize,
    pub short_durations: DurationMode,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            video_type: 0,
            top_n: 10,
            short_durations: DurationMode::default(),
        }
    }
}

impl ExtractOptions {
    pub fn kind(&self) -> Option<AnswerKind> {
        AnswerKind::from_code(self.video_type)
    }

    fn normalizer(&self) -> Option<Normalizer> {
        self.kind()
            .map(|kind| Normalizer::new(kind).with_short_durations(self.short_durations))
    }
}

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractSummary {
    pub lines_read: usize,
    pub lines_with_results: usize,
    pub lines_without_answer: usize,
    pub lines_failed: usize,
    pub entries_rejected: usize,
    pub rows_written: usize,
}

impl ExtractSummary {
    fn record(&mut self, outcome: &LineOutcome) {
        self.lines_read += 1;
        self.entries_rejected += outcome.rejected.len();
        match outcome.status {
            LineStatus::Emitted(_) => self.lines_with_results += 1,
            LineStatus::NoSurvivors | LineStatus::NoAnswer | LineStatus::UnknownKind => {
                self.lines_without_answer += 1
            }
            LineStatus::Failed(_) => self.lines_failed += 1,
        }
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        format!(
            "{} lines: {} with results, {} without answer, {} failed; {} rows ({} entries rejected)",
            self.lines_read,
            self.lines_with_results,
            self.lines_without_answer,
            self.lines_failed,
            self.rows_written,
            self.entries_rejected
        )
    }
}

/// Rows collected from an input, ready to be written.
#[derive(Debug, Clone, Default)]
pub struct Extracted {
    pub rows: Vec<OutputRow>,
    pub summary: ExtractSummary,
}

impl Extracted {
    /// Write the header and all rows, newline-terminated.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{}", output_header())?;
        for row in &self.rows {
            writeln!(writer, "{}", row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the output file, creating or truncating it.
    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = fs::File::create(path)
            .with_context(|| format!("Failed to create output file: {:?}", path))?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)
            .with_context(|| format!("Failed to write output file: {:?}", path))
    }

    pub fn to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

fn report(line_number: usize, outcome: &LineOutcome) {
    for (position, reason) in &outcome.rejected {
        debug!(line = line_number, position, %reason, "result entry rejected");
    }
    match &outcome.status {
        LineStatus::Emitted(rows) => debug!(line = line_number, rows, "results extracted"),
        LineStatus::NoSurvivors => debug!(line = line_number, "no result entry survived"),
        LineStatus::NoAnswer => debug!(line = line_number, "no matching answer block"),
        LineStatus::UnknownKind => {}
        LineStatus::Failed(error) => warn!(line = line_number, %error, "line skipped"),
    }
}

/// One extraction run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extraction {
    options: ExtractOptions,
}

impl Extraction {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Process a whole input: header row first, then one data row per line.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the header has no
    /// `query` column. Per-line problems are never errors.
    pub fn process_reader<R: BufRead>(&self, reader: R) -> Result<Extracted> {
        let mut lines = reader.split(b'\n');

        let header_bytes = lines
            .next()
            .transpose()
            .context("Failed to read header line")?
            .ok_or(HeaderError::Empty)?;
        let header = InputHeader::parse(&String::from_utf8_lossy(&header_bytes))?;
        debug!(columns = ?header.columns, layout = ?header.layout, "input header parsed");

        if self.options.kind().is_none() {
            warn!(
                video_type = self.options.video_type,
                "unknown video type, no results will be extracted"
            );
        }

        let processor = LineProcessor::new(
            self.options.normalizer(),
            self.options.top_n,
            header.layout,
        );
        let mut extracted = Extracted::default();

        for (index, line_result) in lines.enumerate() {
            let line_number = index + 2;
            let bytes =
                line_result.with_context(|| format!("Failed to read line {}", line_number))?;
            let line = String::from_utf8_lossy(&bytes);
            if let Cow::Owned(_) = line {
                debug!(line = line_number, "line is not valid UTF-8, decoded lossily");
            }
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }

            let outcome = processor.process(line);
            report(line_number, &outcome);
            extracted.summary.record(&outcome);
            extracted.rows.extend(outcome.rows);
        }

        extracted.summary.rows_written = extracted.rows.len();
        Ok(extracted)
    }

    /// Read `input`, extract, and write `output`.
    pub fn run<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output: Q,
    ) -> Result<ExtractSummary> {
        let input = input.as_ref();
        let output = output.as_ref();

        info!(path = %input.display(), "loading input file");
        let file = fs::File::open(input)
            .with_context(|| format!("Failed to open input file: {:?}", input))?;
        let extracted = self
            .process_reader(BufReader::new(file))
            .with_context(|| format!("Failed to process input file: {:?}", input))?;

        info!(path = %output.display(), rows = extracted.rows.len(), "saving output file");
        extracted.write(output)?;

        Ok(extracted.summary)
    }
}
