//! Per-line processing.
//!
//! A line moves through decode, block lookup, position walk and emit. Any
//! failure ends processing of that line only. Nothing here logs: the outcome
//! carries everything the driver needs to report.

use crate::answer::{select_results, FieldError, Normalizer, Selection, ShapeError};
use crate::decode::{decode_response, DecodeError};

use super::row::OutputRow;

/// Where the query and response live within a data line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub query: usize,
    pub response: usize,
}

/// Reasons a whole line produced no results.
#[derive(Debug, thiserror::Error)]
pub enum LineError {
    #[error("line has {found} fields, {column} column at index {index} is missing")]
    MissingColumn {
        column: &'static str,
        index: usize,
        found: usize,
    },

    #[error("decode failed: {0}")]
    Decode(#[from] DecodeError),

    #[error("unexpected response shape: {0}")]
    Shape(#[from] ShapeError),
}

/// What happened to a line.
#[derive(Debug)]
pub enum LineStatus {
    /// At least one result row was produced.
    Emitted(usize),
    /// The answer block exists but no entry survived normalization.
    NoSurvivors,
    /// No block for the requested answer kind.
    NoAnswer,
    /// The run was started with an unrecognized answer kind.
    UnknownKind,
    Failed(LineError),
}

/// Rows and diagnostics for one input line.
#[derive(Debug)]
pub struct LineOutcome {
    pub rows: Vec<OutputRow>,
    pub status: LineStatus,
    /// Positions whose entries were dropped, with the reason.
    pub rejected: Vec<(usize, FieldError)>,
}

impl LineOutcome {
    fn fallback(
        query: Option<&str>,
        status: LineStatus,
        rejected: Vec<(usize, FieldError)>,
    ) -> Self {
        Self {
            rows: query.map(OutputRow::empty).into_iter().collect(),
            status,
            rejected,
        }
    }
}

/// Turns data lines into output rows for one answer kind.
#[derive(Debug, Clone, Copy)]
pub struct LineProcessor {
    normalizer: Option<Normalizer>,
    top_n: usize,
    layout: ColumnLayout,
}

impl LineProcessor {
    /// `normalizer` is `None` when the requested answer kind is unknown;
    /// every line then falls back to a bare row.
    pub fn new(normalizer: Option<Normalizer>, top_n: usize, layout: ColumnLayout) -> Self {
        Self {
            normalizer,
            top_n,
            layout,
        }
    }

    pub fn process(&self, line: &str) -> LineOutcome {
        let fields: Vec<&str> = line.split('\t').collect();

        let Some(query) = fields.get(self.layout.query).copied() else {
            let error = LineError::MissingColumn {
                column: "query",
                index: self.layout.query,
                found: fields.len(),
            };
            return LineOutcome::fallback(None, LineStatus::Failed(error), Vec::new());
        };

        let Some(normalizer) = self.normalizer else {
            return LineOutcome::fallback(Some(query), LineStatus::UnknownKind, Vec::new());
        };

        let Some(encoded) = fields.get(self.layout.response).copied() else {
            let error = LineError::MissingColumn {
                column: "response",
                index: self.layout.response,
                found: fields.len(),
            };
            return LineOutcome::fallback(Some(query), LineStatus::Failed(error), Vec::new());
        };

        match self.extract(query, encoded, normalizer) {
            Ok(outcome) => outcome,
            Err(error) => {
                LineOutcome::fallback(Some(query), LineStatus::Failed(error), Vec::new())
            }
        }
    }

    fn extract(
        &self,
        query: &str,
        encoded: &str,
        normalizer: Normalizer,
    ) -> Result<LineOutcome, LineError> {
        let decoded = decode_response(encoded)?;
        let selection = select_results(&decoded, normalizer.kind(), self.top_n)?;

        if let Selection::NoAnswer = selection {
            return Ok(LineOutcome::fallback(Some(query), LineStatus::NoAnswer, Vec::new()));
        }

        let mut rows = Vec::new();
        let mut rejected = Vec::new();
        for (position, entry) in selection.entries().iter().enumerate() {
            match normalizer.normalize(entry) {
                Ok(fields) => rows.push(OutputRow::result(query, position, fields)),
                Err(reason) => rejected.push((position, reason)),
            }
        }

        if rows.is_empty() {
            return Ok(LineOutcome::fallback(Some(query), LineStatus::NoSurvivors, rejected));
        }

        let emitted = rows.len();
        Ok(LineOutcome {
            rows,
            status: LineStatus::Emitted(emitted),
            rejected,
        })
    }
}
