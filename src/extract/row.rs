//! Output rows.

use std::fmt;

use crate::answer::NormalizedFields;

/// Column names of the output file, in order.
pub const OUTPUT_COLUMNS: [&str; 10] = [
    "query",
    "position",
    "Url",
    "ChannelPageLink",
    "PubUser",
    "Title",
    "MediaSourceTitle",
    "PubDate",
    "Length",
    "ViewCount",
];

/// Header line of the output file.
pub fn output_header() -> String {
    OUTPUT_COLUMNS.join("\t")
}

/// One line of output.
///
/// A row without a result is written as `query\t`, keeping one line per
/// query when nothing was extracted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub query: String,
    pub result: Option<(usize, NormalizedFields)>,
}

impl OutputRow {
    pub fn result(query: &str, position: usize, fields: NormalizedFields) -> Self {
        Self {
            query: query.to_string(),
            result: Some((position, fields)),
        }
    }

    pub fn empty(query: &str) -> Self {
        Self {
            query: query.to_string(),
            result: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_none()
    }
}

impl fmt::Display for OutputRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t", self.query)?;
        if let Some((position, fields)) = &self.result {
            write!(f, "{}\t{}", position, fields.columns().join("\t"))?;
        }
        Ok(())
    }
}
