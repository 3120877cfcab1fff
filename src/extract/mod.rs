//! Line-by-line extraction of video answer rows.
//!
//! # Structure
//!
//! - `line` - Processing one data line into rows plus diagnostics
//! - `driver` - Reading the input file and writing the output file
//! - `row` - Output row layout

pub mod driver;
pub mod line;
pub mod row;

pub use driver::{
    ExtractOptions, ExtractSummary, Extracted, Extraction, HeaderError, InputHeader,
    QUERY_COLUMN, RESPONSE_COLUMN,
};
pub use line::{ColumnLayout, LineError, LineOutcome, LineProcessor, LineStatus};
pub use row::{output_header, OutputRow, OUTPUT_COLUMNS};
