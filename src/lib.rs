//! vidrows Library
//!
//! Flattens video answers embedded in captured search responses into
//! tab-separated rows keyed by query.

pub mod answer;
pub mod cli;
pub mod config;
pub mod decode;
pub mod extract;

pub use answer::{AnswerKind, Cell, DurationMode, NormalizedFields, Normalizer};
pub use config::Config;
pub use decode::{decode_response, DecodeError};
pub use extract::{ExtractOptions, ExtractSummary, Extraction, OutputRow};
