//! Result entry normalization.
//!
//! Turns one raw result entry into the fixed set of output fields. Entries
//! that do not point at a supported video platform, or that lack a URL or
//! title, are rejected with a [`FieldError`] so the caller can count and
//! report them without aborting the line.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::AnswerKind;

/// Placeholder written for absent publisher and channel link fields.
pub const NONE_TEXT: &str = "none";

/// Platforms recognized in result URLs, with the source label derived from each.
const PLATFORMS: [(&str, &str); 2] = [("youtube", "YouTube"), ("tiktok", "TikTok")];

/// Why a result entry was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("result entry is not a JSON object")]
    NotAnObject,

    #[error("required field '{field}' is missing")]
    Missing { field: &'static str },

    #[error("field '{field}' is not a string")]
    NotAString { field: &'static str },

    #[error("url '{url}' is not a YouTube or TikTok link")]
    UnsupportedPlatform { url: String },
}

/// How short-answer `TimeLength` values are written.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DurationMode {
    /// Copy the value through unchanged
    #[default]
    Raw,
    /// Convert `[[hh:]mm:]ss` strings to whole seconds
    Seconds,
}

/// A single output value that may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Seconds(i64),
    /// Written as `-1`
    Missing,
}

impl Cell {
    /// Copy a JSON value through as text. Null and absent values are `Missing`.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Cell::Missing,
            Some(Value::String(s)) => Cell::Text(s.clone()),
            Some(other) => Cell::Text(other.to_string()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(text) => f.write_str(&sanitize(text)),
            Cell::Seconds(seconds) => write!(f, "{}", seconds),
            Cell::Missing => f.write_str("-1"),
        }
    }
}

/// Replace characters that would break the tab-separated layout.
pub fn sanitize(text: &str) -> String {
    text.replace(['\t', '\r', '\n'], " ")
}

/// Fields extracted from one accepted result entry, in output column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedFields {
    pub url: String,
    pub channel_page_link: String,
    pub publisher: String,
    pub title: String,
    pub source_label: String,
    pub publication_date: Cell,
    pub duration: Cell,
    pub view_count: Cell,
}

impl NormalizedFields {
    /// The eight columns following `query` and `position`.
    pub fn columns(&self) -> [String; 8] {
        [
            sanitize(&self.url),
            sanitize(&self.channel_page_link),
            sanitize(&self.publisher),
            sanitize(&self.title),
            sanitize(&self.source_label),
            self.publication_date.to_string(),
            self.duration.to_string(),
            self.view_count.to_string(),
        ]
    }
}

/// Parse a `[[hh:]mm:]ss` duration into whole seconds.
///
/// Returns `-1` for empty input, non-numeric segments, or more than three
/// segments.
pub fn parse_duration(text: &str) -> i64 {
    let segments: Vec<&str> = text.split(':').map(str::trim).collect();
    if segments.len() > 3 {
        return -1;
    }

    let mut total: i64 = 0;
    let mut unit: i64 = 1;
    for segment in segments.iter().rev() {
        let Ok(value) = segment.parse::<u32>() else {
            return -1;
        };
        let Some(next) = (value as i64)
            .checked_mul(unit)
            .and_then(|part| total.checked_add(part))
        else {
            return -1;
        };
        total = next;
        unit *= 60;
    }
    total
}

fn required_str<'a>(
    entry: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a str, FieldError> {
    match entry.get(field) {
        None | Some(Value::Null) => Err(FieldError::Missing { field }),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(FieldError::NotAString { field }),
    }
}

fn text_or(entry: &serde_json::Map<String, Value>, field: &str, default: &str) -> String {
    match Cell::from_json(entry.get(field)) {
        Cell::Text(text) => text,
        _ => default.to_string(),
    }
}

fn platform_label(url: &str) -> Option<&'static str> {
    PLATFORMS
        .iter()
        .find(|(needle, _)| url.contains(needle))
        .map(|(_, label)| *label)
}

/// Normalizes result entries for one answer kind.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    kind: AnswerKind,
    short_durations: DurationMode,
}

impl Normalizer {
    pub fn new(kind: AnswerKind) -> Self {
        Self {
            kind,
            short_durations: DurationMode::default(),
        }
    }

    pub fn with_short_durations(mut self, mode: DurationMode) -> Self {
        self.short_durations = mode;
        self
    }

    pub fn kind(&self) -> AnswerKind {
        self.kind
    }

    fn duration_mode(&self) -> DurationMode {
        match self.kind {
            AnswerKind::Full => DurationMode::Seconds,
            AnswerKind::Short => self.short_durations,
        }
    }

    fn duration(&self, value: Option<&Value>) -> Cell {
        match (self.duration_mode(), value) {
            (_, None | Some(Value::Null)) => Cell::Missing,
            (DurationMode::Raw, value) => Cell::from_json(value),
            (DurationMode::Seconds, Some(Value::String(text))) => {
                Cell::Seconds(parse_duration(text))
            }
            (DurationMode::Seconds, Some(Value::Number(n))) => {
                Cell::Seconds(n.as_i64().unwrap_or(-1))
            }
            (DurationMode::Seconds, Some(_)) => Cell::Seconds(-1),
        }
    }

    /// Extract output fields from one raw result entry.
    pub fn normalize(&self, entry: &Value) -> Result<NormalizedFields, FieldError> {
        let entry = entry.as_object().ok_or(FieldError::NotAnObject)?;
        let fields = self.kind.fields();

        let url = required_str(entry, fields.url)?;
        let Some(platform) = platform_label(url) else {
            return Err(FieldError::UnsupportedPlatform {
                url: url.to_string(),
            });
        };
        let title = required_str(entry, fields.title)?;

        let mut source_label = text_or(entry, fields.source_title, "");
        if source_label.is_empty() {
            source_label = platform.to_string();
        }

        Ok(NormalizedFields {
            url: url.to_string(),
            channel_page_link: text_or(entry, fields.channel_page, NONE_TEXT),
            publisher: text_or(entry, fields.publisher, NONE_TEXT),
            title: title.to_string(),
            source_label,
            publication_date: Cell::from_json(entry.get(fields.publication_date)),
            duration: self.duration(entry.get(fields.duration)),
            view_count: Cell::from_json(entry.get(fields.view_count)),
        })
    }
}

/// Normalize `entry` with the default short-duration handling.
pub fn normalize(entry: &Value, kind: AnswerKind) -> Result<NormalizedFields, FieldError> {
    Normalizer::new(kind).normalize(entry)
}
