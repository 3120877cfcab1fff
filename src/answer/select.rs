//! Answer block selection.
//!
//! Every captured response nests its answers under
//! `PropertyBag.AnswerResponseCommand.AnswerQueryResponse.AnswerDataArray`.
//! Each path segment is resolved explicitly so a malformed document reports
//! exactly which key was missing instead of failing somewhere downstream.

use serde_json::Value;

use super::AnswerKind;

/// Path from the document root to the ordered list of answer blocks.
pub const ANSWER_PATH: [&str; 4] = [
    "PropertyBag",
    "AnswerResponseCommand",
    "AnswerQueryResponse",
    "AnswerDataArray",
];

const SERVICE_NAME_KEY: &str = "AnswerServiceName";
const PAYLOAD_KEY: &str = "AnswerDataKifResponse";

/// The document does not have the expected nested shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("missing key: {path}")]
    MissingKey { path: String },

    #[error("expected a list at {path}")]
    NotAnArray { path: String },

    #[error("{service} has an empty AnswerDataKifResponse list")]
    EmptyPayload { service: &'static str },
}

/// Outcome of looking for one answer kind in a response.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// The answer block exists; at most `top_n` raw entries, in order.
    Found(Vec<&'a Value>),
    /// No block carries the requested `AnswerServiceName`.
    NoAnswer,
}

impl<'a> Selection<'a> {
    pub fn entries(&self) -> &[&'a Value] {
        match self {
            Selection::Found(entries) => entries,
            Selection::NoAnswer => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Selection::Found(_))
    }
}

/// One answer block as reported by `inspect`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSummary {
    pub name: Option<String>,
    pub kind: Option<AnswerKind>,
    /// Length of the kind's result list, when the kind is known and the list is readable.
    pub result_count: Option<usize>,
}

fn join_path(trail: &[&str]) -> String {
    trail.join(".")
}

/// Resolve `key` on `value`, recording the segment in `trail` for error reports.
fn child<'a, 'k>(
    value: &'a Value,
    key: &'k str,
    trail: &mut Vec<&'k str>,
) -> Result<&'a Value, ShapeError> {
    trail.push(key);
    value.get(key).ok_or_else(|| ShapeError::MissingKey {
        path: join_path(trail),
    })
}

fn as_list<'a>(value: &'a Value, trail: &[&str]) -> Result<&'a Vec<Value>, ShapeError> {
    value.as_array().ok_or_else(|| ShapeError::NotAnArray {
        path: join_path(trail),
    })
}

/// The ordered answer blocks of a decoded response.
pub fn answer_blocks(decoded: &Value) -> Result<&Vec<Value>, ShapeError> {
    let mut trail = Vec::with_capacity(ANSWER_PATH.len());
    let mut current = decoded;
    for key in ANSWER_PATH {
        current = child(current, key, &mut trail)?;
    }
    as_list(current, &trail)
}

/// The full result list of a matched block, before truncation.
fn block_results(block: &Value, kind: AnswerKind) -> Result<&Vec<Value>, ShapeError> {
    let mut trail = vec![kind.service_name()];
    let payload = child(block, PAYLOAD_KEY, &mut trail)?;
    let payload = as_list(payload, &trail)?;
    let first = payload.first().ok_or(ShapeError::EmptyPayload {
        service: kind.service_name(),
    })?;
    let results = child(first, kind.results_key(), &mut trail)?;
    as_list(results, &trail)
}

/// Locate the first block tagged for `kind` and return up to `top_n` of its results.
///
/// A shorter result list yields fewer entries.
pub fn select_results(
    decoded: &Value,
    kind: AnswerKind,
    top_n: usize,
) -> Result<Selection<'_>, ShapeError> {
    let blocks = answer_blocks(decoded)?;

    let Some(block) = blocks.iter().find(|block| {
        block.get(SERVICE_NAME_KEY).and_then(Value::as_str) == Some(kind.service_name())
    }) else {
        return Ok(Selection::NoAnswer);
    };

    let results = block_results(block, kind)?;
    Ok(Selection::Found(results.iter().take(top_n).collect()))
}

/// Summarize every answer block in a response.
pub fn answer_services(decoded: &Value) -> Result<Vec<ServiceSummary>, ShapeError> {
    let blocks = answer_blocks(decoded)?;

    Ok(blocks
        .iter()
        .map(|block| {
            let name = block
                .get(SERVICE_NAME_KEY)
                .and_then(Value::as_str)
                .map(str::to_string);
            let kind = name.as_deref().and_then(AnswerKind::from_service_name);
            let result_count = kind.and_then(|kind| block_results(block, kind).ok().map(Vec::len));
            ServiceSummary {
                name,
                kind,
                result_count,
            }
        })
        .collect())
}
