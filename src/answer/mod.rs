//! Video answer shapes found in captured search responses.
//!
//! Two answer blocks are understood: the full video answer and the short
//! video answer. They live at the same place in the response document but
//! name their result list and result fields differently, so each kind carries
//! a static [`FieldMap`] that is picked once per run.
//!
//! # Structure
//!
//! - `select` - Locating an answer block and its result list
//! - `normalize` - Turning one raw result entry into output fields

pub mod normalize;
pub mod select;

pub use normalize::{
    normalize, parse_duration, Cell, DurationMode, FieldError, NormalizedFields, Normalizer,
};
pub use select::{answer_services, select_results, Selection, ServiceSummary, ShapeError};

use std::fmt;

/// Per-kind JSON key names for the fields copied into an output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMap {
    pub url: &'static str,
    pub title: &'static str,
    pub source_title: &'static str,
    pub duration: &'static str,
    pub publication_date: &'static str,
    pub view_count: &'static str,
    pub publisher: &'static str,
    pub channel_page: &'static str,
}

const FULL_FIELDS: FieldMap = FieldMap {
    url: "displayURL",
    title: "title",
    source_title: "mediaSourceTitle",
    duration: "duration",
    publication_date: "publicationDate",
    view_count: "ViewCount",
    publisher: "pubUser",
    channel_page: "videoPageUrl",
};

const SHORT_FIELDS: FieldMap = FieldMap {
    url: "Url",
    title: "Title",
    source_title: "SourceTitle",
    duration: "TimeLength",
    publication_date: "DAPublicationDate",
    view_count: "ViewCount",
    publisher: "DAPubUser",
    channel_page: "videoPageUrl",
};

/// Which video answer to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnswerKind {
    /// `MultimediaKifVideoAnswer`, code 0
    Full,
    /// `MultimediaShortVideoAnswer`, code 1
    Short,
}

impl AnswerKind {
    pub const ALL: [AnswerKind; 2] = [AnswerKind::Full, AnswerKind::Short];

    /// Map a numeric selector to a kind. Unknown codes yield `None`.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(AnswerKind::Full),
            1 => Some(AnswerKind::Short),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            AnswerKind::Full => 0,
            AnswerKind::Short => 1,
        }
    }

    /// Value of `AnswerServiceName` identifying this kind's answer block.
    pub fn service_name(self) -> &'static str {
        match self {
            AnswerKind::Full => "MultimediaKifVideoAnswer",
            AnswerKind::Short => "MultimediaShortVideoAnswer",
        }
    }

    /// Key of the result list inside `AnswerDataKifResponse[0]`.
    pub fn results_key(self) -> &'static str {
        match self {
            AnswerKind::Full => "results",
            AnswerKind::Short => "webResults",
        }
    }

    pub fn fields(self) -> &'static FieldMap {
        match self {
            AnswerKind::Full => &FULL_FIELDS,
            AnswerKind::Short => &SHORT_FIELDS,
        }
    }

    /// Reverse lookup from an `AnswerServiceName` tag.
    pub fn from_service_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.service_name() == name)
    }
}

impl fmt::Display for AnswerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerKind::Full => write!(f, "full"),
            AnswerKind::Short => write!(f, "short"),
        }
    }
}
