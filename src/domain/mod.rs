use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Raw extraction result. Time tokens are unvalidated at this stage and the
/// whole record may still be dropped by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowingCandidate {
    pub film: String,
    pub screen: Option<String>,
    pub start: String,
    pub end: Option<String>,
}

/// A validated showing: `start` is canonical "HH:MM", `end` is either
/// canonical or absent. Screens are kept as strings ("3", "IMAX").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showing {
    pub film: String,
    pub screen: Option<String>,
    pub start: String,
    pub end: Option<String>,
}

/// The showing currently in progress, reshaped with its (possibly assumed)
/// end time formatted in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextFinishing {
    pub film: String,
    pub screen: Option<String>,
    pub start: String,
    pub end: String,
}

/// The complete output document for one pipeline run. Downstream consumers
/// only ever see this shape; an empty, error-annotated snapshot is still a
/// valid snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub generated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub next_starting: Option<Showing>,
    pub next_finishing: Option<NextFinishing>,
    pub today_showings: Vec<Showing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_block: Option<String>,
}

/// One opaque document handed from an acquisition source to the pipeline.
#[derive(Debug, Clone)]
pub enum SourceDocument {
    /// Page markup; structured extraction first, text sweep as fallback.
    Markup(String),
    /// Flat text; only the text sweep applies.
    Text(String),
    /// Pre-parsed listings from a showtimes search API response.
    Listings(Vec<FilmListing>),
}

/// One film with its raw time tokens, as returned by a search API. Times
/// here are often 12-hour tokens ("9:05PM"); conversion happens downstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmListing {
    pub film: String,
    pub screen: Option<String>,
    pub times: Vec<String>,
}
