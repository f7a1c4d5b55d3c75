//! Meeting record entities

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// A single transcribed utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptLine {
    pub text: String,
    /// Date-time string, parsed only for display
    pub timestamp: String,
}

impl TranscriptLine {
    pub fn new(text: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// One bullet of a summary section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryBlock {
    pub content: String,
}

/// A titled group of summary bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarySection {
    pub title: String,
    #[serde(default)]
    pub blocks: Vec<SummaryBlock>,
}

impl SummarySection {
    /// Build a section from a title and bullet contents
    pub fn new<I, S>(title: impl Into<String>, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            blocks: contents
                .into_iter()
                .map(|c| SummaryBlock { content: c.into() })
                .collect(),
        }
    }
}

/// Structured meeting digest keyed by section id.
///
/// Sections are rendered in the order they were inserted or read.
pub type Summary = IndexMap<String, SummarySection>;

/// The meeting being exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transcripts: Vec<TranscriptLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
}

/// A `null` list reads as empty
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

impl MeetingRecord {
    /// Create a meeting with no transcript and no summary
    pub fn new(id: impl Into<String>, title: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            transcripts: Vec::new(),
            summary: None,
        }
    }

    pub fn with_transcripts(mut self, transcripts: Vec<TranscriptLine>) -> Self {
        self.transcripts = transcripts;
        self
    }

    pub fn with_summary(mut self, summary: Summary) -> Self {
        self.summary = Some(summary);
        self
    }
}

/// Destination page and the credential used to write to it.
#[derive(Clone, PartialEq, Eq)]
pub struct RemoteTargetConfig {
    api_key: String,
    page_id: String,
}

impl RemoteTargetConfig {
    pub fn new(api_key: impl Into<String>, page_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            page_id: page_id.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }
}

impl fmt::Debug for RemoteTargetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteTargetConfig")
            .field("api_key", &"<redacted>")
            .field("page_id", &self.page_id)
            .finish()
    }
}
