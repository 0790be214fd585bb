use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::comment::{Comment, CommentData};
use crate::error::Result;
use crate::insight::{Insight, LanguageTerm, PainPoint, SentimentItem, Topic};
use crate::util::{first_non_empty, null_as_default};

/// Decoded response of the analysis service (`POST /scrape`).
///
/// Every collection decodes to empty when absent or `null`. Unknown top-level
/// fields are kept in `extra`; use [`RawPayload`] when the exact document
/// has to be written back out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub think: Vec<Insight>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub feel: Vec<Insight>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub act: Vec<Insight>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub pain_points: Vec<PainPoint>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub future_topics: Vec<Topic>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub language_patterns: Vec<LanguageTerm>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<CommentData>,

    /// Raw comments as returned by the backend at the top level
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub comments: Vec<Comment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Error detail as reported by the HTTP layer for non-success responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisPayload {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Comments used for export: `data.comments`, or the top-level
    /// `comments` list when the `data` envelope is missing.
    pub fn export_comments(&self) -> &[Comment] {
        match &self.data {
            Some(data) => &data.comments,
            None => &self.comments,
        }
    }

    /// Failure message reported by the upstream service, if any.
    pub fn upstream_error(&self) -> Option<&str> {
        first_non_empty(&[self.error.as_deref(), self.detail.as_deref()])
    }
}

/// A decoded payload together with the JSON document it came from.
///
/// The typed view fills in defaults and drops nested fields it does not
/// model; `raw` is what the service actually sent and is what gets exported.
#[derive(Debug, Clone, PartialEq)]
pub struct RawPayload {
    raw: Value,
    payload: AnalysisPayload,
}

impl RawPayload {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let raw: Value = serde_json::from_slice(bytes)?;
        let payload = AnalysisPayload::deserialize(&raw)?;
        Ok(Self { raw, payload })
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn payload(&self) -> &AnalysisPayload {
        &self.payload
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sentiment {
    #[serde(default, deserialize_with = "null_as_default")]
    pub positive: Vec<SentimentItem>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub negative: Vec<SentimentItem>,
}

impl Sentiment {
    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_comments: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<String>,
}
