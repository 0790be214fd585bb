use serde::{Deserialize, Serialize};

use crate::util::null_as_default;

/// The only data source the scraper supports; stamped onto every exported row.
pub const PLATFORM: &str = "youtube";

/// A raw scraped comment, as returned alongside the analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: i64,

    /// Upstream format (RFC 3339 for YouTube); passed through untouched
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,

    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub replies: Vec<Comment>,
}

impl Comment {
    pub fn platform(&self) -> &'static str {
        PLATFORM
    }
}

/// The `data` envelope carrying the raw comments used for export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: Vec<Comment>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
