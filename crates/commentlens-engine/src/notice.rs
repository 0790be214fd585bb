//! User-facing classification of failures reported around the analysis call.
//!
//! The engine never produces these failures itself; it only decides how a
//! message coming back from the scraper or the network layer is presented.

use serde::Serialize;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter a URL";
pub const NETWORK_MESSAGE: &str = "Failed to connect to the server. Please try again.";

const QUOTA_MARKERS: [&str; 2] = ["quota", "api key"];

const QUOTA_HELP: [&str; 3] = [
    "The YouTube API key has expired",
    "The daily quota has been exceeded",
    "The API key is invalid",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    /// No URL was supplied before starting an analysis
    EmptyInput,
    /// Non-success HTTP status or an `error` field in the payload
    Upstream(String),
    /// Connection to the analysis service failed
    Network,
}

impl Failure {
    pub fn notice(&self) -> Notice {
        match self {
            Failure::EmptyInput => Notice::generic(EMPTY_INPUT_MESSAGE),
            Failure::Upstream(message) => match classify(message) {
                NoticeKind::Quota => Notice::quota(message),
                NoticeKind::Generic => Notice::generic(message),
            },
            Failure::Network => Notice::generic(NETWORK_MESSAGE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Quota,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    /// Shown verbatim; HTML renderers must escape it
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub help: Vec<String>,
}

impl Notice {
    fn quota(message: &str) -> Self {
        Self {
            kind: NoticeKind::Quota,
            title: "YouTube API Error".to_string(),
            message: message.to_string(),
            help: QUOTA_HELP.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn generic(message: &str) -> Self {
        Self {
            kind: NoticeKind::Generic,
            title: "Error".to_string(),
            message: message.to_string(),
            help: Vec::new(),
        }
    }
}

/// Quota / API-key problems get their own help text; everything else is generic.
pub fn classify(message: &str) -> NoticeKind {
    let lower = message.to_lowercase();
    if QUOTA_MARKERS.iter().any(|marker| lower.contains(marker)) {
        NoticeKind::Quota
    } else {
        NoticeKind::Generic
    }
}
