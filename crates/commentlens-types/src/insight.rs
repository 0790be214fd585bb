use serde::{Deserialize, Serialize};

use crate::util::{first_non_empty, null_as_default};

/// A categorized comment (think / feel / act) ranked by the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: i64,

    /// Reply count (the analysis service flattens the reply list to a number)
    #[serde(default, deserialize_with = "null_as_default")]
    pub replies: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PainPoint {
    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub engagement: i64,
}

/// Suggested future content topic.
///
/// Older analyzer versions emitted `text`, newer ones emit `topic`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engagement: Option<i64>,
}

impl Topic {
    /// `topic`, falling back to `text`, falling back to the empty string.
    pub fn display_text(&self) -> &str {
        first_non_empty(&[self.topic.as_deref(), self.text.as_deref()]).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageTerm {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,

    /// Kept optional so an absent count survives a JSON round trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

impl LanguageTerm {
    pub const DEFAULT_COUNT: i64 = 1;

    pub fn effective_count(&self) -> i64 {
        self.count.unwrap_or(Self::DEFAULT_COUNT)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentItem {
    pub text: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub engagement: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_prefers_topic_over_text() {
        let topic = Topic {
            topic: Some("next video".to_string()),
            text: Some("ignored".to_string()),
            engagement: None,
        };
        assert_eq!(topic.display_text(), "next video");
    }

    #[test]
    fn test_topic_falls_back_to_text_when_topic_empty() {
        let topic: Topic = serde_json::from_str(r#"{"topic": "", "text": "fallback"}"#).unwrap();
        assert_eq!(topic.display_text(), "fallback");
    }

    #[test]
    fn test_topic_without_text_is_empty() {
        let topic: Topic = serde_json::from_str(r#"{"topic": "", "text": ""}"#).unwrap();
        assert_eq!(topic.display_text(), "");

        let bare: Topic = serde_json::from_str("{}").unwrap();
        assert_eq!(bare.display_text(), "");
    }

    #[test]
    fn test_insight_numeric_defaults() {
        let insight: Insight =
            serde_json::from_str(r#"{"text": "great video", "likes": null}"#).unwrap();
        assert_eq!(insight.likes, 0);
        assert_eq!(insight.replies, 0);
        assert!(insight.author.is_none());
    }

    #[test]
    fn test_language_term_count_defaults_to_one() {
        let term: LanguageTerm = serde_json::from_str(r#"{"word": "tutorial"}"#).unwrap();
        assert_eq!(term.effective_count(), 1);

        let zero: LanguageTerm = serde_json::from_str(r#"{"word": "tutorial", "count": 0}"#).unwrap();
        assert_eq!(zero.effective_count(), 0);
    }
}
