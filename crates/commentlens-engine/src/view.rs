//! Payload → display sections.
//!
//! Section order is fixed: THINK, FEEL, ACT (always present), then the
//! optional PAIN POINTS, POTENTIAL CONTENT TOPICS, LANGUAGE ALIGNMENT and
//! POSITIVE & NEGATIVE TAKES sections, each emitted only when it has items.
//! Items keep the upstream order; the analysis service already ranked them.
//!
//! Text is copied verbatim. Nothing here escapes markup: any renderer that
//! targets HTML must escape `text` and `word` itself.

use commentlens_types::{
    AnalysisPayload, Insight, LanguageTerm, PainPoint, Sentiment, SentimentItem, Topic,
};
use serde::Serialize;
use tracing::debug;

const BASE_WEIGHT: f64 = 1.0;
const WEIGHT_PER_COUNT: f64 = 0.5;
pub const MAX_WEIGHT: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Think,
    Feel,
    Act,
    PainPoints,
    FutureTopics,
    LanguageAlignment,
    Sentiment,
}

impl SectionId {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Think => "think",
            SectionId::Feel => "feel",
            SectionId::Act => "act",
            SectionId::PainPoints => "pain_points",
            SectionId::FutureTopics => "future_topics",
            SectionId::LanguageAlignment => "language_alignment",
            SectionId::Sentiment => "sentiment",
        }
    }

    pub fn title(self) -> String {
        match self {
            SectionId::Think | SectionId::Feel | SectionId::Act => self.as_str().to_uppercase(),
            SectionId::PainPoints => "PAIN POINTS".to_string(),
            SectionId::FutureTopics => "POTENTIAL CONTENT TOPICS".to_string(),
            SectionId::LanguageAlignment => "LANGUAGE ALIGNMENT".to_string(),
            SectionId::Sentiment => "POSITIVE & NEGATIVE TAKES".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionLayout {
    List,
    Cloud,
    DualColumn,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub layout: SectionLayout,
    pub body: SectionBody,
}

impl Section {
    fn new(id: SectionId, body: SectionBody) -> Self {
        Self {
            id,
            title: id.title(),
            layout: body.layout(),
            body,
        }
    }

    pub fn item_count(&self) -> usize {
        match &self.body {
            SectionBody::Insights(items) => items.len(),
            SectionBody::PainPoints(items) => items.len(),
            SectionBody::Topics(items) => items.len(),
            SectionBody::Cloud(terms) => terms.len(),
            SectionBody::DualColumn(columns) => columns.positive.len() + columns.negative.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum SectionBody {
    Insights(Vec<InsightItem>),
    PainPoints(Vec<PainPointItem>),
    Topics(Vec<TopicItem>),
    Cloud(Vec<CloudTerm>),
    DualColumn(SentimentColumns),
}

impl SectionBody {
    pub fn layout(&self) -> SectionLayout {
        match self {
            SectionBody::Insights(_) | SectionBody::PainPoints(_) | SectionBody::Topics(_) => {
                SectionLayout::List
            }
            SectionBody::Cloud(_) => SectionLayout::Cloud,
            SectionBody::DualColumn(_) => SectionLayout::DualColumn,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightItem {
    pub text: String,
    pub likes: i64,
    pub replies: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PainPointItem {
    pub text: String,
    pub engagement: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicItem {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloudTerm {
    pub word: String,
    /// Relative emphasis in `[1.0, 2.0]`
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentEntry {
    pub text: String,
    pub engagement: i64,
    pub polarity: Polarity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentColumns {
    pub positive: Vec<SentimentEntry>,
    pub negative: Vec<SentimentEntry>,
}

/// Emphasis for a language term: `min(count * 0.5 + 1, 2.0)`.
///
/// Counts above 2 all saturate at the maximum. Negative counts are treated as 0
/// so the weight never drops below 1.0.
pub fn display_weight(count: i64) -> f64 {
    (count.max(0) as f64 * WEIGHT_PER_COUNT + BASE_WEIGHT).min(MAX_WEIGHT)
}

pub fn build(payload: &AnalysisPayload) -> Vec<Section> {
    let mut sections = Vec::with_capacity(7);

    for (id, insights) in [
        (SectionId::Think, &payload.think),
        (SectionId::Feel, &payload.feel),
        (SectionId::Act, &payload.act),
    ] {
        sections.push(Section::new(id, SectionBody::Insights(insight_items(insights))));
    }

    if !payload.pain_points.is_empty() {
        sections.push(Section::new(
            SectionId::PainPoints,
            SectionBody::PainPoints(pain_point_items(&payload.pain_points)),
        ));
    }

    if !payload.future_topics.is_empty() {
        sections.push(Section::new(
            SectionId::FutureTopics,
            SectionBody::Topics(topic_items(&payload.future_topics)),
        ));
    }

    if !payload.language_patterns.is_empty() {
        sections.push(Section::new(
            SectionId::LanguageAlignment,
            SectionBody::Cloud(cloud_terms(&payload.language_patterns)),
        ));
    }

    if let Some(sentiment) = payload.sentiment.as_ref().filter(|s| !s.is_empty()) {
        sections.push(Section::new(
            SectionId::Sentiment,
            SectionBody::DualColumn(sentiment_columns(sentiment)),
        ));
    }

    debug!(sections = sections.len(), "built view model");
    sections
}

fn insight_items(insights: &[Insight]) -> Vec<InsightItem> {
    insights
        .iter()
        .map(|insight| InsightItem {
            text: insight.text.clone(),
            likes: insight.likes,
            replies: insight.replies,
            author: insight.author.clone(),
        })
        .collect()
}

fn pain_point_items(points: &[PainPoint]) -> Vec<PainPointItem> {
    points
        .iter()
        .map(|point| PainPointItem {
            text: point.text.clone(),
            engagement: point.engagement,
        })
        .collect()
}

fn topic_items(topics: &[Topic]) -> Vec<TopicItem> {
    topics
        .iter()
        .map(|topic| TopicItem {
            text: topic.display_text().to_string(),
        })
        .collect()
}

fn cloud_terms(terms: &[LanguageTerm]) -> Vec<CloudTerm> {
    terms
        .iter()
        .map(|term| CloudTerm {
            word: term.word.clone(),
            weight: display_weight(term.effective_count()),
        })
        .collect()
}

fn sentiment_columns(sentiment: &Sentiment) -> SentimentColumns {
    let tag = |items: &[SentimentItem], polarity: Polarity| {
        items
            .iter()
            .map(|item| SentimentEntry {
                text: item.text.clone(),
                engagement: item.engagement,
                polarity,
            })
            .collect::<Vec<_>>()
    };

    SentimentColumns {
        positive: tag(&sentiment.positive, Polarity::Positive),
        negative: tag(&sentiment.negative, Polarity::Negative),
    }
}
