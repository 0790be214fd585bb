use chrono::{DateTime, Utc};
use commentlens_engine::Section;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReportViewModel {
    pub summary: ReportSummary,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub section_count: usize,
    pub item_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_comments: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<String>,
    /// Set when the payload was kept for a later export
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_at: Option<DateTime<Utc>>,
}
