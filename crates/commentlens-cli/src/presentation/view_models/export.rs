use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExportResultViewModel {
    pub format: String,
    pub mime_type: String,
    pub bytes: usize,
    /// Rows written for csv/excel; `None` for json
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    pub output_path: String,
    /// When the exported result was stored; `None` for an explicit `--input`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_at: Option<DateTime<Utc>>,
}
