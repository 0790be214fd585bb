use commentlens_engine::NoticeKind;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct NoticeViewModel {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub help: Vec<String>,
}
