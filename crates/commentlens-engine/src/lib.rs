// Engine module - result transformation (view model) and export encodings
// This layer sits between the decoded payload (types) and CLI presentation

pub mod error;
pub mod export;
pub mod notice;
pub mod view;

pub use error::{Error, Result};
pub use export::{ExportArtifact, ExportFormat};
pub use notice::{Failure, Notice, NoticeKind};
pub use view::{
    CloudTerm, InsightItem, PainPointItem, Polarity, Section, SectionBody, SectionId,
    SectionLayout, SentimentColumns, SentimentEntry, TopicItem,
};

use commentlens_types::{AnalysisPayload, RawPayload};

// Façade API - Stable public interface for CLI layer
// CLI should use these functions instead of directly accessing internal modules

/// Build the ordered display sections for a payload
pub fn build_sections(payload: &AnalysisPayload) -> Vec<Section> {
    view::build(payload)
}

/// Encode a stored payload; `None` means nothing was stored yet
pub fn export(payload: Option<&RawPayload>, format: ExportFormat) -> Result<ExportArtifact> {
    export::export(payload, format)
}

/// Classify an upstream failure message into a user-facing notice
pub fn classify_failure(message: &str) -> Notice {
    Failure::Upstream(message.to_string()).notice()
}
