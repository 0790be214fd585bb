use crate::presentation::view_models::{CommandResultViewModel, ExportResultViewModel, StatusBadge};
use crate::store::StoredMeta;
use commentlens_engine::{ExportArtifact, ExportFormat};
use std::path::Path;

pub fn present_export(
    artifact: &ExportArtifact,
    rows: usize,
    output_path: &Path,
    stored: Option<&StoredMeta>,
) -> CommandResultViewModel<ExportResultViewModel> {
    let rows = match artifact.format {
        ExportFormat::Json => None,
        ExportFormat::Csv | ExportFormat::Excel => Some(rows),
    };

    let content = ExportResultViewModel {
        format: artifact.format.to_string(),
        mime_type: artifact.mime_type.to_string(),
        bytes: artifact.bytes.len(),
        rows,
        output_path: output_path.display().to_string(),
        stored_at: stored.map(|meta| meta.stored_at),
    };

    let badge = if rows == Some(0) {
        StatusBadge::warning("Exported header only: the result has no scraped comments")
    } else {
        StatusBadge::success(format!("Exported {}", artifact.format))
    };

    CommandResultViewModel::new(content).with_badge(badge)
}
