use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ReportSummary, ReportViewModel, StatusBadge,
};
use crate::store::StoredMeta;
use commentlens_engine::Section;
use commentlens_types::AnalysisPayload;

pub fn present_report(
    payload: &AnalysisPayload,
    sections: Vec<Section>,
    stored: Option<&StoredMeta>,
) -> CommandResultViewModel<ReportViewModel> {
    let item_count: usize = sections.iter().map(Section::item_count).sum();
    let metadata = payload.metadata.as_ref();

    let summary = ReportSummary {
        section_count: sections.len(),
        item_count,
        total_comments: metadata.map(|m| m.total_comments),
        analyzed_at: metadata.and_then(|m| m.analyzed_at.clone()),
        stored_at: stored.map(|meta| meta.stored_at),
    };

    let badge = if item_count == 0 {
        StatusBadge::warning("Analysis returned no insights")
    } else {
        StatusBadge::success(format!(
            "{} insight(s) in {} section(s)",
            item_count,
            sections.len()
        ))
    };

    let mut result =
        CommandResultViewModel::new(ReportViewModel { summary, sections }).with_badge(badge);

    if stored.is_some() {
        let has_comments = !payload.export_comments().is_empty();
        result = result.with_suggestion(
            Guidance::new("Export the full result").with_command("commentlens export json"),
        );
        if has_comments {
            result = result.with_suggestion(
                Guidance::new("Export the scraped comments for a spreadsheet")
                    .with_command("commentlens export csv"),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use commentlens_types::{Insight, Metadata};

    #[test]
    fn test_empty_report_gets_warning_badge() {
        let payload = AnalysisPayload::default();
        let sections = commentlens_engine::build_sections(&payload);
        let result = present_report(&payload, sections, None);

        assert_eq!(result.content.summary.section_count, 3);
        assert_eq!(result.content.summary.item_count, 0);
        assert_eq!(
            result.badge.unwrap().level,
            crate::presentation::StatusLevel::Warning
        );
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_summary_counts_and_metadata() {
        let payload = AnalysisPayload {
            think: vec![Insight {
                text: "a".to_string(),
                ..Default::default()
            }],
            act: vec![Insight {
                text: "b".to_string(),
                ..Default::default()
            }],
            metadata: Some(Metadata {
                total_comments: 40,
                analyzed_at: Some("2024-03-02T08:00:00".to_string()),
            }),
            ..Default::default()
        };
        let sections = commentlens_engine::build_sections(&payload);
        let meta = StoredMeta {
            stored_at: Utc::now(),
            bytes: 10,
        };
        let result = present_report(&payload, sections, Some(&meta));

        let summary = &result.content.summary;
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_comments, Some(40));
        assert_eq!(summary.stored_at, Some(meta.stored_at));
        assert_eq!(result.badge.unwrap().label, "2 insight(s) in 3 section(s)");
        // No comments to export, so only the json tip is offered
        assert_eq!(result.suggestions.len(), 1);
    }
}
