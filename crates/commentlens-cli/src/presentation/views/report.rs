use owo_colors::{OwoColorize, Style};
use std::fmt;

use crate::presentation::formatters::format_weight;
use crate::presentation::view_models::{CreateView, RenderOptions, ReportViewModel, ViewMode};
use commentlens_engine::{
    CloudTerm, InsightItem, PainPointItem, Section, SectionBody, SentimentColumns, SentimentEntry,
    TopicItem,
};

impl CreateView for ReportViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(SectionsView::new(&self.sections, options))
    }
}

// --------------------------------------------------------
// Sections View
// --------------------------------------------------------

pub struct SectionsView<'a> {
    sections: &'a [Section],
    options: RenderOptions,
}

impl<'a> SectionsView<'a> {
    pub fn new(sections: &'a [Section], options: RenderOptions) -> Self {
        Self { sections, options }
    }

    fn paint<D: fmt::Display>(&self, value: D, style: Style) -> String {
        if self.options.color {
            value.style(style).to_string()
        } else {
            value.to_string()
        }
    }

    fn standard(&self) -> bool {
        self.options.mode == ViewMode::Standard
    }

    fn counter(&self, f: &mut fmt::Formatter, indent: &str, text: &str) -> fmt::Result {
        if self.standard() {
            writeln!(f, "{}{}", indent, self.paint(text, Style::new().dimmed()))?;
        }
        Ok(())
    }

    fn write_insights(&self, f: &mut fmt::Formatter, items: &[InsightItem]) -> fmt::Result {
        if items.is_empty() {
            return writeln!(f, "  (no insights)");
        }

        for item in items {
            writeln!(f, "  • {}", item.text)?;
            let mut counters = format!("{} likes, {} replies", item.likes, item.replies);
            if let Some(author) = &item.author {
                counters.push_str(&format!(", by {}", author));
            }
            self.counter(f, "    ", &counters)?;
        }
        Ok(())
    }

    fn write_pain_points(&self, f: &mut fmt::Formatter, items: &[PainPointItem]) -> fmt::Result {
        for item in items {
            writeln!(f, "  • {}", item.text)?;
            self.counter(f, "    ", &format!("engagement {}", item.engagement))?;
        }
        Ok(())
    }

    fn write_topics(&self, f: &mut fmt::Formatter, items: &[TopicItem]) -> fmt::Result {
        for item in items {
            writeln!(f, "  • {}", item.text)?;
        }
        Ok(())
    }

    fn write_cloud(&self, f: &mut fmt::Formatter, terms: &[CloudTerm]) -> fmt::Result {
        let words: Vec<String> = terms
            .iter()
            .map(|term| {
                if self.standard() {
                    format!("{} ({})", term.word, format_weight(term.weight))
                } else {
                    term.word.clone()
                }
            })
            .collect();
        writeln!(f, "  {}", words.join(", "))
    }

    fn write_sentiment(&self, f: &mut fmt::Formatter, columns: &SentimentColumns) -> fmt::Result {
        let sides: [(&str, &[SentimentEntry], char, Style); 2] = [
            ("Positive", &columns.positive, '+', Style::new().green()),
            ("Negative", &columns.negative, '-', Style::new().red()),
        ];

        for (label, entries, marker, style) in sides {
            writeln!(f, "  {}", self.paint(label, style))?;
            if entries.is_empty() {
                writeln!(f, "    (none)")?;
                continue;
            }
            for entry in entries {
                writeln!(f, "    {} {}", marker, entry.text)?;
                self.counter(f, "      ", &format!("engagement {}", entry.engagement))?;
            }
        }
        Ok(())
    }
}

impl<'a> fmt::Display for SectionsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, section) in self.sections.iter().enumerate() {
            if self.options.mode == ViewMode::Minimal {
                writeln!(f, "{} ({})", section.title, section.item_count())?;
                continue;
            }

            if index > 0 {
                writeln!(f)?;
            }
            writeln!(f, "{}", self.paint(&section.title, Style::new().bold().cyan()))?;

            match &section.body {
                SectionBody::Insights(items) => self.write_insights(f, items)?,
                SectionBody::PainPoints(items) => self.write_pain_points(f, items)?,
                SectionBody::Topics(items) => self.write_topics(f, items)?,
                SectionBody::Cloud(terms) => self.write_cloud(f, terms)?,
                SectionBody::DualColumn(columns) => self.write_sentiment(f, columns)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use commentlens_types::AnalysisPayload;

    const PAYLOAD: &str = r#"{
        "think": [{"text": "Is this <b>real</b>?", "likes": 12, "replies": 3, "author": "ana"}],
        "feel": [],
        "act": [{"text": "Subscribed", "likes": 1, "replies": 0}],
        "pain_points": [{"text": "Audio too quiet", "engagement": 7}],
        "future_topics": [{"topic": "Modding tools"}, {"text": "Speedruns"}],
        "language_patterns": [{"word": "engine", "count": 4}, {"word": "sequel"}],
        "sentiment": {"positive": [{"text": "Love this", "engagement": 9}], "negative": []}
    }"#;

    fn sections() -> Vec<Section> {
        let payload = AnalysisPayload::from_slice(PAYLOAD.as_bytes()).unwrap();
        commentlens_engine::build_sections(&payload)
    }

    #[test]
    fn test_standard_view() {
        let sections = sections();
        let view = SectionsView::new(&sections, RenderOptions::plain(ViewMode::Standard));
        insta::assert_snapshot!(view.to_string(), @r"
        THINK
          • Is this <b>real</b>?
            12 likes, 3 replies, by ana

        FEEL
          (no insights)

        ACT
          • Subscribed
            1 likes, 0 replies

        PAIN POINTS
          • Audio too quiet
            engagement 7

        POTENTIAL CONTENT TOPICS
          • Modding tools
          • Speedruns

        LANGUAGE ALIGNMENT
          engine (2.0), sequel (1.5)

        POSITIVE & NEGATIVE TAKES
          Positive
            + Love this
              engagement 9
          Negative
            (none)
        ");
    }

    #[test]
    fn test_compact_view_drops_counters() {
        let sections = sections();
        let view = SectionsView::new(&sections, RenderOptions::plain(ViewMode::Compact));
        let text = view.to_string();
        assert!(!text.contains("likes"));
        assert!(!text.contains("engagement"));
        assert!(text.contains("  engine, sequel\n"));
    }

    #[test]
    fn test_minimal_view_lists_counts() {
        let sections = sections();
        let view = SectionsView::new(&sections, RenderOptions::plain(ViewMode::Minimal));
        insta::assert_snapshot!(view.to_string(), @r"
        THINK (1)
        FEEL (0)
        ACT (1)
        PAIN POINTS (1)
        POTENTIAL CONTENT TOPICS (2)
        LANGUAGE ALIGNMENT (2)
        POSITIVE & NEGATIVE TAKES (1)
        ");
    }
}
