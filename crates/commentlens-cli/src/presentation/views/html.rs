//! HTML markup for the result sections.
//!
//! Every `text`, `word` and title coming from the payload is escaped here;
//! the engine hands over verbatim strings.

use std::fmt;

use crate::presentation::formatters::escape_html;
use commentlens_engine::{
    CloudTerm, InsightItem, PainPointItem, Section, SectionBody, SentimentColumns, SentimentEntry,
    TopicItem,
};

pub struct HtmlReport<'a> {
    sections: &'a [Section],
}

impl<'a> HtmlReport<'a> {
    pub fn new(sections: &'a [Section]) -> Self {
        Self { sections }
    }

    /// Wrap the sections in a standalone document.
    pub fn document(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>Comment analysis</title>\n</head>\n<body>\n{}</body>\n</html>\n",
            self
        )
    }
}

fn card(f: &mut fmt::Formatter, class: &str, text: &str, engagement: &[(&str, i64)]) -> fmt::Result {
    writeln!(f, "<div class=\"{}\">", class)?;
    writeln!(f, "<p class=\"insight-text\">{}</p>", escape_html(text))?;
    if !engagement.is_empty() {
        write!(f, "<div class=\"engagement\">")?;
        for (name, value) in engagement {
            write!(f, "<span class=\"{}\">{}</span>", name, value)?;
        }
        writeln!(f, "</div>")?;
    }
    writeln!(f, "</div>")
}

fn insights(f: &mut fmt::Formatter, items: &[InsightItem]) -> fmt::Result {
    for item in items {
        card(
            f,
            "insight-card",
            &item.text,
            &[("likes", item.likes), ("replies", item.replies)],
        )?;
    }
    Ok(())
}

fn pain_points(f: &mut fmt::Formatter, items: &[PainPointItem]) -> fmt::Result {
    for item in items {
        card(f, "insight-card", &item.text, &[("engagement", item.engagement)])?;
    }
    Ok(())
}

fn topics(f: &mut fmt::Formatter, items: &[TopicItem]) -> fmt::Result {
    for item in items {
        card(f, "insight-card", &item.text, &[])?;
    }
    Ok(())
}

fn cloud(f: &mut fmt::Formatter, terms: &[CloudTerm]) -> fmt::Result {
    writeln!(f, "<div class=\"language-cloud\">")?;
    for term in terms {
        writeln!(
            f,
            "<span class=\"language-term\" style=\"font-size: {}em\">{}</span>",
            term.weight,
            escape_html(&term.word)
        )?;
    }
    writeln!(f, "</div>")
}

fn sentiment(f: &mut fmt::Formatter, columns: &SentimentColumns) -> fmt::Result {
    let sides: [(&str, &str, &[SentimentEntry]); 2] = [
        ("positive", "Positive", &columns.positive),
        ("negative", "Negative", &columns.negative),
    ];

    writeln!(f, "<div class=\"sentiment-container\">")?;
    for (class, label, entries) in sides {
        writeln!(f, "<div class=\"{}-sentiment\">", class)?;
        writeln!(f, "<h3>{}</h3>", label)?;
        for entry in entries {
            card(
                f,
                &format!("insight-card {}", class),
                &entry.text,
                &[("engagement", entry.engagement)],
            )?;
        }
        writeln!(f, "</div>")?;
    }
    writeln!(f, "</div>")
}

impl<'a> fmt::Display for HtmlReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "<div id=\"results\">")?;
        for section in self.sections {
            writeln!(
                f,
                "<div class=\"insight-section\" id=\"{}\">",
                section.id.as_str()
            )?;
            writeln!(f, "<h2>{}</h2>", escape_html(&section.title))?;

            match &section.body {
                SectionBody::Insights(items) => insights(f, items)?,
                SectionBody::PainPoints(items) => pain_points(f, items)?,
                SectionBody::Topics(items) => topics(f, items)?,
                SectionBody::Cloud(terms) => cloud(f, terms)?,
                SectionBody::DualColumn(columns) => sentiment(f, columns)?,
            }

            writeln!(f, "</div>")?;
        }
        writeln!(f, "</div>")
    }
}
