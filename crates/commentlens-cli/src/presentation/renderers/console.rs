use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::io::Write;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, OutputFormat, RenderOptions,
};

pub struct ConsoleRenderer {
    format: OutputFormat,
    options: RenderOptions,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, options: RenderOptions) -> Self {
        Self { format, options }
    }

    pub fn render_to<T, W>(&self, out: &mut W, result: &CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
        W: Write,
    {
        if self.format == OutputFormat::Json {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        let color = self.options.color;

        if let Some(badge) = &result.badge {
            if color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            if color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\nTips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, &result)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters;
    use crate::presentation::view_models::ViewMode;
    use commentlens_engine::classify_failure;

    fn render(format: OutputFormat) -> String {
        let result = presenters::present_notice(classify_failure("Quota exceeded for today"));
        let renderer = ConsoleRenderer::new(format, RenderOptions::plain(ViewMode::Standard));
        let mut out = Vec::new();
        renderer.render_to(&mut out, &result).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_output_without_color() {
        insta::assert_snapshot!(render(OutputFormat::Text), @r"
        ⚠️ YouTube API Error

        Quota exceeded for today

        This error typically occurs when:
          • The YouTube API key has expired
          • The daily quota has been exceeded
          • The API key is invalid

        Please try again later or contact support for assistance.
        ");
    }

    #[test]
    fn test_json_output_is_full_view_model() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value["badge"]["level"], "warning");
        assert_eq!(value["content"]["kind"], "quota");
        assert_eq!(value["content"]["help"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_tips_are_listed() {
        let result = presenters::present_config(
            &crate::config::Config::default(),
            std::path::Path::new("/tmp/ws"),
            std::path::Path::new("/nonexistent/commentlens/config.toml"),
        );
        let renderer = ConsoleRenderer::new(OutputFormat::Text, RenderOptions::plain(ViewMode::Standard));
        let mut out = Vec::new();
        renderer.render_to(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Tips:\n  • Write the defaults to disk to customize them: commentlens config init\n"));
        assert!(text.contains("(not created)"));
    }
}
