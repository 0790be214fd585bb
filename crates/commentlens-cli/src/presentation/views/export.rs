use std::fmt;

use crate::presentation::formatters::format_bytes;
use crate::presentation::view_models::{CreateView, ExportResultViewModel, RenderOptions, ViewMode};

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ExportResultView {
            data: self,
            mode: options.mode,
        })
    }
}

struct ExportResultView<'a> {
    data: &'a ExportResultViewModel,
    mode: ViewMode,
}

impl<'a> fmt::Display for ExportResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mode == ViewMode::Minimal {
            return writeln!(f, "{}", self.data.output_path);
        }

        writeln!(
            f,
            "Wrote {} ({}) to {}",
            format_bytes(self.data.bytes),
            self.data.mime_type,
            self.data.output_path
        )?;
        if let Some(rows) = self.data.rows {
            writeln!(f, "  {} comment row(s)", rows)?;
        }
        if let Some(stored_at) = self.data.stored_at {
            writeln!(
                f,
                "  from the result stored at {}",
                stored_at.format("%Y-%m-%d %H:%M:%S UTC")
            )?;
        }
        Ok(())
    }
}
