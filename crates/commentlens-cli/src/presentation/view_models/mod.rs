pub mod common;
pub mod config;
pub mod export;
pub mod notice;
pub mod report;
pub mod result;

pub use common::{Guidance, OutputFormat, RenderOptions, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use export::ExportResultViewModel;
pub use notice::NoticeViewModel;
pub use report::{ReportSummary, ReportViewModel};
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge between a view model and its text view.
pub trait CreateView {
    fn create_view<'a>(&'a self, options: RenderOptions) -> Box<dyn fmt::Display + 'a>;
}
