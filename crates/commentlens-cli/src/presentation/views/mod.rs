mod config;
mod export;
pub mod html;
mod notice;
mod report;

pub use html::HtmlReport;
pub use report::SectionsView;
