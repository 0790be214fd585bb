mod config;
mod export;
mod notice;
mod report;

pub use config::{present_config, present_config_init};
pub use export::present_export;
pub use notice::present_notice;
pub use report::present_report;
