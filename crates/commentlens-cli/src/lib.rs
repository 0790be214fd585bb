// NOTE: commentlens Architecture Rationale
//
// Why keep the raw payload (not the rendered sections)?
// - Export must re-serialize exactly what the analysis service sent
// - Sections are a display projection; rebuilding them is cheap and pure
// - Trade-off: export of a stored result re-parses the file
//
// Why a separate presentation layer?
// - The engine builds renderer-agnostic sections and never escapes text
// - Console, JSON and HTML output are swappable views over the same view model
// - Escaping happens at the one place that knows the target markup

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod input;
pub mod logging;
pub mod presentation;
pub mod store;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
