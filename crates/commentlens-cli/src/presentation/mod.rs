//! # Presentation Layer
//!
//! User-facing output for the CLI, organized as a small MVVM pipeline.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//!                                                                                 (Layout)
//! ```
//!
//! ## Rules
//!
//! ### 1. Raw data in view models
//! View models carry numbers and unformatted text. `--format json` is an API:
//! it always dumps the complete view model and ignores `ViewMode`.
//!
//! ### 2. ViewMode is density
//! * **Minimal:** Section titles and item counts only.
//! * **Compact:** One line per item, no counters.
//! * **Standard:** Items with their engagement counters (default).
//!
//! ### 3. Escaping belongs to the view that emits markup
//! Section text from the engine is verbatim. Only `views::html` escapes, using
//! `formatters::html`. Console views print text as-is.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | **`view_models/`** |
//! | Decide when to show a tip or badge | **`presenters/`** |
//! | Change layout or colors of text output | **`views/`** |
//! | Escape or format a value for a view | **`formatters/`** |
//! | Switch between JSON and text | **`renderers/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, RenderOptions, StatusBadge, StatusLevel,
    common::{OutputFormat, ViewMode},
};
