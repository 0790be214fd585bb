pub mod html;
pub mod number;

pub use html::escape_html;
pub use number::{format_bytes, format_weight};
