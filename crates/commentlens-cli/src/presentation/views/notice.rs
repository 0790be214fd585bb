use std::fmt;

use crate::presentation::view_models::{CreateView, NoticeViewModel, RenderOptions};

const HELP_INTRO: &str = "This error typically occurs when:";
const HELP_OUTRO: &str = "Please try again later or contact support for assistance.";

impl CreateView for NoticeViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(NoticeView { data: self })
    }
}

struct NoticeView<'a> {
    data: &'a NoticeViewModel,
}

impl<'a> fmt::Display for NoticeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.data.message)?;

        if self.data.help.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "{}", HELP_INTRO)?;
        for line in &self.data.help {
            writeln!(f, "  • {}", line)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", HELP_OUTRO)
    }
}
