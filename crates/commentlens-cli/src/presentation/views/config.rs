use std::fmt;

use crate::presentation::view_models::{
    ConfigInitViewModel, ConfigViewModel, CreateView, RenderOptions,
};

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigView { data: self })
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _options: RenderOptions) -> Box<dyn fmt::Display + 'a> {
        Box::new(ConfigInitView { data: self })
    }
}

struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config_state = if self.data.config_exists {
            ""
        } else {
            " (not created)"
        };

        writeln!(f, "{:<12} {}", "Workspace:", self.data.data_dir)?;
        writeln!(f, "{:<12} {}{}", "Config:", self.data.config_path, config_state)?;
        writeln!(f)?;
        writeln!(f, "[export]")?;
        writeln!(f, "  base_name  = {}", self.data.base_name)?;
        writeln!(
            f,
            "  output_dir = {}",
            self.data.output_dir.as_deref().unwrap_or("(current directory)")
        )?;
        writeln!(f, "[render]")?;
        writeln!(f, "  color      = {}", self.data.color)
    }
}

struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Wrote {}", self.data.config_path)
    }
}
