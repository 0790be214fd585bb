use crate::config::Config;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};
use std::path::Path;

pub fn present_config(
    config: &Config,
    data_dir: &Path,
    config_path: &Path,
) -> CommandResultViewModel<ConfigViewModel> {
    let config_exists = config_path.exists();

    let content = ConfigViewModel {
        data_dir: data_dir.display().to_string(),
        config_path: config_path.display().to_string(),
        config_exists,
        base_name: config.export.base_name.clone(),
        output_dir: config
            .export
            .output_dir
            .as_ref()
            .map(|dir| dir.display().to_string()),
        color: config.render.color,
    };

    let mut result = CommandResultViewModel::new(content);
    if !config_exists {
        result = result
            .with_badge(StatusBadge::info("Using built-in defaults"))
            .with_suggestion(
                Guidance::new("Write the defaults to disk to customize them")
                    .with_command("commentlens config init"),
            );
    }
    result
}

pub fn present_config_init(
    config_path: &Path,
    overwritten: bool,
) -> CommandResultViewModel<ConfigInitViewModel> {
    let label = if overwritten {
        "Configuration reset to defaults"
    } else {
        "Configuration created"
    };

    CommandResultViewModel::new(ConfigInitViewModel {
        config_path: config_path.display().to_string(),
        overwritten,
    })
    .with_badge(StatusBadge::success(label))
}
