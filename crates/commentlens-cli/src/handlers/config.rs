use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Result, bail};

pub fn show(ctx: &ExecutionContext, renderer: &ConsoleRenderer) -> Result<()> {
    let config = ctx.config()?;
    let result = presenters::present_config(config, ctx.data_dir(), &ctx.config_path());
    renderer.render(result)
}

pub fn init(ctx: &ExecutionContext, force: bool, renderer: &ConsoleRenderer) -> Result<()> {
    let path = ctx.config_path();
    let exists = path.exists();

    if exists && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(&path)?;
    renderer.render(presenters::present_config_init(&path, exists))
}
