use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::config::resolve_workspace_path;
use crate::context::ExecutionContext;
use crate::presentation::{ConsoleRenderer, RenderOptions, ViewMode};
use anyhow::Result;
use is_terminal::IsTerminal;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    debug!(data_dir = %data_dir.display(), "resolved workspace");

    let ctx = ExecutionContext::new(data_dir);
    let format = cli.format.into();

    match cli.command {
        Commands::Render {
            input,
            html,
            view,
            no_store,
        } => {
            let renderer = ConsoleRenderer::new(format, console_options(&ctx, view.into())?);
            let request = handlers::render::RenderRequest {
                source: input,
                html,
                store: !no_store,
            };
            handlers::render::handle(&ctx, request, &renderer)
        }

        Commands::Export {
            format: export_format,
            input,
            output,
        } => {
            let renderer =
                ConsoleRenderer::new(format, console_options(&ctx, ViewMode::Standard)?);
            handlers::export::handle(&ctx, export_format, input, output, &renderer)
        }

        Commands::Notice { message, network } => {
            let renderer =
                ConsoleRenderer::new(format, console_options(&ctx, ViewMode::Standard)?);
            handlers::notice::handle(message, network, &renderer)
        }

        Commands::Config { command } => {
            // Not read from config: `config init --force` has to repair an unparsable file
            let renderer = ConsoleRenderer::new(format, RenderOptions::plain(ViewMode::Standard));
            match command {
                ConfigCommand::Show => handlers::config::show(&ctx, &renderer),
                ConfigCommand::Init { force } => handlers::config::init(&ctx, force, &renderer),
            }
        }
    }
}

/// Color only when enabled in config and stdout is a terminal.
fn console_options(ctx: &ExecutionContext, mode: ViewMode) -> Result<RenderOptions> {
    let color = ctx.config()?.render.color && std::io::stdout().is_terminal();
    Ok(RenderOptions::new(mode, color))
}
