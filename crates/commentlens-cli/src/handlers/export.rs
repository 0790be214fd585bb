use crate::context::ExecutionContext;
use crate::input;
use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::ExportFormat;
use anyhow::{Context, Result};
use commentlens_engine::ExportFormat as EngineExportFormat;
use commentlens_types::RawPayload;
use std::path::PathBuf;
use tracing::debug;

pub fn handle(
    ctx: &ExecutionContext,
    format: ExportFormat,
    input_path: Option<String>,
    output: Option<PathBuf>,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let export_format: EngineExportFormat = format.to_string().parse()?;

    // Explicit input wins; otherwise the result kept by the last `render`
    let (payload, stored) = match &input_path {
        Some(source) => {
            let raw = input::read_source(source)?;
            let payload = RawPayload::from_slice(&raw)
                .with_context(|| format!("Failed to decode {}", source))?;
            (Some(payload), None)
        }
        None => {
            let store = ctx.store();
            (store.load()?, store.meta()?)
        }
    };

    let artifact = commentlens_engine::export(payload.as_ref(), export_format)?;
    let rows = payload
        .as_ref()
        .map(|p| p.payload().export_comments().len())
        .unwrap_or_default();

    let output_path = match output {
        Some(path) => path,
        None => ctx.config()?.export_path(&artifact),
    };

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(&output_path, &artifact.bytes)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;
    debug!(path = %output_path.display(), "export written");

    let result = presenters::present_export(&artifact, rows, &output_path, stored.as_ref());
    renderer.render(result)?;
    Ok(())
}
