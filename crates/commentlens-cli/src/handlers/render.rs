use crate::context::ExecutionContext;
use crate::input;
use crate::presentation::presenters;
use crate::presentation::views::HtmlReport;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::{Context, Result, bail};
use commentlens_types::RawPayload;
use std::path::PathBuf;
use tracing::{info, warn};

pub struct RenderRequest {
    pub source: String,
    pub html: Option<PathBuf>,
    pub store: bool,
}

pub fn handle(
    ctx: &ExecutionContext,
    request: RenderRequest,
    renderer: &ConsoleRenderer,
) -> Result<()> {
    let raw = input::read_source(&request.source)?;
    let decoded = RawPayload::from_slice(&raw)
        .with_context(|| format!("Failed to decode {}", request.source))?;
    let payload = decoded.payload();

    // A failed analysis shows the notice instead of sections and is not kept
    if let Some(message) = payload.upstream_error() {
        warn!(error = message, "analysis service reported a failure");
        let notice = commentlens_engine::classify_failure(message);
        renderer.render(presenters::present_notice(notice))?;
        bail!("Analysis service reported an error");
    }

    let sections = commentlens_engine::build_sections(payload);

    if let Some(path) = &request.html {
        let document = HtmlReport::new(&sections).document();
        std::fs::write(path, document)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote html report");
    }

    let stored = if request.store {
        Some(ctx.store().save(&raw)?)
    } else {
        None
    };

    let result = presenters::present_report(payload, sections, stored.as_ref());
    renderer.render(result)?;

    Ok(())
}
