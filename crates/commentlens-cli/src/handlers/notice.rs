use crate::presentation::presenters;
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use commentlens_engine::Failure;

pub fn handle(message: Option<String>, network: bool, renderer: &ConsoleRenderer) -> Result<()> {
    let failure = if network {
        Failure::Network
    } else {
        match message {
            Some(message) if !message.trim().is_empty() => Failure::Upstream(message),
            _ => Failure::EmptyInput,
        }
    };

    renderer.render(presenters::present_notice(failure.notice()))
}
