use std::path::Path;

use crate::client::PortfolioSource;
use crate::config::{self, AppConfig};
use crate::errors::{FolioError, FolioResult};
use crate::models::ContactForm;
use crate::page::{self, ContactController, ContactState, LoadState, PageController};
use crate::render;
use crate::timeline::DurationFormatter;

/// Loads the page and returns what should be printed.
pub async fn show(
    source: &dyn PortfolioSource,
    formatter: &DurationFormatter,
    json: bool,
) -> FolioResult<String> {
    let mut controller = PageController::new();
    let state = page::refresh(&mut controller, source, formatter).await;

    if let LoadState::Failed(msg) = state {
        return Err(FolioError::Fetch(msg.clone()));
    }
    if json {
        Ok(serde_json::to_string_pretty(state)?)
    } else {
        Ok(render::render_state(state))
    }
}

pub async fn experiences(
    source: &dyn PortfolioSource,
    formatter: &DurationFormatter,
    json: bool,
) -> FolioResult<String> {
    let records = source.experiences().await?;
    let timeline = page::build_timeline(records, formatter);
    tracing::info!(count = timeline.len(), "experience timeline built");

    if json {
        Ok(serde_json::to_string_pretty(&timeline)?)
    } else {
        Ok(render::render_timeline(&timeline))
    }
}

pub async fn contact(source: &dyn PortfolioSource, form: ContactForm) -> FolioResult<String> {
    let mut controller = ContactController::new(form);
    match controller.submit(source).await {
        ContactState::Sent(msg) => Ok(msg.clone()),
        ContactState::Failed(msg) => Err(FolioError::Contact(msg.clone())),
        other => Err(FolioError::State(format!(
            "contact submission ended in unexpected state {other:?}"
        ))),
    }
}

pub fn init_config(path: &Path) -> FolioResult<String> {
    if path.exists() {
        return Err(FolioError::Config(format!(
            "{} already exists, refusing to overwrite",
            path.display()
        )));
    }
    config::save_config(&AppConfig::default(), path)?;
    Ok(format!("wrote default config to {}", path.display()))
}
