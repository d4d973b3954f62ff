use serde::Serialize;

use crate::page::view::AboutPage;

/// Lifecycle of the About page data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(AboutPage),
    Failed(String),
}

impl LoadState {
    pub fn name(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded(_) => "loaded",
            LoadState::Failed(_) => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    FetchStarted,
    FetchSucceeded(AboutPage),
    FetchFailed(String),
}

/// Pure transition function. Events that make no sense in the current state
/// return `None`.
pub fn reduce(state: &LoadState, event: PageEvent) -> Option<LoadState> {
    match (state, event) {
        // A refresh may start from any settled state.
        (LoadState::Loading, PageEvent::FetchStarted) => None,
        (_, PageEvent::FetchStarted) => Some(LoadState::Loading),
        (LoadState::Loading, PageEvent::FetchSucceeded(page)) => Some(LoadState::Loaded(page)),
        (LoadState::Loading, PageEvent::FetchFailed(msg)) => Some(LoadState::Failed(msg)),
        _ => None,
    }
}

/// Owns the current [`LoadState`] and applies events to it.
#[derive(Debug, Default)]
pub struct PageController {
    state: LoadState,
}

impl PageController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn into_state(self) -> LoadState {
        self.state
    }

    /// Returns whether the event changed the state.
    pub fn dispatch(&mut self, event: PageEvent) -> bool {
        let from = self.state.name();
        match reduce(&self.state, event) {
            Some(next) => {
                tracing::debug!(from, to = next.name(), "page state transition");
                self.state = next;
                true
            }
            None => {
                tracing::warn!(state = from, "event ignored in current page state");
                false
            }
        }
    }
}
