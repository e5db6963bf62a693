//! Session phase, session state and its status-banner projection

use serde::{Deserialize, Serialize};

use super::TimerState;
use crate::messages::Locale;

/// Where the practice session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    #[default]
    Idle,
    Generating,
    PhraseReady,
    Correcting,
    CorrectionReady,
    /// The last request to the completion endpoint failed
    Failed,
}

impl SessionPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, SessionPhase::Generating | SessionPhase::Correcting)
    }
}

/// Everything the presentation surface can show for one session
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub phase: SessionPhase,
    pub phrase: Option<String>,
    pub correction: Option<String>,
    pub error: Option<String>,
    pub timer: TimerState,
    /// Token of the most recently issued request
    pub(crate) latest_request: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Take a token for a new request, superseding any in flight
    pub(crate) fn issue_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.latest_request
    }

    pub(crate) fn is_current(&self, token: u64) -> bool {
        self.latest_request == token
    }

    pub fn status_view(&self) -> StatusView {
        StatusView::project(self)
    }
}

/// Read-only banner derived from [`SessionState`]; panels are `None` when hidden
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusView {
    pub loading: bool,
    pub error: Option<String>,
    pub phrase: Option<String>,
    pub correction: Option<String>,
    pub elapsed_seconds: Option<u64>,
}

impl StatusView {
    pub fn project(state: &SessionState) -> Self {
        let non_empty = |text: &Option<String>| text.clone().filter(|t| !t.is_empty());
        Self {
            loading: state.is_loading(),
            error: non_empty(&state.error),
            phrase: non_empty(&state.phrase),
            correction: non_empty(&state.correction),
            elapsed_seconds: Some(state.timer.elapsed_seconds).filter(|&s| s > 0),
        }
    }

    /// Banner as plain text, one panel per line group
    pub fn lines(&self, locale: Locale) -> Vec<String> {
        let mut lines = Vec::new();
        if self.loading {
            lines.push(locale.loading_label().to_string());
        }
        if let Some(error) = &self.error {
            lines.push(error.clone());
        }
        if let Some(phrase) = &self.phrase {
            lines.push(locale.phrase_label().to_string());
            lines.push(phrase.clone());
        }
        if let Some(correction) = &self.correction {
            lines.push(locale.correction_label().to_string());
            lines.push(correction.clone());
        }
        if let Some(seconds) = self.elapsed_seconds {
            lines.push(locale.elapsed_label(seconds));
        }
        lines
    }
}
