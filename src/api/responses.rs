//! API request and response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    messages::Locale,
    state::{SessionPhase, SessionState, StatusView, Tense},
};

/// Body of POST /tenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleTenseRequest {
    pub name: String,
    pub enabled: bool,
}

/// Body of POST /correct
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectRequest {
    pub answer: String,
}

/// Response of the state-changing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub phase: SessionPhase,
    pub timer_active: bool,
    pub banner: StatusView,
}

impl ApiResponse {
    /// Create a new API response from the current session state
    pub fn new(status: &str, message: String, state: &SessionState) -> Self {
        Self {
            status: status.to_string(),
            message,
            timestamp: Utc::now(),
            phase: state.phase,
            timer_active: state.timer.is_active(),
            banner: state.status_view(),
        }
    }

    pub fn ok(message: String, state: &SessionState) -> Self {
        Self::new("ok", message, state)
    }

    pub fn error(message: String, state: &SessionState) -> Self {
        Self::new("error", message, state)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenseEntry {
    pub name: Tense,
    pub enabled: bool,
}

/// The fixed tense list with each tense's checkbox state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TensesResponse {
    pub tenses: Vec<TenseEntry>,
}

/// Full status including server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub banner: StatusView,
    pub phase: SessionPhase,
    pub timer_active: bool,
    pub selected_tenses: Vec<Tense>,
    pub locale: Locale,
    pub endpoint: String,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
