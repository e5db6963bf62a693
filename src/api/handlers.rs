//! HTTP endpoint handlers

use std::{convert::Infallible, sync::Arc};
use axum::{
    extract::State,
    http::StatusCode,
    response::{
        sse::{Event, KeepAlive, Sse},
        Json,
    },
};
use futures::stream::{self, Stream, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{info, warn};

use crate::{
    error::SessionError,
    state::{AppState, StatusView, Tense},
};
use super::responses::{
    ApiResponse, CorrectRequest, HealthResponse, StatusResponse, TenseEntry, TensesResponse,
    ToggleTenseRequest,
};

type ApiResult = Result<Json<ApiResponse>, (StatusCode, Json<ApiResponse>)>;

/// Map a session error to its status code, with the current state in the body
fn session_error(state: &AppState, err: SessionError) -> (StatusCode, Json<ApiResponse>) {
    let code = match err {
        SessionError::Validation(_) => StatusCode::BAD_REQUEST,
        SessionError::Request(_) => StatusCode::BAD_GATEWAY,
        SessionError::Superseded => StatusCode::CONFLICT,
    };
    let message = err.user_message(state.session.locale()).to_string();
    (code, Json(ApiResponse::error(message, &state.session.snapshot())))
}

/// Handle GET /tenses - List the tenses and whether each is enabled
pub async fn list_tenses_handler(State(state): State<Arc<AppState>>) -> Json<TensesResponse> {
    let selection = state.session.selection();
    Json(TensesResponse {
        tenses: Tense::ALL
            .into_iter()
            .map(|name| TenseEntry {
                name,
                enabled: selection.is_enabled(name),
            })
            .collect(),
    })
}

/// Handle POST /tenses - Enable or disable one tense
pub async fn toggle_tense_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ToggleTenseRequest>,
) -> ApiResult {
    match state.session.toggle_tense_by_name(&req.name, req.enabled) {
        Ok(tense) => {
            state.record_action("toggle-tense");
            Ok(Json(ApiResponse::ok(
                format!("{} {}", tense, if req.enabled { "enabled" } else { "disabled" }),
                &state.session.snapshot(),
            )))
        }
        Err(e) => {
            warn!("Toggle rejected: {}", e);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ApiResponse::error(e.to_string(), &state.session.snapshot())),
            ))
        }
    }
}

/// Handle POST /generate - Generate a phrase in the selected tenses
pub async fn generate_handler(State(state): State<Arc<AppState>>) -> ApiResult {
    state.record_action("generate");
    match state.session.generate().await {
        Ok(phrase) => {
            info!("Generate endpoint called - phrase ready");
            Ok(Json(ApiResponse::ok(phrase, &state.session.snapshot())))
        }
        Err(e) => Err(session_error(&state, e)),
    }
}

/// Handle POST /correct - Check the user's answer
pub async fn correct_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CorrectRequest>,
) -> ApiResult {
    state.record_action("correct");
    match state.session.correct(&req.answer).await {
        Ok(correction) => {
            info!("Correct endpoint called - correction ready");
            Ok(Json(ApiResponse::ok(correction, &state.session.snapshot())))
        }
        Err(e) => Err(session_error(&state, e)),
    }
}

/// Handle GET /status - Return current session status
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let snapshot = state.session.snapshot();
    let (last_action, last_action_time) = state.get_last_action();

    Json(StatusResponse {
        banner: snapshot.status_view(),
        phase: snapshot.phase,
        timer_active: snapshot.timer.is_active(),
        selected_tenses: state.session.selection().selected(),
        locale: state.session.locale(),
        endpoint: state.session.backend().endpoint().to_string(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    })
}

/// Handle GET /banner - Status banner as plain text
pub async fn banner_handler(State(state): State<Arc<AppState>>) -> String {
    let mut text = state
        .session
        .status_view()
        .lines(state.session.locale())
        .join("\n");
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

/// Status views from `rx`, skipping past any the receiver fell behind on
fn status_updates(rx: broadcast::Receiver<StatusView>) -> impl Stream<Item = StatusView> {
    stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(view) => return Some((view, rx)),
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Event stream lagged, skipped {} updates", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    })
}

/// Handle GET /events - Stream status updates as server-sent events
pub async fn events_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.session.subscribe();
    let initial = state.session.status_view();

    let events = stream::once(async move { initial })
        .chain(status_updates(rx))
        .filter_map(|view| async move {
            match Event::default().json_data(&view) {
                Ok(event) => Some(Ok(event)),
                Err(e) => {
                    warn!("Failed to encode status event: {}", e);
                    None
                }
            }
        });

    Sse::new(events).keep_alive(KeepAlive::default())
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
