//! The practice session: tense selection, phrase generation and answer correction

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use super::{SessionPhase, SessionState, StatusView, Tense, TenseSelection};
use crate::{
    error::{RequestFailure, SessionError, UnknownTense, ValidationFailure},
    messages::Locale,
    services::CompletionBackend,
    tasks::{ElapsedTimer, TICK_PERIOD},
};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One user's practice session.
///
/// All state lives behind short-lived locks that are never held across an
/// `.await`. Lock order is `state` then `timer`.
#[derive(Debug)]
pub struct PracticeSession<B> {
    backend: B,
    locale: Locale,
    selection: Mutex<TenseSelection>,
    state: Arc<Mutex<SessionState>>,
    timer: Mutex<ElapsedTimer>,
    /// Receives a fresh [`StatusView`] after every state change, ticks included
    state_change_tx: broadcast::Sender<StatusView>,
    /// Keep the receiver alive to prevent channel closure
    _state_change_rx: broadcast::Receiver<StatusView>,
}

impl<B: CompletionBackend> PracticeSession<B> {
    pub fn new(backend: B, locale: Locale) -> Self {
        let (state_change_tx, state_change_rx) = broadcast::channel(100);
        Self {
            backend,
            locale,
            selection: Mutex::new(TenseSelection::new()),
            state: Arc::new(Mutex::new(SessionState::new())),
            timer: Mutex::new(ElapsedTimer::new()),
            state_change_tx,
            _state_change_rx: state_change_rx,
        }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Enable or disable one tense
    pub fn toggle_tense(&self, tense: Tense, enabled: bool) {
        debug!("Setting tense {} to {}", tense, enabled);
        lock(&self.selection).toggle(tense, enabled);
    }

    /// Same as [`toggle_tense`](Self::toggle_tense), by display name
    pub fn toggle_tense_by_name(&self, name: &str, enabled: bool) -> Result<Tense, UnknownTense> {
        let tense: Tense = name.parse()?;
        self.toggle_tense(tense, enabled);
        Ok(tense)
    }

    pub fn selection(&self) -> TenseSelection {
        lock(&self.selection).clone()
    }

    /// Current session state
    pub fn snapshot(&self) -> SessionState {
        lock(&self.state).clone()
    }

    pub fn status_view(&self) -> StatusView {
        lock(&self.state).status_view()
    }

    /// Subscribe to status updates
    pub fn subscribe(&self) -> broadcast::Receiver<StatusView> {
        self.state_change_tx.subscribe()
    }

    /// Generate a phrase for the session's current tense selection
    pub async fn generate(&self) -> Result<String, SessionError> {
        let selection = self.selection();
        self.generate_with(&selection).await
    }

    /// Generate a phrase in the tenses enabled in `selection`.
    ///
    /// On success the phrase is stored and the elapsed counter restarts from
    /// zero. A failure leaves the previous phrase in place.
    pub async fn generate_with(&self, selection: &TenseSelection) -> Result<String, SessionError> {
        let names = selection.selected_names();
        if names.is_empty() {
            return Err(self.reject(ValidationFailure::NoTenseSelected));
        }
        let prompt = self.locale.generation_prompt(&names.join(", "));

        let token = {
            let mut state = lock(&self.state);
            state.error = None;
            state.timer.reset();
            lock(&self.timer).stop();
            state.phase = SessionPhase::Generating;
            let token = state.issue_request();
            self.notify(&state);
            token
        };
        info!("Generating phrase for tenses: {}", names.join(", "));

        let result = self.backend.complete(&prompt).await;

        let mut state = lock(&self.state);
        if !state.is_current(token) {
            debug!("Dropping stale phrase generation response (request {})", token);
            return Err(SessionError::Superseded);
        }

        match result {
            Ok(text) => {
                let phrase = text.unwrap_or_else(|| self.locale.phrase_fallback().to_string());
                info!("Phrase generated: {}", phrase);
                state.phrase = Some(phrase.clone());
                state.error = None;
                state.phase = SessionPhase::PhraseReady;
                let epoch = state.timer.arm();
                self.start_ticking(epoch);
                self.notify(&state);
                Ok(phrase)
            }
            Err(e) => {
                error!("Phrase generation request failed: {}", e);
                Err(self.fail(&mut state, RequestFailure::PhraseGeneration))
            }
        }
    }

    /// Ask the completion endpoint to check `answer`.
    ///
    /// Whatever the outcome, the elapsed counter stops once the response arrives.
    pub async fn correct(&self, answer: &str) -> Result<String, SessionError> {
        if answer.trim().is_empty() {
            return Err(self.reject(ValidationFailure::EmptyAnswer));
        }
        let prompt = self.locale.correction_prompt(answer);

        let token = {
            let mut state = lock(&self.state);
            state.correction = None;
            state.error = None;
            state.phase = SessionPhase::Correcting;
            let token = state.issue_request();
            self.notify(&state);
            token
        };
        info!("Checking answer: {}", answer);

        let result = self.backend.complete(&prompt).await;

        let mut state = lock(&self.state);
        if !state.is_current(token) {
            debug!("Dropping stale correction response (request {})", token);
            return Err(SessionError::Superseded);
        }

        state.timer.stop();
        lock(&self.timer).stop();

        match result {
            Ok(text) => {
                let correction =
                    text.unwrap_or_else(|| self.locale.correction_fallback().to_string());
                info!("Correction received: {}", correction);
                state.correction = Some(correction.clone());
                state.error = None;
                state.phase = SessionPhase::CorrectionReady;
                self.notify(&state);
                Ok(correction)
            }
            Err(e) => {
                error!("Correction request failed: {}", e);
                Err(self.fail(&mut state, RequestFailure::Correction))
            }
        }
    }

    /// Record a validation failure. Only the error field changes.
    fn reject(&self, failure: ValidationFailure) -> SessionError {
        let err = SessionError::from(failure);
        warn!("Rejected request: {}", err);
        let mut state = lock(&self.state);
        state.error = Some(err.user_message(self.locale).to_string());
        self.notify(&state);
        err
    }

    fn fail(&self, state: &mut SessionState, failure: RequestFailure) -> SessionError {
        let err = SessionError::from(failure);
        state.phase = SessionPhase::Failed;
        state.error = Some(err.user_message(self.locale).to_string());
        self.notify(state);
        err
    }

    /// Arm the tick task for `epoch`. Called with the state lock held.
    fn start_ticking(&self, epoch: u64) {
        let state = Arc::clone(&self.state);
        let tx = self.state_change_tx.clone();
        lock(&self.timer).start(TICK_PERIOD, move || {
            let mut state = lock(&state);
            if !state.timer.tick(epoch) {
                return false;
            }
            // Ticks are frequent; a closed channel is not worth a warning here
            let _ = tx.send(state.status_view());
            true
        });
    }

    fn notify(&self, state: &SessionState) {
        if let Err(e) = self.state_change_tx.send(state.status_view()) {
            warn!("Failed to send state change notification: {}", e);
        }
    }
}
