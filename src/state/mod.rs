//! State management module
//!
//! This module contains the tense selection, the session state machine and
//! the shared application state.

pub mod app_state;
pub mod practice_session;
pub mod session_state;
pub mod tense;
pub mod timer_state;

// Re-export main types
pub use app_state::AppState;
pub use practice_session::PracticeSession;
pub use session_state::{SessionPhase, SessionState, StatusView};
pub use tense::{Tense, TenseSelection};
pub use timer_state::TimerState;
