//! Tense Drill - A state-managed HTTP service for English verb-tense practice
//!
//! One practice session lives in memory: the user picks tenses, asks a
//! language-model completion endpoint for a short sentence, types a
//! conjugation and asks the same endpoint to check it. The HTTP API is the
//! contract toward whatever page or client renders the session.

pub mod config;
pub mod error;
pub mod messages;
pub mod state;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::SessionError;
pub use messages::Locale;
pub use state::{AppState, PracticeSession};
pub use api::create_router;
pub use utils::signals::shutdown_signal;
