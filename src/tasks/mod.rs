//! Background tasks module
//!
//! This module contains the background tasks that run alongside a practice session.

pub mod elapsed_timer;

// Re-export main types
pub use elapsed_timer::{ElapsedTimer, TICK_PERIOD};
