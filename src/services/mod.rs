//! External service module
//!
//! This module contains the client for the language-model completion endpoint.

pub mod completion;

// Re-export main types
pub use completion::{CompletionBackend, CompletionClient, CompletionError};
