//! Error taxonomy for the practice session

use crate::messages::Locale;

/// User input was insufficient to start an operation; no request is sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationFailure {
    #[error("no tense selected")]
    NoTenseSelected,
    #[error("empty answer")]
    EmptyAnswer,
}

/// The completion endpoint failed; the cause is logged, not shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestFailure {
    #[error("phrase generation failed")]
    PhraseGeneration,
    #[error("correction failed")]
    Correction,
}

/// Error returned by the session handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationFailure),
    #[error("request error: {0}")]
    Request(#[from] RequestFailure),
    /// A newer request was issued before this one's response arrived
    #[error("response superseded by a newer request")]
    Superseded,
}

impl SessionError {
    /// Text stored in the session's error field
    pub fn user_message(&self, locale: Locale) -> &'static str {
        match self {
            SessionError::Validation(ValidationFailure::NoTenseSelected) => locale.no_tense_selected(),
            SessionError::Validation(ValidationFailure::EmptyAnswer) => locale.empty_answer(),
            SessionError::Request(RequestFailure::PhraseGeneration) => locale.generation_failed(),
            SessionError::Request(RequestFailure::Correction) => locale.correction_failed(),
            SessionError::Superseded => locale.superseded(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, SessionError::Validation(_))
    }
}

/// A tense name outside the fixed list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tense: {0}")]
pub struct UnknownTense(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failure() {
        let err = SessionError::from(ValidationFailure::NoTenseSelected);
        assert_eq!(err.to_string(), "validation error: no tense selected");
        let err = SessionError::from(RequestFailure::Correction);
        assert_eq!(err.to_string(), "request error: correction failed");
    }

    #[test]
    fn test_user_message_follows_locale() {
        let err = SessionError::from(RequestFailure::PhraseGeneration);
        assert_eq!(err.user_message(Locale::En), Locale::En.generation_failed());
        assert_eq!(err.user_message(Locale::Pt), Locale::Pt.generation_failed());
        assert!(!err.is_validation());
    }
}
