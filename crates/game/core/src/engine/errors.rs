//! Error types for the placement engine lifecycle.

use crate::error::{ErrorContext, ErrorSeverity, GameError};

/// Errors surfaced by engine lifecycle calls.
///
/// None of these mutate state: the call is refused and the engine stays as it
/// was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// `generate()` already ran since the last reset.
    #[error("map already generated; reset the engine before generating again")]
    AlreadyGenerated,

    /// `generate()` called before `initialize()`.
    #[error("engine has not been initialized with anchors and a deck")]
    NotInitialized,

    /// `initialize()` called twice without a reset in between.
    #[error("engine is already initialized; reset it first")]
    AlreadyInitialized,
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            EngineError::AlreadyGenerated | EngineError::AlreadyInitialized => {
                ErrorSeverity::Recoverable
            }
            EngineError::NotInitialized => ErrorSeverity::Validation,
        }
    }

    fn context(&self) -> Option<ErrorContext> {
        match self {
            EngineError::AlreadyGenerated => {
                Some(ErrorContext::new().with_message("generation is one-shot until reset"))
            }
            _ => None,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            EngineError::AlreadyGenerated => "ENGINE_ALREADY_GENERATED",
            EngineError::NotInitialized => "ENGINE_NOT_INITIALIZED",
            EngineError::AlreadyInitialized => "ENGINE_ALREADY_INITIALIZED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_errors_are_not_internal() {
        for error in [
            EngineError::AlreadyGenerated,
            EngineError::NotInitialized,
            EngineError::AlreadyInitialized,
        ] {
            assert!(!error.severity().is_internal());
        }
        assert!(EngineError::AlreadyGenerated.severity().is_recoverable());
        assert_eq!(
            EngineError::NotInitialized.error_code(),
            "ENGINE_NOT_INITIALIZED"
        );
    }
}
