//! Playground error taxonomy

use crate::status::Severity;
use thiserror::Error;

/// Errors surfaced by the orchestration layer.
///
/// Engine-reported messages are carried verbatim; nothing here classifies or
/// rewrites what the engine says.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum PlaygroundError {
    /// Engine bootstrap failed. Terminal; the page must be reloaded.
    #[error("engine initialization failed: {0}")]
    Initialization(String),

    /// A seed statement failed. Remaining statements were not run and
    /// statements already executed are not rolled back.
    #[error("seed statement {statement} failed: {message}")]
    SeedLoad { statement: usize, message: String },

    /// The submitted query was empty after trimming.
    #[error("query is empty")]
    EmptyQuery,

    /// The engine rejected the query; the message is the engine's, verbatim.
    #[error("{0}")]
    QueryExecution(String),
}

impl PlaygroundError {
    /// Severity of the status notification reporting this error
    pub fn severity(&self) -> Severity {
        match self {
            PlaygroundError::EmptyQuery => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Whether the error ends the session. Startup failures do; query-time
    /// failures leave the session usable.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            PlaygroundError::Initialization(_) | PlaygroundError::SeedLoad { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::PlaygroundError;
    use crate::status::Severity;

    #[test]
    fn engine_message_passes_through_verbatim() {
        let err = PlaygroundError::QueryExecution(
            "Binder Error: Referenced table \"t\" not found".to_string(),
        );
        assert_eq!(err.to_string(), "Binder Error: Referenced table \"t\" not found");
    }

    #[test]
    fn startup_errors_are_fatal() {
        assert!(PlaygroundError::Initialization("no worker".into()).is_fatal());
        let seed = PlaygroundError::SeedLoad {
            statement: 2,
            message: "x".into(),
        };
        assert!(seed.is_fatal());
        assert!(!PlaygroundError::EmptyQuery.is_fatal());
        assert!(!PlaygroundError::QueryExecution("x".into()).is_fatal());
    }

    #[test]
    fn empty_query_is_a_warning() {
        assert_eq!(PlaygroundError::EmptyQuery.severity(), Severity::Warning);
        assert_eq!(
            PlaygroundError::QueryExecution("x".into()).severity(),
            Severity::Error
        );
    }
}
