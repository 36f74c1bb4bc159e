use thiserror::Error;

/// Errors produced by the matching engine and the session state machines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Simulation failure: {0}")]
    SimulationFailure(String),

    #[error("Session not found: {0}")]
    SessionNotFound(String),
}

impl EngineError {
    pub fn validation(message: impl Into<String>) -> Self {
        EngineError::Validation(message.into())
    }

    /// Short machine-readable label used in JSON error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "validation_error",
            EngineError::SimulationFailure(_) => "simulation_failure",
            EngineError::SessionNotFound(_) => "session_not_found",
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
