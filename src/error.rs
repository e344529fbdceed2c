use thiserror::Error;

/// Failure reported by an engine adapter while refreshing or submitting a turn.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("invalid policy settings: {0}")]
    InvalidSettings(String)
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Policy(#[from] PolicyError),
    #[error("engine collaborator failed: {0}")]
    Engine(#[source] EngineError)
}
