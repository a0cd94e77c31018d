use thiserror::Error;

/// Errors surfaced by engine construction and body registration.
///
/// Per-frame physics never fails; degenerate cases there are skipped.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("body must have a positive, finite size (got {width}x{height})")]
    DegenerateBody { width: f32, height: f32 },

    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("failed to parse engine config: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
