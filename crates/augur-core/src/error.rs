//! Error types for the closeness engine.

/// Errors that can occur while building engine configuration.
///
/// Evaluation itself is total; only incoherent configuration is rejected.
#[derive(Debug, thiserror::Error)]
pub enum AugurError {
    /// A configuration value is out of range or breaks an ordering rule.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience result type for engine operations.
pub type AugurResult<T> = Result<T, AugurError>;
