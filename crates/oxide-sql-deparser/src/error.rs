//! Error types for deparsing.

use thiserror::Error;

/// Errors surfaced while rendering an expression tree.
///
/// The tree itself is trusted; failures only come from collaborators.
/// Text appended before the failure stays in the buffer.
#[derive(Debug, Error)]
pub enum DeparseError {
    /// A statement deparser could not render a sub-select.
    #[error("statement deparser failed: {0}")]
    Statement(String),

    /// Writing a `Display` form into the buffer failed.
    #[error("formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type alias for deparse operations.
pub type Result<T> = std::result::Result<T, DeparseError>;
