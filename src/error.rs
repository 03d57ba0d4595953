//! Error type shared by every fallible operation in the crate.

/// Errors raised by shape construction, validation and collision queries.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum CollisionError {
    /// A constructor or operation received a malformed parameter
    /// (non-finite coordinate, non-positive radius, too few vertices, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A shape no longer satisfies the invariant of its variant, or a
    /// variant-specific operation received the wrong variant.
    #[error("invalid shape: {0}")]
    InvalidShape(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CollisionError>;
