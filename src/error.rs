//! Error types for the diagram core.

/// A user-facing validation failure raised by click capture.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Neither the radius nor the fallback selection holds a value in `[1, 5]`.
    #[error("Please select a valid Radius (R) first.")]
    InvalidRadius,
}

/// An operator-facing failure to reach the classification backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntegrationError {
    /// The remote notification hook is not wired to a transport.
    #[error("classification hook is not available")]
    HookUnavailable,

    /// The transport rejected or failed to deliver the request.
    #[error("classification transport failed: {0}")]
    Transport(String),
}

/// Construction-time configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Click capture was built without a classification hook.
    #[error("click capture requires a classification hook")]
    MissingHook,

    /// The canvas resolution has a zero dimension.
    #[error("canvas resolution must be positive, got {width}x{height}")]
    ZeroResolution {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
}

/// Errors returned by a click handler.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CaptureError {
    /// The click was discarded before any coordinate was computed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Shared view or capture state could not be locked.
    #[error("diagram state is unavailable")]
    StateUnavailable,
}

impl CaptureError {
    /// Message suitable for a user-facing alert, if this error is one.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Validation(err) => Some(err.to_string()),
            Self::StateUnavailable => None,
        }
    }
}
