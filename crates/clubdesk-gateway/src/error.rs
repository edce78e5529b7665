//! The single error shape surfaced by the gateway

/// Message used when the server cannot be reached at the transport level.
pub const UNREACHABLE_MESSAGE: &str = "cannot reach the server, please check your connection";

/// Message used when a token refresh fails and the session is torn down.
pub const SESSION_EXPIRED_MESSAGE: &str = "session expired, please sign in again";

/// Default message for a 401 whose body carries no message of its own.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "invalid credentials, please try again";

/// All gateway failures collapse into this one shape: a display message.
///
/// Callers do not branch on an error subtype. They show the message to the
/// user and stop the current operation; the message already distinguishes
/// unreachable server, expired session, rejected credentials, and
/// application errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn unreachable() -> Self {
        Self::new(UNREACHABLE_MESSAGE)
    }

    pub(crate) fn session_expired() -> Self {
        Self::new(SESSION_EXPIRED_MESSAGE)
    }

    /// Generic fallback for a non-2xx response without a server message.
    pub(crate) fn status(status: reqwest::StatusCode) -> Self {
        Self::new(format!("error {}", status.as_u16()))
    }
}

/// Result alias for gateway calls.
pub type Result<T> = std::result::Result<T, GatewayError>;
