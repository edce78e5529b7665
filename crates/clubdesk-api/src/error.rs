//! Client-layer errors

use clubdesk_gateway::GatewayError;

/// Errors from the typed API clients.
///
/// Gateway failures keep their normalized message; the extra variants
/// cover the client's own responsibilities (decoding payloads, persisting
/// credentials during login).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    #[error("unexpected response shape: {0}")]
    Decode(String),

    #[error("request payload did not serialize: {0}")]
    Encode(String),

    #[error("credential storage failed: {0}")]
    Storage(String),
}

/// Result alias for API client operations.
pub type Result<T> = std::result::Result<T, Error>;
