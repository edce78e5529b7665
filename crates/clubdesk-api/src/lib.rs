//! Typed clients for the club management API
//!
//! Thin resource clients over the authenticated request gateway: auth
//! (login/logout/change-password), members, sessions, attendance, roles,
//! and role-sessions. Each client owns a shared [`Gateway`] handle, builds
//! the request, and decodes the JSON payload into the wire models in
//! [`models`].
//!
//! The gateway's error normalization passes through untouched — a caller
//! sees the gateway's message for anything the server rejected, and a
//! distinct decode error only when a 2xx payload doesn't match the
//! documented shape.

pub mod attendance;
pub mod auth;
pub mod error;
pub mod members;
pub mod models;
pub mod role_sessions;
pub mod roles;
pub mod sessions;

pub use attendance::AttendanceClient;
pub use auth::AuthClient;
pub use error::{Error, Result};
pub use members::MembersClient;
pub use role_sessions::RoleSessionsClient;
pub use roles::RolesClient;
pub use sessions::SessionsClient;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Decode a gateway payload into a typed model.
pub(crate) fn decode<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| Error::Decode(e.to_string()))
}

/// Encode a request payload as a JSON value.
pub(crate) fn encode<T: Serialize>(payload: &T) -> Result<serde_json::Value> {
    serde_json::to_value(payload).map_err(|e| Error::Encode(e.to_string()))
}
