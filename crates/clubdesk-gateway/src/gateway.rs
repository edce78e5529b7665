//! Request execution, token refresh, and error normalization

use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};
use uuid::Uuid;

use clubdesk_auth::{CredentialStore, refresh_access_token};

use crate::error::{GatewayError, INVALID_CREDENTIALS_MESSAGE, Result};
use crate::navigator::Navigator;

/// Options for a single gateway call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions {
    /// Do not clear credentials or navigate away when the server replies
    /// 401. The login flow sets this: a rejected login is reported inline
    /// and must not tear down the screen showing the error.
    pub suppress_forced_logout: bool,
}

/// Authenticated request gateway.
///
/// One instance is shared by all resource clients. Calls are independent
/// asynchronous operations and may run concurrently; the gateway holds no
/// cross-call lock, so two calls that both hit 403 at the same moment each
/// run their own refresh. That race is accepted — the refresh endpoint is
/// idempotent from the client's point of view and last-write-wins on the
/// stored access token.
pub struct Gateway {
    base_url: String,
    http: reqwest::Client,
    store: Arc<CredentialStore>,
    navigator: Arc<dyn Navigator>,
}

impl Gateway {
    /// Create a gateway for the given API origin.
    ///
    /// `base_url` is the path-prefixed API origin; a trailing slash is
    /// tolerated. The reqwest client is shared so connection pools and the
    /// transport timeout configured by the caller apply to every call.
    pub fn new(
        base_url: impl Into<String>,
        http: reqwest::Client,
        store: Arc<CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http,
            store,
            navigator,
        }
    }

    /// The credential store this gateway reads tokens from.
    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// Issue an API call with default options.
    pub async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        self.execute_with(method, path, body, RequestOptions::default())
            .await
    }

    /// Issue an API call.
    ///
    /// Attaches `Content-Type: application/json` and, when an access token
    /// is cached, `Authorization: Bearer <token>`. A 403 triggers exactly
    /// one token refresh followed by one retry; the retried response is
    /// handled like any first response except that it can never trigger
    /// another refresh. A 401 ends the session unless
    /// [`RequestOptions::suppress_forced_logout`] is set. Every failure
    /// becomes a [`GatewayError`]; a 2xx body that is empty or not JSON
    /// resolves to `{}`.
    pub async fn execute_with(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value> {
        let request_id = Uuid::new_v4();
        debug!(%request_id, %method, path, "issuing api request");

        let mut response = self.send(method.clone(), path, body.as_ref()).await?;

        // 403 means the access token expired: refresh once, retry once.
        // A second 403 on the retried call falls through to the generic
        // error handling below.
        if response.status() == StatusCode::FORBIDDEN {
            if self.try_refresh().await {
                info!(%request_id, path, "access token refreshed, retrying request");
                response = self.send(method, path, body.as_ref()).await?;
            } else {
                warn!(%request_id, path, "token refresh failed, ending session");
                self.forced_logout().await;
                return Err(GatewayError::session_expired());
            }
        }

        let status = response.status();

        // 401 means the credentials themselves were rejected. The session
        // is over unless the caller asked to keep it (login flow).
        if status == StatusCode::UNAUTHORIZED {
            if !options.suppress_forced_logout {
                warn!(%request_id, path, "unauthenticated response, ending session");
                self.forced_logout().await;
            }
            let body = read_json_or_empty(response).await;
            return Err(GatewayError::new(
                server_message(&body)
                    .unwrap_or_else(|| INVALID_CREDENTIALS_MESSAGE.to_string()),
            ));
        }

        let payload = read_json_or_empty(response).await;

        if !status.is_success() {
            debug!(%request_id, path, status = status.as_u16(), "api error response");
            return Err(match server_message(&payload) {
                Some(message) => GatewayError::new(message),
                None => GatewayError::status(status),
            });
        }

        Ok(payload)
    }

    /// Build and send one HTTP request. Transport failures (DNS, refused
    /// connection, timeout) map straight to the unreachable-server error —
    /// there is no retry at this level.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<reqwest::Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = self.store.access_token().await {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request.send().await.map_err(|e| {
            warn!(error = %e, url, "transport failure");
            GatewayError::unreachable()
        })
    }

    /// One refresh attempt: IDLE → REFRESHING → IDLE.
    ///
    /// Returns true when a new access token was minted and stored. No
    /// stored refresh token fails immediately without a network call. Only
    /// the access token is overwritten on success; a persistence failure
    /// is logged and the fresh token is still considered usable (the store
    /// keeps it in memory even when the disk write fails).
    async fn try_refresh(&self) -> bool {
        let Some(refresh_token) = self.store.refresh_token().await else {
            debug!("no refresh token cached, refresh not attempted");
            return false;
        };

        match refresh_access_token(&self.http, &self.base_url, &refresh_token).await {
            Ok(minted) => {
                if let Err(e) = self.store.store_access_token(minted.access_token).await {
                    warn!(error = %e, "failed to persist refreshed access token");
                }
                true
            }
            Err(e) => {
                debug!(error = %e, "token refresh rejected");
                false
            }
        }
    }

    /// Clear the stored session and send the user back to the entry point.
    ///
    /// A failure to clear the file is logged and swallowed: the surfaced
    /// error must stay the one that caused the logout.
    async fn forced_logout(&self) {
        if let Err(e) = self.store.clear().await {
            warn!(error = %e, "failed to clear stored credentials");
        }
        self.navigator.to_entry_point();
    }
}

/// Parse a response body as JSON, treating an empty or malformed body as
/// an empty object. A parse problem must never surface as its own error.
async fn read_json_or_empty(response: reqwest::Response) -> Value {
    match response.bytes().await {
        Ok(bytes) => serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::Object(serde_json::Map::new())),
        Err(_) => Value::Object(serde_json::Map::new()),
    }
}

/// The server's own error message, when the body carries one.
fn server_message(body: &Value) -> Option<String> {
    body.get("message")
        .and_then(Value::as_str)
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_reads_the_message_field() {
        let body = serde_json::json!({"message": "member not found"});
        assert_eq!(server_message(&body).as_deref(), Some("member not found"));
    }

    #[test]
    fn server_message_ignores_non_string_and_absent() {
        assert_eq!(server_message(&serde_json::json!({})), None);
        assert_eq!(server_message(&serde_json::json!({"message": 42})), None);
        assert_eq!(server_message(&serde_json::json!([1, 2])), None);
    }

    #[tokio::test]
    async fn base_url_trailing_slash_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::load(dir.path().join("credentials.json"))
            .await
            .unwrap();
        let gateway = Gateway::new(
            "http://127.0.0.1:9/api/",
            reqwest::Client::new(),
            Arc::new(store),
            Arc::new(crate::NoopNavigator),
        );
        assert_eq!(gateway.base_url, "http://127.0.0.1:9/api");
    }
}
