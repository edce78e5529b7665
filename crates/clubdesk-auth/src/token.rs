//! Access-token refresh call
//!
//! POSTs the stored refresh token to the refresh endpoint and gets back a
//! fresh access token. The refresh token itself is never rotated by this
//! endpoint — the response carries the new access token only, so callers
//! must overwrite just that half of the stored credential.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Refresh endpoint path, relative to the API base URL.
pub const REFRESH_PATH: &str = "/auth/refresh-token";

#[derive(Debug, Serialize)]
struct RefreshRequest<'a> {
    token: &'a str,
}

/// Response from the refresh endpoint.
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
}

/// Mint a new access token from a refresh token.
///
/// Any non-2xx status means the refresh token was rejected (revoked,
/// expired, or unknown); the caller decides what that means for the
/// session. Transport failures surface as [`Error::Http`].
pub async fn refresh_access_token(
    client: &reqwest::Client,
    base_url: &str,
    refresh_token: &str,
) -> Result<RefreshResponse> {
    let url = format!("{}{REFRESH_PATH}", base_url.trim_end_matches('/'));
    let response = client
        .post(&url)
        .json(&RefreshRequest {
            token: refresh_token,
        })
        .send()
        .await
        .map_err(|e| Error::Http(format!("token refresh request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| String::from("<no body>"));
        return Err(Error::TokenRefresh(format!(
            "refresh endpoint returned {status}: {body}"
        )));
    }

    response
        .json::<RefreshResponse>()
        .await
        .map_err(|e| Error::TokenRefresh(format!("invalid refresh response: {e}")))
}
