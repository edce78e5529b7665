//! Persisted session credentials
//!
//! Manages a JSON file holding the signed-in session: access token, refresh
//! token, and the cached member profile. All writes use atomic temp-file +
//! rename to prevent corruption on crash. A tokio Mutex serializes
//! concurrent writers (the gateway persisting a refreshed token, the login
//! flow storing a new session).
//!
//! The file is the single source of truth: the gateway reads the tokens
//! from this store on every request. A missing access token means the
//! session is unauthenticated.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::profile::Profile;

/// On-disk session state. All fields absent = signed out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionState {
    #[serde(skip_serializing_if = "Option::is_none")]
    access_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile: Option<Profile>,
}

/// Thread-safe credential file manager.
///
/// The Mutex serializes all access. Reads clone the small in-memory state,
/// so request-time token lookups never touch the disk.
pub struct CredentialStore {
    path: PathBuf,
    state: Mutex<SessionState>,
}

impl CredentialStore {
    /// Load the session from the given file path.
    ///
    /// If the file doesn't exist, starts signed out and creates it as `{}`
    /// so future loads don't need the cold-start path.
    pub async fn load(path: PathBuf) -> Result<Self> {
        let state = if path.exists() {
            let contents = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| Error::Io(format!("reading credential file: {e}")))?;
            let state: SessionState = serde_json::from_str(&contents)
                .map_err(|e| Error::CredentialParse(format!("parsing credential file: {e}")))?;
            info!(
                path = %path.display(),
                authenticated = state.access_token.is_some(),
                "loaded session credentials"
            );
            state
        } else {
            info!(path = %path.display(), "credential file not found, starting signed out");
            let state = SessionState::default();
            write_atomic(&path, &state).await?;
            state
        };

        Ok(Self {
            path,
            state: Mutex::new(state),
        })
    }

    /// Current access token, if any.
    pub async fn access_token(&self) -> Option<String> {
        self.state.lock().await.access_token.clone()
    }

    /// Current refresh token, if any.
    pub async fn refresh_token(&self) -> Option<String> {
        self.state.lock().await.refresh_token.clone()
    }

    /// Cached profile of the signed-in member, if any.
    pub async fn profile(&self) -> Option<Profile> {
        self.state.lock().await.profile.clone()
    }

    /// Whether a session is active. An absent access token means the
    /// caller is unauthenticated, regardless of the other fields.
    pub async fn is_authenticated(&self) -> bool {
        self.state.lock().await.access_token.is_some()
    }

    /// Store both tokens after a successful login and persist to disk.
    ///
    /// Leaves any cached profile in place; the login flow overwrites it
    /// separately once the role relation has been resolved.
    pub async fn store_login(&self, access_token: String, refresh_token: String) -> Result<()> {
        let mut state = self.state.lock().await;
        state.access_token = Some(access_token);
        state.refresh_token = Some(refresh_token);
        debug!("stored login tokens");
        write_atomic(&self.path, &state).await
    }

    /// Replace only the access token after a refresh and persist to disk.
    ///
    /// The refresh token is left untouched — the refresh endpoint never
    /// rotates it.
    pub async fn store_access_token(&self, access_token: String) -> Result<()> {
        let mut state = self.state.lock().await;
        state.access_token = Some(access_token);
        debug!("stored refreshed access token");
        write_atomic(&self.path, &state).await
    }

    /// Cache the signed-in member's profile and persist to disk.
    pub async fn store_profile(&self, profile: Profile) -> Result<()> {
        let mut state = self.state.lock().await;
        debug!(member_id = %profile.id, "stored member profile");
        state.profile = Some(profile);
        write_atomic(&self.path, &state).await
    }

    /// Remove both tokens and the cached profile and persist to disk.
    ///
    /// Used for user sign-out and for forced logout when a refresh fails.
    pub async fn clear(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        *state = SessionState::default();
        debug!("cleared session credentials");
        write_atomic(&self.path, &state).await
    }
}

/// Write the session state to a file atomically.
///
/// Writes to a temporary file in the same directory, then renames it over
/// the target. This prevents corruption if the process crashes mid-write.
/// Sets file permissions to 0600 (owner read/write only) since the file
/// contains bearer tokens.
async fn write_atomic(path: &Path, state: &SessionState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)
        .map_err(|e| Error::CredentialParse(format!("serializing credentials: {e}")))?;

    let dir = path
        .parent()
        .ok_or_else(|| Error::Io("credential path has no parent directory".into()))?;

    let tmp_path = dir.join(format!(".credentials.tmp.{}", std::process::id()));

    tokio::fs::write(&tmp_path, json.as_bytes())
        .await
        .map_err(|e| Error::Io(format!("writing temp credential file: {e}")))?;

    // Set 0600 permissions (unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        tokio::fs::set_permissions(&tmp_path, perms)
            .await
            .map_err(|e| Error::Io(format!("setting credential file permissions: {e}")))?;
    }

    tokio::fs::rename(&tmp_path, path)
        .await
        .map_err(|e| Error::Io(format!("renaming temp credential file: {e}")))?;

    debug!(path = %path.display(), "persisted session credentials");
    Ok(())
}
