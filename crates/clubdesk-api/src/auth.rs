//! Login flow, sign-out, and password changes
//!
//! Login is the one call that must not tear the session down on a 401 —
//! a rejected password is reported inline — so it goes through the gateway
//! with forced logout suppressed. On success both tokens are persisted,
//! then a follow-up member fetch resolves the role relation (the login
//! payload may carry the role as a bare id) and the derived profile is
//! cached.

use std::sync::Arc;

use reqwest::Method;
use serde_json::json;
use tracing::{info, warn};

use clubdesk_auth::Profile;
use clubdesk_gateway::{Gateway, RequestOptions};

use crate::error::{Error, Result};
use crate::members::MembersClient;
use crate::models::{ApiMessage, LoginResponse};

pub struct AuthClient {
    gateway: Arc<Gateway>,
}

impl AuthClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Sign in with a student id and password.
    ///
    /// Persists both tokens and the derived profile in the gateway's
    /// credential store and returns the profile. If the follow-up member
    /// fetch fails, the role populated in the login payload itself is used
    /// instead — the tokens are already valid at that point, and failing
    /// the whole login would leave a half-signed-in session behind.
    pub async fn login(&self, mssv: &str, password: &str) -> Result<Profile> {
        let value = self
            .gateway
            .execute_with(
                Method::POST,
                "/auth/login",
                Some(json!({"mssv": mssv, "password": password})),
                RequestOptions {
                    suppress_forced_logout: true,
                },
            )
            .await?;
        let login: LoginResponse = crate::decode(value)?;

        let store = self.gateway.store();
        store
            .store_login(login.access_token.clone(), login.refresh_token.clone())
            .await
            .map_err(|e| Error::Storage(e.to_string()))?;

        // The member detail endpoint populates the role relation
        let members = MembersClient::new(self.gateway.clone());
        let role_name = match members.get(&login.member.id).await {
            Ok(detail) => detail.role_name().map(str::to_owned),
            Err(e) => {
                warn!(error = %e, "member detail fetch after login failed, using login payload role");
                login.member.role_name().map(str::to_owned)
            }
        };

        let profile = Profile::new(
            login.member.id.clone(),
            login.member.full_name.clone(),
            login.member.mssv.clone(),
            role_name,
        );
        store
            .store_profile(profile.clone())
            .await
            .map_err(|e| Error::Storage(e.to_string()))?;

        info!(mssv = %profile.mssv, is_admin = profile.is_admin, "signed in");
        Ok(profile)
    }

    /// Sign out locally: drop tokens and the cached profile.
    ///
    /// User-initiated, so no navigation happens here — the caller already
    /// knows where it is going next.
    pub async fn logout(&self) -> Result<()> {
        self.gateway
            .store()
            .clear()
            .await
            .map_err(|e| Error::Storage(e.to_string()))?;
        info!("signed out");
        Ok(())
    }

    /// The cached profile of the signed-in member, if any.
    pub async fn current_profile(&self) -> Option<Profile> {
        self.gateway.store().profile().await
    }

    /// Change a member's password (admin acting on a member's behalf).
    pub async fn change_password(&self, member_id: &str, new_password: &str) -> Result<ApiMessage> {
        let value = self
            .gateway
            .execute(
                Method::POST,
                "/auth/change-password",
                Some(json!({
                    "memberId": member_id,
                    "newPassword": new_password,
                    "password": new_password,
                })),
            )
            .await?;
        crate::decode(value)
    }
}
