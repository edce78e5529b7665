//! Per-session role client (host, secretary, ...)

use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use clubdesk_gateway::Gateway;

use crate::error::Result;
use crate::models::{ApiMessage, RoleSession};

pub struct RoleSessionsClient {
    gateway: Arc<Gateway>,
}

impl RoleSessionsClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<RoleSession>> {
        let value = self
            .gateway
            .execute(Method::GET, "/role-sessions", None)
            .await?;
        crate::decode(value)
    }

    pub async fn get(&self, id: &str) -> Result<RoleSession> {
        let value = self
            .gateway
            .execute(Method::GET, &format!("/role-sessions/{id}"), None)
            .await?;
        crate::decode(value)
    }

    pub async fn create(&self, role_session_name: &str) -> Result<RoleSession> {
        let value = self
            .gateway
            .execute(
                Method::POST,
                "/role-sessions",
                Some(json!({"roleSessionName": role_session_name})),
            )
            .await?;
        crate::decode(value)
    }

    pub async fn update(&self, id: &str, role_session_name: &str) -> Result<RoleSession> {
        let value = self
            .gateway
            .execute(
                Method::PUT,
                &format!("/role-sessions/{id}"),
                Some(json!({"roleSessionName": role_session_name})),
            )
            .await?;
        crate::decode(value)
    }

    pub async fn delete(&self, id: &str) -> Result<ApiMessage> {
        let value = self
            .gateway
            .execute(Method::DELETE, &format!("/role-sessions/{id}"), None)
            .await?;
        crate::decode(value)
    }
}
