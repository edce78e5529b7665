//! Member role client (club-wide roles: admin, member, ...)

use std::sync::Arc;

use reqwest::Method;
use serde_json::json;

use clubdesk_gateway::Gateway;

use crate::error::Result;
use crate::models::{ApiMessage, Role};

pub struct RolesClient {
    gateway: Arc<Gateway>,
}

impl RolesClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> Result<Vec<Role>> {
        let value = self.gateway.execute(Method::GET, "/roles", None).await?;
        crate::decode(value)
    }

    pub async fn get(&self, id: &str) -> Result<Role> {
        let value = self
            .gateway
            .execute(Method::GET, &format!("/roles/{id}"), None)
            .await?;
        crate::decode(value)
    }

    pub async fn create(&self, role_name: &str) -> Result<Role> {
        let value = self
            .gateway
            .execute(Method::POST, "/roles", Some(json!({"roleName": role_name})))
            .await?;
        crate::decode(value)
    }

    pub async fn update(&self, id: &str, role_name: &str) -> Result<Role> {
        let value = self
            .gateway
            .execute(
                Method::PUT,
                &format!("/roles/{id}"),
                Some(json!({"roleName": role_name})),
            )
            .await?;
        crate::decode(value)
    }

    pub async fn delete(&self, id: &str) -> Result<ApiMessage> {
        let value = self
            .gateway
            .execute(Method::DELETE, &format!("/roles/{id}"), None)
            .await?;
        crate::decode(value)
    }
}
