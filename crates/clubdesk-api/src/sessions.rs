//! Session (meeting/event) client
//!
//! The collection endpoint returns every session with instructors
//! populated; there is no server-side pagination here. Deleting a session
//! cascades to its attendance records on the server.

use std::sync::Arc;

use reqwest::Method;

use clubdesk_gateway::Gateway;

use crate::error::Result;
use crate::models::{ApiMessage, NewSession, Session, SessionUpdate};

pub struct SessionsClient {
    gateway: Arc<Gateway>,
}

impl SessionsClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// All sessions, instructors populated.
    pub async fn list(&self) -> Result<Vec<Session>> {
        let value = self.gateway.execute(Method::GET, "/sessions", None).await?;
        crate::decode(value)
    }

    pub async fn get(&self, id: &str) -> Result<Session> {
        let value = self
            .gateway
            .execute(Method::GET, &format!("/sessions/{id}"), None)
            .await?;
        crate::decode(value)
    }

    pub async fn create(&self, session: &NewSession) -> Result<Session> {
        let body = crate::encode(session)?;
        let value = self
            .gateway
            .execute(Method::POST, "/sessions", Some(body))
            .await?;
        crate::decode(value)
    }

    pub async fn update(&self, id: &str, update: &SessionUpdate) -> Result<Session> {
        let body = crate::encode(update)?;
        let value = self
            .gateway
            .execute(Method::PUT, &format!("/sessions/{id}"), Some(body))
            .await?;
        crate::decode(value)
    }

    /// Delete a session. The server also removes the session's attendance
    /// records.
    pub async fn delete(&self, id: &str) -> Result<ApiMessage> {
        let value = self
            .gateway
            .execute(Method::DELETE, &format!("/sessions/{id}"), None)
            .await?;
        crate::decode(value)
    }
}
