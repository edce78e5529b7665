//! Attendance client
//!
//! Records tie a member to a session with a status string and an optional
//! note. The per-session listing populates the member relation (the roster
//! view needs names), while the global listing populates both relations.

use std::sync::Arc;

use reqwest::Method;

use clubdesk_gateway::Gateway;

use crate::error::Result;
use crate::models::{ApiMessage, Attendance, AttendanceUpdate, NewAttendance};

pub struct AttendanceClient {
    gateway: Arc<Gateway>,
}

impl AttendanceClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Every attendance record.
    pub async fn list(&self) -> Result<Vec<Attendance>> {
        let value = self
            .gateway
            .execute(Method::GET, "/attendance", None)
            .await?;
        crate::decode(value)
    }

    /// Attendance for one session, member relation populated.
    pub async fn list_for_session(&self, session_id: &str) -> Result<Vec<Attendance>> {
        let value = self
            .gateway
            .execute(
                Method::GET,
                &format!("/attendance/session/{session_id}"),
                None,
            )
            .await?;
        crate::decode(value)
    }

    pub async fn get(&self, id: &str) -> Result<Attendance> {
        let value = self
            .gateway
            .execute(Method::GET, &format!("/attendance/{id}"), None)
            .await?;
        crate::decode(value)
    }

    /// Mark attendance: create a record for a member at a session.
    pub async fn mark(&self, record: &NewAttendance) -> Result<Attendance> {
        let body = crate::encode(record)?;
        let value = self
            .gateway
            .execute(Method::POST, "/attendance", Some(body))
            .await?;
        crate::decode(value)
    }

    pub async fn update(&self, id: &str, update: &AttendanceUpdate) -> Result<Attendance> {
        let body = crate::encode(update)?;
        let value = self
            .gateway
            .execute(Method::PUT, &format!("/attendance/{id}"), Some(body))
            .await?;
        crate::decode(value)
    }

    pub async fn delete(&self, id: &str) -> Result<ApiMessage> {
        let value = self
            .gateway
            .execute(Method::DELETE, &format!("/attendance/{id}"), None)
            .await?;
        crate::decode(value)
    }
}
