//! Member roster client
//!
//! Collection listing is server-paginated with an optional keyword filter
//! (full name or student id). The stats endpoint powers the dashboard
//! counters. `delete_all` wipes the whole roster; the server restricts it
//! to admins.

use std::sync::Arc;

use reqwest::Method;

use clubdesk_gateway::Gateway;

use crate::error::Result;
use crate::models::{ApiMessage, Member, MemberPage, MemberStats, MemberUpdate, NewMember};

pub struct MembersClient {
    gateway: Arc<Gateway>,
}

impl MembersClient {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }

    /// Member counts grouped by status.
    pub async fn stats(&self) -> Result<MemberStats> {
        let value = self
            .gateway
            .execute(Method::GET, "/members/stats", None)
            .await?;
        crate::decode(value)
    }

    /// One page of the roster. `page` starts at 1; `keyword` filters by
    /// full name or student id.
    pub async fn list(&self, page: u32, limit: u32, keyword: Option<&str>) -> Result<MemberPage> {
        let mut path = format!("/members?page={page}&limit={limit}");
        if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
            path.push_str(&format!("&keyword={keyword}"));
        }
        let value = self.gateway.execute(Method::GET, &path, None).await?;
        crate::decode(value)
    }

    /// One member with the role relation populated.
    pub async fn get(&self, id: &str) -> Result<Member> {
        let value = self
            .gateway
            .execute(Method::GET, &format!("/members/{id}"), None)
            .await?;
        crate::decode(value)
    }

    pub async fn create(&self, member: &NewMember) -> Result<Member> {
        let body = crate::encode(member)?;
        let value = self
            .gateway
            .execute(Method::POST, "/members", Some(body))
            .await?;
        crate::decode(value)
    }

    pub async fn update(&self, id: &str, update: &MemberUpdate) -> Result<Member> {
        let body = crate::encode(update)?;
        let value = self
            .gateway
            .execute(Method::PUT, &format!("/members/{id}"), Some(body))
            .await?;
        crate::decode(value)
    }

    pub async fn delete(&self, id: &str) -> Result<ApiMessage> {
        let value = self
            .gateway
            .execute(Method::DELETE, &format!("/members/{id}"), None)
            .await?;
        crate::decode(value)
    }

    /// Delete every member. Admin only.
    pub async fn delete_all(&self) -> Result<ApiMessage> {
        let value = self.gateway.execute(Method::DELETE, "/members", None).await?;
        crate::decode(value)
    }
}
