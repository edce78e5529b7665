//! Role and per-session-role commands

use std::sync::Arc;

use anyhow::Result;

use clubdesk_api::{RoleSessionsClient, RolesClient};
use clubdesk_gateway::Gateway;

pub async fn list(gateway: Arc<Gateway>) -> Result<()> {
    let roles = RolesClient::new(gateway).list().await?;

    if roles.is_empty() {
        println!("No roles defined.");
        return Ok(());
    }
    for role in &roles {
        println!("{:<26} {}", role.role_name, role.id);
    }
    Ok(())
}

pub async fn add(gateway: Arc<Gateway>, name: &str) -> Result<()> {
    let role = RolesClient::new(gateway).create(name).await?;
    println!("Created role {} ({})", role.role_name, role.id);
    Ok(())
}

pub async fn list_role_sessions(gateway: Arc<Gateway>) -> Result<()> {
    let roles = RoleSessionsClient::new(gateway).list().await?;

    if roles.is_empty() {
        println!("No per-session roles defined.");
        return Ok(());
    }
    for role in &roles {
        println!("{:<26} {}", role.role_session_name, role.id);
    }
    Ok(())
}
