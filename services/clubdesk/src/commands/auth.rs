//! Sign-in, sign-out, and session inspection commands

use std::sync::Arc;

use anyhow::{Context, Result};

use clubdesk_api::AuthClient;
use clubdesk_gateway::Gateway;
use common::Secret;

/// Read the password without echoing.
///
/// CLUBDESK_PASSWORD overrides the prompt for scripted use.
fn read_password(prompt: &str) -> Result<Secret> {
    if let Ok(password) = std::env::var("CLUBDESK_PASSWORD") {
        return Ok(Secret::new(password));
    }
    rpassword::prompt_password(prompt)
        .map(Secret::new)
        .context("Failed to read password")
}

pub async fn login(gateway: Arc<Gateway>, mssv: &str) -> Result<()> {
    let password = read_password("Password: ")?;

    let auth = AuthClient::new(gateway);
    let profile = auth.login(mssv, password.expose()).await?;

    println!("Signed in as {} ({})", profile.full_name, profile.mssv);
    if let Some(role_name) = &profile.role_name {
        println!("  Role: {role_name}");
    }
    if profile.is_admin {
        println!("  Admin rights: yes");
    }
    Ok(())
}

pub async fn set_password(gateway: Arc<Gateway>, member_id: &str) -> Result<()> {
    let password = read_password("New password: ")?;
    let confirm = read_password("Confirm new password: ")?;
    if password.expose() != confirm.expose() {
        anyhow::bail!("Passwords do not match");
    }

    let outcome = AuthClient::new(gateway)
        .change_password(member_id, password.expose())
        .await?;
    println!(
        "{}",
        outcome
            .message
            .unwrap_or_else(|| format!("Password updated for member {member_id}."))
    );
    Ok(())
}

pub async fn logout(gateway: Arc<Gateway>) -> Result<()> {
    AuthClient::new(gateway).logout().await?;
    println!("Signed out.");
    Ok(())
}

pub async fn whoami(gateway: Arc<Gateway>) -> Result<()> {
    match AuthClient::new(gateway).current_profile().await {
        Some(profile) => {
            println!("{} ({})", profile.full_name, profile.mssv);
            println!(
                "  Role: {}",
                profile.role_name.as_deref().unwrap_or("unknown")
            );
            println!("  Admin rights: {}", if profile.is_admin { "yes" } else { "no" });
        }
        None => println!("Not signed in. Run `clubdesk login <mssv>`."),
    }
    Ok(())
}
