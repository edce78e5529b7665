//! Member roster commands

use std::sync::Arc;

use anyhow::Result;

use clubdesk_api::MembersClient;
use clubdesk_gateway::Gateway;

pub async fn list(
    gateway: Arc<Gateway>,
    page: u32,
    limit: u32,
    keyword: Option<&str>,
) -> Result<()> {
    let page_data = MembersClient::new(gateway).list(page, limit, keyword).await?;

    if page_data.members.is_empty() {
        println!("No members found.");
        return Ok(());
    }

    for member in &page_data.members {
        println!(
            "{:<12} {:<28} {:<12} {}",
            member.mssv,
            member.full_name,
            member.status.as_deref().unwrap_or("-"),
            member.role_name().unwrap_or("-"),
        );
    }
    println!();
    println!(
        "Page {}/{} — {} members total",
        page_data.current_page, page_data.total_pages, page_data.total_members
    );
    Ok(())
}

pub async fn show(gateway: Arc<Gateway>, id: &str) -> Result<()> {
    let member = MembersClient::new(gateway).get(id).await?;

    println!("{} ({})", member.full_name, member.mssv);
    println!("  Id: {}", member.id);
    println!("  Class: {}", member.class_name.as_deref().unwrap_or("-"));
    println!("  Email: {}", member.email.as_deref().unwrap_or("-"));
    println!("  Status: {}", member.status.as_deref().unwrap_or("-"));
    println!("  Role: {}", member.role_name().unwrap_or("-"));
    Ok(())
}

pub async fn stats(gateway: Arc<Gateway>) -> Result<()> {
    let stats = MembersClient::new(gateway).stats().await?;

    println!("Members: {}", stats.total);
    for bucket in &stats.detail {
        println!(
            "  {:<12} {}",
            bucket.status.as_deref().unwrap_or("(none)"),
            bucket.count
        );
    }
    Ok(())
}

pub async fn remove(gateway: Arc<Gateway>, id: &str) -> Result<()> {
    let outcome = MembersClient::new(gateway).delete(id).await?;
    println!(
        "{}",
        outcome.message.unwrap_or_else(|| format!("Member {id} deleted."))
    );
    Ok(())
}
