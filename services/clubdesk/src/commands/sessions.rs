//! Session commands

use std::sync::Arc;

use anyhow::Result;

use clubdesk_api::{AttendanceClient, SessionsClient};
use clubdesk_gateway::Gateway;

use super::{member_label, role_session_label};

pub async fn list(gateway: Arc<Gateway>) -> Result<()> {
    let sessions = SessionsClient::new(gateway).list().await?;

    if sessions.is_empty() {
        println!("No sessions scheduled.");
        return Ok(());
    }

    for session in &sessions {
        println!(
            "{:<26} {:<22} {:<16} instructors: {}",
            session.session_name,
            session.session_date.as_deref().unwrap_or("-"),
            session.location.as_deref().unwrap_or("-"),
            session.instructors.len(),
        );
    }
    Ok(())
}

pub async fn show(gateway: Arc<Gateway>, id: &str) -> Result<()> {
    let session = SessionsClient::new(gateway.clone()).get(id).await?;

    println!("{}", session.session_name);
    println!("  Id: {}", session.id);
    println!("  Date: {}", session.session_date.as_deref().unwrap_or("-"));
    println!("  Location: {}", session.location.as_deref().unwrap_or("-"));
    if let Some(max) = session.max_participants {
        println!("  Max participants: {max}");
    }
    for instructor in &session.instructors {
        println!(
            "  Instructor: {} — {}",
            member_label(instructor.member_id.as_ref()),
            role_session_label(instructor.role_session_id.as_ref()),
        );
    }

    let records = AttendanceClient::new(gateway).list_for_session(id).await?;
    println!("  Attendance: {} records", records.len());
    for record in &records {
        println!(
            "    {:<30} {}",
            member_label(record.member_id.as_ref()),
            record.status.as_deref().unwrap_or("-"),
        );
    }
    Ok(())
}
