//! Club overview command
//!
//! Fetches member stats, sessions, and attendance concurrently — the
//! three calls are independent, and joining them keeps the overview
//! snappy on a slow connection.

use std::sync::Arc;

use anyhow::Result;

use clubdesk_api::{AttendanceClient, MembersClient, SessionsClient};
use clubdesk_gateway::Gateway;

pub async fn show(gateway: Arc<Gateway>) -> Result<()> {
    let members = MembersClient::new(gateway.clone());
    let sessions = SessionsClient::new(gateway.clone());
    let attendance = AttendanceClient::new(gateway);

    let (stats, sessions, attendance) =
        tokio::try_join!(members.stats(), sessions.list(), attendance.list())?;

    println!("Members: {}", stats.total);
    for bucket in &stats.detail {
        println!(
            "  {:<12} {}",
            bucket.status.as_deref().unwrap_or("(none)"),
            bucket.count
        );
    }
    println!("Sessions: {}", sessions.len());
    if let Some(next) = sessions.first() {
        println!(
            "  Latest: {} ({})",
            next.session_name,
            next.session_date.as_deref().unwrap_or("no date")
        );
    }
    println!("Attendance records: {}", attendance.len());
    Ok(())
}
