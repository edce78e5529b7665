//! Attendance commands

use std::sync::Arc;

use anyhow::Result;

use clubdesk_api::AttendanceClient;
use clubdesk_api::models::{NewAttendance, SessionRef};
use clubdesk_gateway::Gateway;

use super::member_label;

pub async fn list(gateway: Arc<Gateway>, session: Option<&str>) -> Result<()> {
    let client = AttendanceClient::new(gateway);
    let records = match session {
        Some(session_id) => client.list_for_session(session_id).await?,
        None => client.list().await?,
    };

    if records.is_empty() {
        println!("No attendance records.");
        return Ok(());
    }

    for record in &records {
        let session_label = match &record.session_id {
            Some(SessionRef::Populated(session)) => session.session_name.clone(),
            Some(SessionRef::Id(id)) => id.clone(),
            None => "-".into(),
        };
        println!(
            "{:<26} {:<30} {:<10} {}",
            session_label,
            member_label(record.member_id.as_ref()),
            record.status.as_deref().unwrap_or("-"),
            record.note.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

pub async fn mark(
    gateway: Arc<Gateway>,
    session_id: &str,
    member_id: &str,
    status: Option<String>,
    note: Option<String>,
) -> Result<()> {
    let record = AttendanceClient::new(gateway)
        .mark(&NewAttendance {
            session_id: session_id.into(),
            member_id: member_id.into(),
            status,
            note,
        })
        .await?;

    println!(
        "Marked {} as {} (record {})",
        member_label(record.member_id.as_ref()),
        record.status.as_deref().unwrap_or("recorded"),
        record.id,
    );
    Ok(())
}
