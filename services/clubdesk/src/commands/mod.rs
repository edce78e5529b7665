//! CLI subcommand implementations

pub mod attendance;
pub mod auth;
pub mod members;
pub mod overview;
pub mod roles;
pub mod sessions;

use clubdesk_api::models::{MemberRef, RoleSessionRef};

/// Display name for a member relation: full name when populated, the raw
/// id otherwise.
pub(crate) fn member_label(member: Option<&MemberRef>) -> String {
    match member {
        Some(MemberRef::Populated(member)) => format!("{} ({})", member.full_name, member.mssv),
        Some(MemberRef::Id(id)) => id.clone(),
        None => "-".into(),
    }
}

/// Display name for a per-session role relation.
pub(crate) fn role_session_label(role: Option<&RoleSessionRef>) -> String {
    match role {
        Some(RoleSessionRef::Populated(role)) => role.role_session_name.clone(),
        Some(RoleSessionRef::Id(id)) => id.clone(),
        None => "-".into(),
    }
}
