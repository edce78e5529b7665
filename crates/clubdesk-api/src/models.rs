//! Wire models for the club management API
//!
//! Shapes follow the server's JSON: camelCase fields, Mongo-style `_id`
//! primary keys (with an `id` alias — the login payload uses the short
//! form), ISO-8601 date strings left as strings. Relation fields come back
//! either as a bare id or as a populated document depending on the
//! endpoint, so they deserialize through untagged reference enums.
//!
//! Status vocabularies (member status, attendance status) are
//! server-defined strings and stay free-form here.

use serde::{Deserialize, Serialize};

/// A member role (club-wide: admin, member, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub role_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A role relation: populated document or bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleRef {
    Populated(Role),
    Id(String),
}

/// A club member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Student identifier, unique, also the login name
    pub mssv: String,
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Member {
    /// Role name, when the role relation came back populated.
    pub fn role_name(&self) -> Option<&str> {
        match &self.role_id {
            Some(RoleRef::Populated(role)) => Some(&role.role_name),
            _ => None,
        }
    }
}

/// One page of the member collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberPage {
    pub members: Vec<Member>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_members: u64,
}

/// Member counts grouped by status.
#[derive(Debug, Clone, Deserialize)]
pub struct MemberStats {
    pub total: u64,
    #[serde(default)]
    pub detail: Vec<StatusCount>,
}

/// One status bucket in [`MemberStats`]. The server groups by the raw
/// status value; members without one land in a null bucket.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusCount {
    #[serde(rename = "_id")]
    pub status: Option<String>,
    pub count: u64,
}

/// Payload for creating a member.
///
/// The password travels in `passwordHash`; the server hashes it for
/// storage (the field name is the server's, not a claim about contents).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    pub mssv: String,
    pub full_name: String,
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Partial update for a member. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// A member relation: populated document or bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MemberRef {
    Populated(Box<Member>),
    Id(String),
}

/// A per-session role (host, secretary, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSession {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub role_session_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A per-session role relation: populated document or bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoleSessionRef {
    Populated(RoleSession),
    Id(String),
}

/// An instructor slot on a session: who, in which per-session role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instructor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_session_id: Option<RoleSessionRef>,
}

/// A club session (meeting/event).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub session_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u64>,
    #[serde(default)]
    pub instructors: Vec<Instructor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A session relation: populated document or bare id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SessionRef {
    Populated(Box<Session>),
    Id(String),
}

/// Payload for creating a session.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSession {
    pub session_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u64>,
    /// Instructor slots as `{memberId, roleSessionId}` id pairs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<NewInstructor>>,
}

/// An instructor slot in a create/update payload: ids only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstructor {
    pub member_id: String,
    pub role_session_id: String,
}

/// Partial update for a session.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<NewInstructor>>,
}

/// One attendance record: a member's presence at a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<SessionRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_id: Option<MemberRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for marking attendance. Status defaults server-side when
/// absent.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAttendance {
    pub session_id: String,
    pub member_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Partial update for an attendance record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Response of a delete (and other message-only) endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response of `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub access_token: String,
    pub refresh_token: String,
    pub member: Member,
}
