//! Cached profile of the signed-in member

use serde::{Deserialize, Serialize};

/// The member who is currently signed in.
///
/// Derived once at login from the login response plus a follow-up member
/// fetch (the login payload may carry the role as a bare id; the member
/// detail endpoint populates the relation). Cached in the credential store
/// and never mutated by the request gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Server-side member id
    pub id: String,
    pub full_name: String,
    /// Student identifier, also the login name
    pub mssv: String,
    /// Role name from the populated role relation, when known
    pub role_name: Option<String>,
    pub is_admin: bool,
}

impl Profile {
    /// Build a profile, deriving admin rights from the role name.
    ///
    /// Any role whose name contains "admin" (case-insensitive) is treated
    /// as an administrator. Members without a known role are not admins.
    pub fn new(
        id: impl Into<String>,
        full_name: impl Into<String>,
        mssv: impl Into<String>,
        role_name: Option<String>,
    ) -> Self {
        let is_admin = role_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains("admin"));
        Self {
            id: id.into(),
            full_name: full_name.into(),
            mssv: mssv.into(),
            role_name,
            is_admin,
        }
    }
}
