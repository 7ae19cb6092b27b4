//! User-service wire types.

use serde::{Deserialize, Serialize};

/// Role granted to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub id: i64,
    #[serde(rename = "deleted", alias = "isDeleted")]
    pub is_deleted: bool,
    pub value: String,
}

/// User returned by a successful token validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
    pub roles: Vec<Role>,
    #[serde(rename = "emailVerified", alias = "isEmailVerified")]
    pub is_email_verified: bool,
}

impl UserDetails {
    /// Returns true if the user holds an active role named `value`.
    #[must_use]
    pub fn has_role(&self, value: &str) -> bool {
        self.roles
            .iter()
            .any(|role| !role.is_deleted && role.value.eq_ignore_ascii_case(value))
    }
}
