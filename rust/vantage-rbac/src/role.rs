use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::RbacError;

/// The coarse-grained class a user belongs to.
///
/// The set is closed. Every authenticated user holds exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access, implicitly satisfies moderator checks.
    Admin,
    /// Content moderation.
    Moderator,
    /// Regular signed-in user.
    User,
    /// Read-only account.
    Viewer,
}

impl Role {
    /// All roles, most privileged first.
    pub const ALL: [Role; 4] = [Role::Admin, Role::Moderator, Role::User, Role::Viewer];

    /// Roles that pass moderator-level checks.
    pub const MODERATORS: [Role; 2] = [Role::Admin, Role::Moderator];

    /// Lowercase name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Moderator => "moderator",
            Role::User => "user",
            Role::Viewer => "viewer",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RbacError;

    /// Only the exact lowercase wire names are accepted.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == value)
            .ok_or_else(|| RbacError::UnknownRole(value.to_string()))
    }
}
