use serde::{Deserialize, Serialize};
use std::fmt;

/// Access level of the current viewer.
///
/// Roles are ordered integers: a higher role sees a superset of what any
/// lower role sees. Menu entries and sub-entries carry a minimum role and
/// are visible iff `viewer >= min_role`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Role(pub u32);

impl Role {
    pub const GUEST: Role = Role(0);
    pub const MEMBER: Role = Role(1);
    pub const MANAGER: Role = Role(2);
    pub const ADMIN: Role = Role(3);

    /// Every named level, lowest first. Used by the role switcher.
    pub const LEVELS: [Role; 4] = [Role::GUEST, Role::MEMBER, Role::MANAGER, Role::ADMIN];

    /// Returns true if this role meets the `required` threshold.
    pub fn satisfies(&self, required: Role) -> bool {
        *self >= required
    }

    /// Parse a role name or a bare number. Unknown values default to Guest.
    pub fn from_str_or_default(s: &str) -> Self {
        let s = s.trim();
        if let Ok(level) = s.parse::<u32>() {
            return Role(level);
        }
        match s.to_lowercase().as_str() {
            "member" => Role::MEMBER,
            "manager" => Role::MANAGER,
            "admin" => Role::ADMIN,
            _ => Role::GUEST,
        }
    }

    /// Lowercase name for named levels; roles above Admin have no name.
    pub fn as_str(&self) -> Option<&'static str> {
        match self.0 {
            0 => Some("guest"),
            1 => Some("member"),
            2 => Some("manager"),
            3 => Some("admin"),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "role {}", self.0),
        }
    }
}
