//! Caller roles carried in the `role` token claim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of an authenticated caller.
///
/// Serialized lowercase (`"admin"`, `"customer"`). Tokens naming any other
/// role fail to decode and are treated as invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// May create, update and delete villa numbers.
    Admin,
    /// Read-only access.
    Customer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Customer => "customer",
        }
    }

    /// Whether this role may mutate villa numbers.
    pub fn can_write(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
