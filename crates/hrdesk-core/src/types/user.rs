//! Users and roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, InvalidInputError};

/// Role of an application user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Hr,
    Finance,
    Employee,
}

impl Role {
    /// Every role, in display order.
    pub const ALL: [Role; 3] = [Role::Hr, Role::Finance, Role::Employee];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Hr => "hr",
            Role::Finance => "finance",
            Role::Employee => "employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                InvalidInputError::Role {
                    value: s.to_string(),
                }
                .into()
            })
    }
}

/// The authenticated user, as returned by the backend.
///
/// Immutable for the life of a session; replaced wholesale on re-login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
    pub role: Role,
}
