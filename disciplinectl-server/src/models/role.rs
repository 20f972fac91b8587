//! Staff roles
//!
//! Stored as lowercase text. The role decides which dashboard a staff
//! member lands on after login and which routes accept their user id.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Principal,
    Faculty,
    Committee,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Principal, Role::Faculty, Role::Committee];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Principal => "principal",
            Self::Faculty => "faculty",
            Self::Committee => "committee",
        }
    }

    /// Human label for page headings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Principal => "Principal",
            Self::Faculty => "Faculty",
            Self::Committee => "Committee",
        }
    }

    /// Dashboard path, e.g. `/facultydashboard`.
    pub fn dashboard_path(&self) -> String {
        format!("/{}dashboard", self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "principal" => Ok(Self::Principal),
            "faculty" => Ok(Self::Faculty),
            "committee" => Ok(Self::Committee),
            "" => Err(ValidationError::Empty { field: "role" }),
            _ => Err(ValidationError::InvalidVariant {
                field: "role",
                value: s.to_owned(),
            }),
        }
    }
}

// Lets sqlx decode the TEXT column straight into a Role.
impl TryFrom<String> for Role {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
