//! Student input

use super::staff::{MAX_NAME_LEN, MAX_PASSWORD_BYTES, MAX_USERNAME_LEN};
use super::validation::{self, required};
use super::ValidationError;

/// Validated fields for creating or fully overwriting a student.
#[derive(Clone, PartialEq, Eq)]
pub struct NewStudent {
    name: String,
    username: String,
    password: String,
}

impl NewStudent {
    pub fn new(name: &str, username: &str, password: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name, MAX_NAME_LEN)?,
            username: required("username", username, MAX_USERNAME_LEN)?,
            password: validation::password(password, MAX_PASSWORD_BYTES)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for NewStudent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewStudent")
            .field("name", &self.name)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
