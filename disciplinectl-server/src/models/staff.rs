//! Staff member input

use super::validation::{self, required};
use super::{Role, ValidationError};

pub const MAX_NAME_LEN: usize = 128;
pub const MAX_USERNAME_LEN: usize = 64;
/// bcrypt input limit
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Validated fields for creating or fully overwriting a staff member.
///
/// The password is plaintext here; repositories hash it before it is stored.
#[derive(Clone, PartialEq, Eq)]
pub struct NewStaffMember {
    name: String,
    username: String,
    password: String,
    role: Role,
}

impl NewStaffMember {
    pub fn new(
        name: &str,
        username: &str,
        password: &str,
        role: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required("name", name, MAX_NAME_LEN)?,
            username: required("username", username, MAX_USERNAME_LEN)?,
            password: validation::password(password, MAX_PASSWORD_BYTES)?,
            role: role.parse()?,
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

    pub fn role(&self) -> Role {
        self.role
    }
}

// Keeps the password out of logs.
impl std::fmt::Debug for NewStaffMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewStaffMember")
            .field("name", &self.name)
            .field("username", &self.username)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_staff() {
        let staff = NewStaffMember::new("Ada Lovelace", "ada", "secret", "faculty").unwrap();
        assert_eq!(staff.name(), "Ada Lovelace");
        assert_eq!(staff.role(), Role::Faculty);
    }

    #[test]
    fn rejects_missing_fields() {
        assert_eq!(
            NewStaffMember::new("", "ada", "secret", "faculty").unwrap_err(),
            ValidationError::Empty { field: "name" }
        );
        assert_eq!(
            NewStaffMember::new("Ada", "ada", "", "faculty").unwrap_err(),
            ValidationError::Empty { field: "password" }
        );
    }

    #[test]
    fn rejects_unknown_role() {
        let err = NewStaffMember::new("Ada", "ada", "secret", "dean").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidVariant { .. }));
    }

    #[test]
    fn rejects_password_over_bcrypt_limit() {
        let long = "ü".repeat(40);
        let err = NewStaffMember::new("Ada", "ada", &long, "faculty").unwrap_err();
        assert!(matches!(err, ValidationError::TooManyBytes { field: "password", max: 72 }));
    }

    #[test]
    fn debug_hides_password() {
        let staff = NewStaffMember::new("Ada", "ada", "topsecret", "principal").unwrap();
        assert!(!format!("{:?}", staff).contains("topsecret"));
    }
}
