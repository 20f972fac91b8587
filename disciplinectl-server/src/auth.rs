//! Credential handling
//!
//! Stored passwords are bcrypt hashes. Hashing and verification run on
//! the blocking pool so a slow cost factor never stalls the executor.
//! The built-in admin account is compared in constant time.
//!
//! Environment variables:
//! - `DISCIPLINE_ADMIN_USERNAME` (default: admin)
//! - `DISCIPLINE_ADMIN_PASSWORD` (default: admin)
//! - `DISCIPLINE_BCRYPT_COST` (default: bcrypt::DEFAULT_COST)

use subtle::ConstantTimeEq;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// Lowest cost bcrypt accepts. Only sensible for tests.
pub const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Password hashing failure
#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("password task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// bcrypt hasher with a fixed cost factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Cost is clamped into the range bcrypt accepts.
    pub fn new(cost: u32) -> Self {
        Self {
            cost: cost.clamp(MIN_BCRYPT_COST, MAX_BCRYPT_COST),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password with a fresh salt.
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hash)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

/// Check a plaintext password against a stored bcrypt hash.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordError> {
    let password = password.to_owned();
    let hash = hash.to_owned();
    let valid = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await??;
    Ok(valid)
}

/// Authentication settings
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub admin_username: String,
    pub admin_password: String,
    pub hasher: PasswordHasher,
}

impl AuthConfig {
    /// Create config from environment variables
    pub fn from_env() -> Self {
        let admin_username = std::env::var("DISCIPLINE_ADMIN_USERNAME")
            .unwrap_or_else(|_| DEFAULT_ADMIN_USERNAME.to_string());
        let admin_password = std::env::var("DISCIPLINE_ADMIN_PASSWORD")
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());

        let hasher = match std::env::var("DISCIPLINE_BCRYPT_COST") {
            Ok(raw) => match raw.parse::<u32>() {
                Ok(cost) => PasswordHasher::new(cost),
                Err(_) => {
                    tracing::warn!(value = %raw, "ignoring invalid DISCIPLINE_BCRYPT_COST");
                    PasswordHasher::default()
                }
            },
            Err(_) => PasswordHasher::default(),
        };

        Self {
            admin_username,
            admin_password,
            hasher,
        }
    }

    /// Default admin credentials with the given hasher (for testing)
    pub fn with_hasher(hasher: PasswordHasher) -> Self {
        Self {
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            hasher,
        }
    }

    /// True when the credentials match the built-in admin account.
    pub fn is_admin(&self, username: &str, password: &str) -> bool {
        let user_ok = username.as_bytes().ct_eq(self.admin_username.as_bytes());
        let pass_ok = password.as_bytes().ct_eq(self.admin_password.as_bytes());
        bool::from(user_ok & pass_ok)
    }
}
