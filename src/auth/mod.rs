pub mod middleware;
pub mod password;
pub mod rate_limit;
pub mod token;
pub mod validate;

use token::AuthUser;

/// The dashboard login, built from configuration at startup. The password
/// is only kept as an argon2 hash.
#[derive(Debug, Clone)]
pub struct AdminAccount {
    pub username: String,
    pub password_hash: String,
}

impl AdminAccount {
    pub const ROLE: &'static str = "admin";

    pub fn new(username: &str, password: &str) -> Result<Self, crate::errors::AppError> {
        Ok(AdminAccount {
            username: username.trim().to_string(),
            password_hash: password::hash_password(password)?,
        })
    }

    /// The authenticated user, or `None` for a wrong username or password.
    pub fn verify(&self, username: &str, password: &str) -> Option<AuthUser> {
        // Always hash, whatever the username.
        let password_ok = password::verify_password(password, &self.password_hash);
        (username.trim() == self.username && password_ok).then(|| AuthUser {
            username: self.username.clone(),
            role: Self::ROLE.to_string(),
        })
    }
}
