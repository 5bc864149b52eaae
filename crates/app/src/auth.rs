//! Password hashing and login.
//!
//! Credentials are stored as Argon2id PHC strings; the engine only sees the
//! resulting string.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use engine::{Engine, User};
use tracing::debug;

use crate::error::AppError;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Hash(e.to_string()))
}

pub fn verify_password(password: &str, stored: &str) -> bool {
    PasswordHash::new(stored)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

/// Resolves `username` and checks `password`. Unknown users and wrong
/// passwords fail the same way.
pub async fn login(engine: &Engine, username: &str, password: &str) -> Result<User, AppError> {
    let Some(user) = engine.user_by_username(username).await? else {
        debug!("login failed: unknown user {username}");
        return Err(AppError::LoginFailed);
    };
    if !verify_password(password, &user.password_hash) {
        debug!("login failed: wrong password for {username}");
        return Err(AppError::LoginFailed);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() {
        let hash = hash_password("testpass").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("testpass", &hash));
        assert!(!verify_password("wrongpass", &hash));
    }

    #[test]
    fn same_password_gets_distinct_salts() {
        assert_ne!(
            hash_password("testpass").unwrap(),
            hash_password("testpass").unwrap()
        );
    }

    #[test]
    fn garbage_hash_never_verifies() {
        assert!(!verify_password("testpass", "not-a-phc-string"));
    }
}
