use std::fmt;

use argon2::{
    password_hash::{self, PasswordHash, PasswordVerifier},
    Argon2,
};
use tokio::task::{self, JoinError};

#[derive(Debug)]
pub enum HasherError {
    Hash(password_hash::Error),
    Join(JoinError),
}

impl fmt::Display for HasherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hash(e) => write!(f, "password hash error: {}", e),
            Self::Join(e) => write!(f, "hasher task failed: {}", e),
        }
    }
}

impl From<password_hash::Error> for HasherError {
    fn from(e: password_hash::Error) -> Self {
        Self::Hash(e)
    }
}

impl From<JoinError> for HasherError {
    fn from(e: JoinError) -> Self {
        Self::Join(e)
    }
}

/// Returns `Ok(false)` on a mismatch; errors are reserved for malformed hashes.
pub async fn verify(password: String, hash: String) -> Result<bool, HasherError> {
    task::spawn_blocking(move || -> Result<_, HasherError> {
        let parsed_hash = PasswordHash::new(&hash)?;

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(HasherError::Hash(e)),
        }
    })
    .await?
}

#[cfg(test)]
pub async fn hash(password: String) -> Result<String, HasherError> {
    use argon2::password_hash::{PasswordHasher, SaltString};
    use rand::rngs::OsRng;

    task::spawn_blocking(move || -> Result<_, HasherError> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default().hash_password(password.as_bytes(), &salt)?;

        Ok(hash.to_string())
    })
    .await?
}
