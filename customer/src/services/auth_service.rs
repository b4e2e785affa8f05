// customer/src/services/auth_service.rs

//! Password hashing and verification for customer accounts.

use crate::errors::AppError;
use argon2::{
  password_hash::{
    rand_core::OsRng, // For generating random salts
    PasswordHash,
    PasswordHasher,
    PasswordVerifier,
    SaltString,
  },
  Argon2,
};
use tracing::{debug, instrument};

/// Hash a plain-text password with a fresh random salt. The returned PHC
/// string carries the salt and parameters.
#[instrument(name = "auth_service::hash_password", skip(password), err(Display))]
pub fn hash_password(password: &str) -> Result<String, AppError> {
  if password.is_empty() {
    return Err(AppError::Validation("Password cannot be empty.".to_string()));
  }

  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))
}

/// Verify a plain-text password against a stored PHC hash string.
///
/// A mismatch is `Ok(false)`; only a malformed stored hash or an internal
/// argon2 fault is an error.
#[instrument(name = "auth_service::verify_password", skip_all, err(Display))]
pub fn verify_password(stored_hash: &str, provided_password: &str) -> Result<bool, AppError> {
  let parsed_hash = PasswordHash::new(stored_hash)
    .map_err(|e| AppError::Internal(format!("Invalid stored password hash: {}", e)))?;

  match Argon2::default().verify_password(provided_password.as_bytes(), &parsed_hash) {
    Ok(()) => Ok(true),
    Err(argon2::password_hash::Error::Password) => {
      debug!("Password verification failed: passwords do not match.");
      Ok(false)
    }
    Err(e) => Err(AppError::Internal(format!(
      "Password verification failed: {}",
      e
    ))),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_hash_then_verify_roundtrips() {
    let hash = hash_password("hunter2!").expect("hashing should succeed");
    assert!(hash.starts_with("$argon2"));
    assert!(verify_password(&hash, "hunter2!").expect("verification should run"));
  }

  #[test]
  fn test_wrong_password_does_not_verify() {
    let hash = hash_password("hunter2!").expect("hashing should succeed");
    assert!(!verify_password(&hash, "hunter3!").expect("verification should run"));
  }

  #[test]
  fn test_empty_password_is_rejected() {
    assert!(hash_password("").is_err());
  }

  #[test]
  fn test_two_hashes_of_the_same_password_differ() {
    // Fresh salt each time.
    let first = hash_password("hunter2!").expect("hashing should succeed");
    let second = hash_password("hunter2!").expect("hashing should succeed");
    assert_ne!(first, second);
  }

  #[test]
  fn test_malformed_stored_hash_is_an_error() {
    assert!(verify_password("not-a-phc-string", "whatever").is_err());
  }
}
