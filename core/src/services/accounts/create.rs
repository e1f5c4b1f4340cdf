use log::info;
use regex::Regex;
use rusqlite::params;

use super::password::hash_password;
use crate::config::AppConfig;
use crate::db;
use crate::error::{CoreError, CoreResult};

/// Accepts the same shapes the original form accepted: something before an
/// `@`, something after it, and a dot in the domain part.
const EMAIL_PATTERN: &str = r"^[^@]+@[^@]+\.[^@]+$";

/// Create a new account.
///
/// All three fields must be non-empty and the email must look like an email;
/// otherwise the call fails with `Validation` before touching the database.
/// A taken username surfaces as `DuplicateUsername` and leaves the existing
/// account untouched.
pub fn create_account(
    config: &AppConfig,
    username: &str,
    email: &str,
    password: &str,
) -> CoreResult<()> {
    if username.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(CoreError::Validation("all fields are required".to_string()));
    }
    let email_re = Regex::new(EMAIL_PATTERN)
        .map_err(|e| CoreError::Internal(format!("bad email pattern: {e}")))?;
    if !email_re.is_match(email) {
        return Err(CoreError::Validation(format!("invalid email: {email}")));
    }

    let hash = hash_password(password)?;
    let conn = db::open(config)?;
    let result = conn.execute(
        "INSERT INTO users(username, email, password) VALUES (?1, ?2, ?3)",
        params![username, email, hash],
    );

    match result {
        Ok(_) => {
            info!("account created for '{username}'");
            Ok(())
        }
        Err(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            Err(CoreError::DuplicateUsername(username.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}
