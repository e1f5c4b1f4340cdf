use eduid_common::model::account::Account;
use rusqlite::OptionalExtension;

use super::password::verify_password;
use crate::config::AppConfig;
use crate::db;
use crate::error::CoreResult;

/// Check a username/password pair against the store. Unknown usernames and
/// wrong passwords both come back as `Ok(false)`; the caller cannot tell the
/// two apart.
pub fn verify_login(config: &AppConfig, username: &str, password: &str) -> CoreResult<bool> {
    let conn = db::open(config)?;
    let account = conn
        .query_row(
            "SELECT id, username, email, password FROM users WHERE username = ?1",
            [username],
            |row| {
                Ok(Account {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    email: row.get(2)?,
                    password_hash: row.get(3)?,
                })
            },
        )
        .optional()?;

    match account {
        Some(account) => verify_password(password, &account.password_hash),
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::super::create_account;
    use super::*;

    #[test]
    fn login_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            db_path: dir.path().join("login.db"),
            ..AppConfig::default()
        };
        create_account(&config, "ada", "ada@example.com", "s3cret-enough").unwrap();

        assert!(verify_login(&config, "ada", "s3cret-enough").unwrap());
        assert!(!verify_login(&config, "ada", "wrong").unwrap());
        assert!(!verify_login(&config, "nobody", "s3cret-enough").unwrap());
    }
}
