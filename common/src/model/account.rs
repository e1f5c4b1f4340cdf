use serde::{Deserialize, Serialize};

/// A row of the `users` table. The password is stored as an Argon2id PHC
/// string, never as plaintext; accounts are created at signup and only ever
/// read back for login verification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}
