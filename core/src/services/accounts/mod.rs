//! Account signup and login.
//!
//! Passwords are hashed with Argon2id and a per-account random salt; the PHC
//! string (algorithm, parameters, salt, digest) is what the `users` table
//! stores. Verification therefore takes the plaintext password, not a
//! precomputed hash.

mod create;
mod login;
mod password;

pub use create::create_account;
pub use login::verify_login;
