//! # Service Modules
//!
//! Each feature lives in its own sub-module with one operation per file,
//! mirroring how the presentation shell invokes them:
//!
//! - `accounts`: signup and login against the `users` table.
//! - `cards`: the card pipeline: compositing, QR payload resolution,
//!   generation and PDF export.
//! - `records`: CRUD over saved card rows in the `ids` table.

pub mod accounts;
pub mod cards;
pub mod records;
