//! Saved-card records: insert, list/search, delete.
//!
//! `student_id` is the natural key but is not unique; delete removes every
//! row carrying the id and reports how many went.

mod delete;
mod insert;
mod list;

pub use delete::delete_records;
pub use insert::insert_record;
pub use list::list_records;
