use log::info;

use crate::config::AppConfig;
use crate::db;
use crate::error::CoreResult;

/// Delete every record with this `student_id` and return the count removed.
/// Zero is a normal outcome, not an error.
pub fn delete_records(config: &AppConfig, student_id: &str) -> CoreResult<usize> {
    let conn = db::open(config)?;
    let deleted = conn.execute("DELETE FROM ids WHERE student_id = ?1", [student_id])?;
    info!("deleted {deleted} record(s) for student id '{student_id}'");
    Ok(deleted)
}
