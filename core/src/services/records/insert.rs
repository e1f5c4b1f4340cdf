use eduid_common::model::card::CardRecord;
use rusqlite::params;

use crate::config::AppConfig;
use crate::db;
use crate::error::CoreResult;

/// Insert one record and return its rowid. Records are append-only.
pub fn insert_record(config: &AppConfig, record: &CardRecord) -> CoreResult<i64> {
    let conn = db::open(config)?;
    conn.execute(
        "INSERT INTO ids(name, student_id, course, year, department, phone, email, pdf_path)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            record.name,
            record.student_id,
            record.course,
            record.year,
            record.department,
            record.phone,
            record.email,
            record.pdf_path,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}
