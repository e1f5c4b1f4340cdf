use eduid_common::model::card::CardRecord;
use rusqlite::{params, Row};

use crate::config::AppConfig;
use crate::db;
use crate::error::CoreResult;

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<CardRecord> {
    Ok(CardRecord {
        id: row.get(0)?,
        name: row.get(1)?,
        student_id: row.get(2)?,
        course: row.get(3)?,
        year: row.get(4)?,
        department: row.get(5)?,
        phone: row.get(6)?,
        email: row.get(7)?,
        pdf_path: row.get(8)?,
    })
}

/// All records, or only those whose `student_id` matches `filter` exactly.
pub fn list_records(config: &AppConfig, filter: Option<&str>) -> CoreResult<Vec<CardRecord>> {
    const COLUMNS: &str = "id, name, student_id, course, year, department, phone, email, pdf_path";

    let conn = db::open(config)?;
    let records = match filter {
        Some(student_id) => {
            let mut stmt = conn.prepare(&format!(
                "SELECT {COLUMNS} FROM ids WHERE student_id = ?1"
            ))?;
            let rows = stmt.query_map(params![student_id], record_from_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        }
        None => {
            let mut stmt = conn.prepare(&format!("SELECT {COLUMNS} FROM ids"))?;
            let rows = stmt.query_map([], record_from_row)?;
            rows.collect::<rusqlite::Result<Vec<_>>>()?
        }
    };
    Ok(records)
}
