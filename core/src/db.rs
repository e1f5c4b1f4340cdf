//! SQLite access. Services open a fresh connection per operation; the schema
//! is created on every open so first touch initialises the database.

use crate::config::AppConfig;
use crate::error::CoreResult;
use rusqlite::Connection;

/// Open the configured database and make sure the schema exists.
pub fn open(config: &AppConfig) -> CoreResult<Connection> {
    let conn = Connection::open(&config.db_path)?;
    init(&conn)?;
    Ok(conn)
}

/// Create the two tables if missing. Idempotent.
///
/// `ids.student_id` deliberately carries no UNIQUE constraint: several saved
/// records may share a student id, and delete-by-id removes all of them.
pub fn init(conn: &Connection) -> CoreResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE,
            email TEXT,
            password TEXT)",
        [],
    )?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS ids(
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            student_id TEXT,
            course TEXT,
            year TEXT,
            department TEXT,
            phone TEXT,
            email TEXT,
            pdf_path TEXT)",
        [],
    )?;
    Ok(())
}
