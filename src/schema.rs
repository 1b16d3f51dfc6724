//! Bootstrap of the `parcel` table.
//!
//! This only creates what is missing. There is no versioning or migration.

use rusqlite::Connection;

use crate::error::Result;

pub const PARCEL_TABLE: &str = "parcel";

const CREATE_PARCEL_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS parcel (
        number INTEGER PRIMARY KEY AUTOINCREMENT,
        client INTEGER NOT NULL,
        status TEXT NOT NULL,
        address TEXT NOT NULL,
        created_at TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_parcel_client ON parcel(client);
"#;

/// Create the `parcel` table and its client index if they do not exist.
pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch(CREATE_PARCEL_TABLE)?;
    tracing::info!(table = PARCEL_TABLE, "parcel schema ready");
    Ok(())
}
