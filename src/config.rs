use rusqlite::Connection;

use crate::error::Result;
use crate::schema;

/// Environment variable consulted by [`TrackerConfig::from_env`].
pub const DB_PATH_ENV: &str = "PARCEL_TRACKER_DB";

/// Database file used when nothing else is configured.
pub const DEFAULT_DB_PATH: &str = "tracker.db";

const IN_MEMORY: &str = ":memory:";

/// Where the parcel database lives and how to prepare it on open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Path to the SQLite database file, or `:memory:`
    pub db_path: String,
    /// Create the `parcel` table on open if it is missing
    pub initialize_schema: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DB_PATH)
    }
}

impl TrackerConfig {
    /// Config for a file path, with schema init enabled
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
            initialize_schema: true,
        }
    }

    /// Config for a private in-memory database
    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY)
    }

    /// Read the path from `PARCEL_TRACKER_DB`, falling back to `tracker.db`
    /// when the variable is unset, empty or blank.
    pub fn from_env() -> Self {
        Self::from_env_var(DB_PATH_ENV)
    }

    fn from_env_var(name: &str) -> Self {
        match std::env::var(name) {
            Ok(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self::default(),
        }
    }

    pub fn with_schema_init(mut self, initialize_schema: bool) -> Self {
        self.initialize_schema = initialize_schema;
        self
    }

    /// Open a connection according to this config. The caller owns it.
    pub fn open(&self) -> Result<Connection> {
        tracing::info!(path = %self.db_path, "opening parcel database");
        let conn = Connection::open(&self.db_path)?;
        if self.initialize_schema {
            schema::initialize(&conn)?;
        }
        Ok(conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_tracker_db() {
        let config = TrackerConfig::default();
        assert_eq!(config.db_path, "tracker.db");
        assert!(config.initialize_schema);
    }

    #[test]
    fn in_memory_open_creates_schema() {
        let conn = TrackerConfig::in_memory().open().unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM parcel", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn schema_init_can_be_skipped() {
        let conn = TrackerConfig::in_memory()
            .with_schema_init(false)
            .open()
            .unwrap();
        assert!(conn
            .query_row("SELECT COUNT(*) FROM parcel", [], |row| row.get::<_, i64>(0))
            .is_err());
    }

    #[test]
    fn explicit_memory_path_opens_in_memory() {
        let first = TrackerConfig::new(":memory:").open().unwrap();
        first
            .execute(
                "INSERT INTO parcel (client, status, address, created_at) VALUES (1, 'sent', 'x', 'y')",
                [],
            )
            .unwrap();
        // a second connection sees its own private database
        let second = TrackerConfig::new(":memory:").open().unwrap();
        let count: i64 = second
            .query_row("SELECT COUNT(*) FROM parcel", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn from_env_reads_path_from_variable() {
        let name = "PARCEL_TRACKER_DB_TEST_SET";
        std::env::set_var(name, "/tmp/parcels.db");
        let config = TrackerConfig::from_env_var(name);
        std::env::remove_var(name);
        assert_eq!(config.db_path, "/tmp/parcels.db");
        assert!(config.initialize_schema);
    }

    #[test]
    fn from_env_treats_blank_value_as_unset() {
        let name = "PARCEL_TRACKER_DB_TEST_BLANK";
        std::env::set_var(name, "  ");
        let config = TrackerConfig::from_env_var(name);
        std::env::remove_var(name);
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn from_env_without_variable_uses_default() {
        let config = TrackerConfig::from_env_var("PARCEL_TRACKER_DB_TEST_UNSET");
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
    }
}
