//! Data access for the `parcel` table.
//!
//! Updates and deletes do not look at the affected-row count: touching a
//! number that does not exist is reported as success.

use rusqlite::{params, Connection, Row};

use crate::error::Result;
use crate::parcel::{Parcel, ParcelStatus};

const SELECT_COLUMNS: &str = "SELECT number, client, status, address, created_at FROM parcel";

/// CRUD over parcels, borrowing a connection opened elsewhere.
#[derive(Debug, Clone, Copy)]
pub struct ParcelStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> ParcelStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Insert `parcel` and return the number the store assigned to it.
    ///
    /// `parcel.number` is ignored.
    pub fn add(&self, parcel: &Parcel) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO parcel (client, status, address, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                parcel.client,
                parcel.status,
                parcel.address,
                parcel.created_at
            ],
        )?;
        let number = self.conn.last_insert_rowid();
        tracing::debug!(number, client = parcel.client, "parcel added");
        Ok(number)
    }

    /// Fetch the parcel with `number`. A missing row is an error.
    pub fn get(&self, number: i64) -> Result<Parcel> {
        let parcel = self.conn.query_row(
            &format!("{SELECT_COLUMNS} WHERE number = ?1"),
            [number],
            parcel_from_row,
        )?;
        Ok(parcel)
    }

    /// All parcels belonging to `client`, in no guaranteed order.
    pub fn get_by_client(&self, client: i64) -> Result<Vec<Parcel>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SELECT_COLUMNS} WHERE client = ?1"))?;
        let rows = stmt.query_map([client], parcel_from_row)?;
        let mut parcels = Vec::new();
        for row in rows {
            parcels.push(row?);
        }
        tracing::debug!(client, count = parcels.len(), "parcels fetched by client");
        Ok(parcels)
    }

    pub fn set_address(&self, number: i64, address: &str) -> Result<()> {
        self.conn.execute(
            "UPDATE parcel SET address = ?1 WHERE number = ?2",
            params![address, number],
        )?;
        tracing::debug!(number, "parcel address set");
        Ok(())
    }

    pub fn set_status(&self, number: i64, status: ParcelStatus) -> Result<()> {
        self.conn.execute(
            "UPDATE parcel SET status = ?1 WHERE number = ?2",
            params![status, number],
        )?;
        tracing::debug!(number, %status, "parcel status set");
        Ok(())
    }

    pub fn delete(&self, number: i64) -> Result<()> {
        self.conn
            .execute("DELETE FROM parcel WHERE number = ?1", [number])?;
        tracing::debug!(number, "parcel deleted");
        Ok(())
    }
}

fn parcel_from_row(row: &Row<'_>) -> rusqlite::Result<Parcel> {
    Ok(Parcel {
        number: row.get(0)?,
        client: row.get(1)?,
        status: row.get(2)?,
        address: row.get(3)?,
        created_at: row.get(4)?,
    })
}
