//! # godb-db
//!
//! libSQL store for a built ontology.
//!
//! [`rows`] shapes terms, synonyms, edges and closure pairs into table rows,
//! [`GoDb::write_build`] inserts them in one transaction, and
//! [`write_staged`] wraps the whole load so the output path only ever holds a
//! complete store.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) in local mode.

pub mod error;
mod migrations;
pub mod rows;
pub mod staging;
pub mod writer;

use std::path::Path;

use error::DatabaseError;
use libsql::Builder;

pub use staging::{StagedStore, write_staged};
pub use writer::WriteSummary;

/// Handle on one store database.
pub struct GoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl GoDb {
    /// Open (or create) a local database and apply the schema.
    ///
    /// Foreign keys stay off: parents and offspring reference terms loaded in
    /// the same run, and unknown-namespace terms use a label that is not in
    /// `go_ontology`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: impl AsRef<Path>) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path.as_ref()).build().await?;
        let conn = db.connect()?;

        conn.execute("PRAGMA foreign_keys = OFF", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let go_db = Self { db, conn };
        go_db.run_migrations().await?;
        Ok(go_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// `SELECT COUNT(*)` of one table.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn row_count(&self, table: &str) -> Result<u64, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT COUNT(*) FROM {table}"), ())
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<i64>(0)?.unsigned_abs())
    }
}
