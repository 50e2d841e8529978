//! # forge-db
//!
//! libSQL persistence for TeamForge.
//!
//! Holds the imported reference data (tags, users, project posts) and the
//! teams produced by the engine. [`service::ForgeService`] implements
//! [`forge_core::ports::TeamStore`] so the engine never sees SQL.

pub mod error;
pub mod helpers;
pub mod import;
mod migrations;
pub mod repos;
pub mod service;
mod store;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
pub struct ForgeDb {
    // Owns the file handle behind `conn`.
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ForgeDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Fails if the database cannot be opened or the schema cannot be applied.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // team_members.team_id relies on this; it is off by default per connection.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let forge_db = Self { db, conn };
        forge_db.run_migrations().await?;
        Ok(forge_db)
    }

    /// Connection shared by every repository method.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// New random ID of the form `"{prefix}-xxxxxxxx"`, e.g. `"tm-a3f8b2c1"`.
    ///
    /// # Errors
    ///
    /// Fails if libSQL cannot evaluate `randomblob`.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(4)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}
