//! Service layer owning the database handle.
//!
//! All repository methods are implemented as `impl ForgeService` blocks in
//! [`crate::repos`].
//!
//! Every repository call shares one libSQL connection, and a transaction on
//! that connection captures whatever else runs on it. Writers therefore hold
//! the write side of `gate` from `BEGIN` to `COMMIT`/`ROLLBACK`, and readers
//! hold the read side so they never observe a half-written team.

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::ForgeDb;
use crate::error::DatabaseError;

pub struct ForgeService {
    db: ForgeDb,
    gate: RwLock<()>,
}

impl ForgeService {
    /// Open a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ForgeDb::open_local(db_path).await?;
        Ok(Self {
            db,
            gate: RwLock::new(()),
        })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ForgeDb {
        &self.db
    }

    pub(crate) async fn read_gate(&self) -> RwLockReadGuard<'_, ()> {
        self.gate.read().await
    }

    /// Exclusive access to the connection, held for a whole transaction.
    pub(crate) async fn write_gate(&self) -> RwLockWriteGuard<'_, ()> {
        self.gate.write().await
    }
}
