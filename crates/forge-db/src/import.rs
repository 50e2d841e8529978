//! Bulk import of reference data from a JSON document.
//!
//! The document mirrors the upstream collections:
//!
//! ```json
//! { "tags": [...], "users": [...], "posts": [...] }
//! ```
//!
//! Records are upserted by ID inside one transaction, so re-importing a file
//! is idempotent and a malformed record leaves the store untouched.

use forge_core::entities::{Project, Tag, User};
use forge_core::responses::ImportResponse;
use serde::{Deserialize, Serialize};

use crate::error::DatabaseError;
use crate::repos::project::write_project;
use crate::repos::tag::write_tag;
use crate::repos::user::write_user;
use crate::service::ForgeService;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub posts: Vec<Project>,
}

impl Dataset {
    /// Parse a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::InvalidState` if the JSON does not match the
    /// expected shape.
    pub fn from_json(text: &str) -> Result<Self, DatabaseError> {
        serde_json::from_str(text)
            .map_err(|e| DatabaseError::InvalidState(format!("invalid dataset: {e}")))
    }
}

fn count(len: usize) -> Result<u32, DatabaseError> {
    u32::try_from(len).map_err(|e| DatabaseError::InvalidState(format!("dataset too large: {e}")))
}

impl ForgeService {
    pub async fn import_dataset(&self, dataset: &Dataset) -> Result<ImportResponse, DatabaseError> {
        let _gate = self.write_gate().await;
        let tx = self.db().conn().transaction().await?;
        match write_all(&tx, dataset).await {
            Ok(()) => tx.commit().await?,
            Err(error) => {
                if let Err(rollback_error) = tx.rollback().await {
                    tracing::warn!(%rollback_error, "import rollback failed");
                }
                return Err(error);
            }
        }

        tracing::info!(
            tags = dataset.tags.len(),
            users = dataset.users.len(),
            posts = dataset.posts.len(),
            "dataset imported"
        );
        Ok(ImportResponse {
            tags: count(dataset.tags.len())?,
            users: count(dataset.users.len())?,
            posts: count(dataset.posts.len())?,
        })
    }
}

async fn write_all(conn: &libsql::Connection, dataset: &Dataset) -> Result<(), DatabaseError> {
    for tag in &dataset.tags {
        write_tag(conn, tag).await?;
    }
    for user in &dataset.users {
        write_user(conn, user).await?;
    }
    for post in &dataset.posts {
        write_project(conn, post).await?;
    }
    Ok(())
}
