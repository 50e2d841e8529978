//! Tag repository: upsert, fetch and name search.

use forge_core::entities::Tag;

use crate::error::DatabaseError;
use crate::helpers::get_opt_string;
use crate::service::ForgeService;

const SELECT_COLS: &str = "id, name, category_id";

fn row_to_tag(row: &libsql::Row) -> Result<Tag, DatabaseError> {
    Ok(Tag {
        id: row.get(0)?,
        name: row.get(1)?,
        category_id: get_opt_string(row, 2)?,
    })
}

pub(crate) async fn write_tag(conn: &libsql::Connection, tag: &Tag) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO tags (id, name, category_id) VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET name = ?2, category_id = ?3",
        libsql::params![tag.id.as_str(), tag.name.as_str(), tag.category_id.as_deref()],
    )
    .await?;
    Ok(())
}

impl ForgeService {
    pub async fn upsert_tag(&self, tag: &Tag) -> Result<(), DatabaseError> {
        let _gate = self.write_gate().await;
        write_tag(self.db().conn(), tag).await
    }

    pub async fn get_tag(&self, id: &str) -> Result<Option<Tag>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM tags WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_tag(&row)?)),
            None => Ok(None),
        }
    }

    pub async fn list_tags(&self) -> Result<Vec<Tag>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM tags ORDER BY id"), ())
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_tag(&row)?);
        }
        Ok(results)
    }

    /// Case-insensitive substring match on tag name. Unranked, in id order.
    ///
    /// Scans every tag; the tag table is small reference data.
    pub async fn search_tags(&self, query: &str) -> Result<Vec<Tag>, DatabaseError> {
        let needle = query.to_lowercase();
        let tags = self.list_tags().await?;
        Ok(tags
            .into_iter()
            .filter(|tag| tag.name.to_lowercase().contains(&needle))
            .collect())
    }
}
