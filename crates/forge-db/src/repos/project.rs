//! Project post repository.

use forge_core::entities::Project;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_json_list, to_json_text};
use crate::service::ForgeService;

fn row_to_project(row: &libsql::Row) -> Result<Project, DatabaseError> {
    Ok(Project {
        id: row.get(0)?,
        title: get_opt_string(row, 1)?,
        requirements: parse_json_list(get_opt_string(row, 2)?.as_deref())?,
    })
}

pub(crate) async fn write_project(
    conn: &libsql::Connection,
    project: &Project,
) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO posts (id, title, requirements) VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET title = ?2, requirements = ?3",
        libsql::params![
            project.id.as_str(),
            project.title.as_deref(),
            to_json_text(&project.requirements)?
        ],
    )
    .await?;
    Ok(())
}

impl ForgeService {
    pub async fn upsert_project(&self, project: &Project) -> Result<(), DatabaseError> {
        let _gate = self.write_gate().await;
        write_project(self.db().conn(), project).await
    }

    pub async fn get_project(&self, id: &str) -> Result<Option<Project>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, title, requirements FROM posts WHERE id = ?1", [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_project(&row)?)),
            None => Ok(None),
        }
    }
}
