//! User repository (the candidate pool).

use forge_core::entities::User;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_json_list, to_json_text};
use crate::service::ForgeService;

const SELECT_COLS: &str = "id, name, email, skill_tags, major_id, dev_tags, courses_id";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        skill_tags: parse_json_list(get_opt_string(row, 3)?.as_deref())?,
        major_id: get_opt_string(row, 4)?,
        dev_tags: parse_json_list(get_opt_string(row, 5)?.as_deref())?,
        courses_id: parse_json_list(get_opt_string(row, 6)?.as_deref())?,
    })
}

pub(crate) async fn write_user(conn: &libsql::Connection, user: &User) -> Result<(), DatabaseError> {
    conn.execute(
        &format!(
            "INSERT INTO users ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
               name = ?2, email = ?3, skill_tags = ?4, major_id = ?5,
               dev_tags = ?6, courses_id = ?7"
        ),
        libsql::params![
            user.id.as_str(),
            user.name.as_str(),
            user.email.as_str(),
            to_json_text(&user.skill_tags)?,
            user.major_id.as_deref(),
            to_json_text(&user.dev_tags)?,
            to_json_text(&user.courses_id)?
        ],
    )
    .await?;
    Ok(())
}

impl ForgeService {
    pub async fn upsert_user(&self, user: &User) -> Result<(), DatabaseError> {
        let _gate = self.write_gate().await;
        write_user(self.db().conn(), user).await
    }

    pub async fn get_user(&self, id: &str) -> Result<Option<User>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// Every user, in id order.
    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users ORDER BY id"), ())
            .await?;
        let mut results = Vec::new();
        while let Some(row) = rows.next().await? {
            results.push(row_to_user(&row)?);
        }
        Ok(results)
    }
}
