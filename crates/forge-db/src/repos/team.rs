//! Team repository: atomic creation, member snapshots, analysis updates.

use forge_core::entities::{NewTeam, Team, TeamMember};
use forge_core::ids::PREFIX_TEAM;
use forge_core::ports::TeamAnalysisUpdate;

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_json_list, parse_optional_datetime, to_json_text};
use crate::service::ForgeService;

const SELECT_COLS: &str = "id, post_id, project_name, required_tag_ids, member_count, \
                           created_at, ai_analysis, ai_analyzed_at";

fn row_to_team(row: &libsql::Row, members: Vec<TeamMember>) -> Result<Team, DatabaseError> {
    let member_count = u32::try_from(row.get::<i64>(4)?)
        .map_err(|e| DatabaseError::InvalidState(format!("member_count out of range: {e}")))?;
    Ok(Team {
        id: row.get(0)?,
        post_id: row.get(1)?,
        project_name: row.get(2)?,
        required_tag_ids: parse_json_list(get_opt_string(row, 3)?.as_deref())?,
        member_count,
        members,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
        ai_analysis: get_opt_string(row, 6)?,
        ai_analyzed_at: parse_optional_datetime(get_opt_string(row, 7)?.as_deref())?,
    })
}

fn row_to_member(row: &libsql::Row) -> Result<TeamMember, DatabaseError> {
    Ok(TeamMember {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        skill_tags: parse_json_list(get_opt_string(row, 3)?.as_deref())?,
    })
}

/// Member snapshots in selection order.
async fn load_members(
    conn: &libsql::Connection,
    team_id: &str,
) -> Result<Vec<TeamMember>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT user_id, name, email, skill_tags FROM team_members
             WHERE team_id = ?1 ORDER BY position",
            [team_id],
        )
        .await?;
    let mut members = Vec::new();
    while let Some(row) = rows.next().await? {
        members.push(row_to_member(&row)?);
    }
    Ok(members)
}

async fn insert_team_rows(
    conn: &libsql::Connection,
    id: &str,
    new_team: &NewTeam,
) -> Result<(), DatabaseError> {
    conn.execute(
        &format!("INSERT INTO teams ({SELECT_COLS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL, NULL)"),
        libsql::params![
            id,
            new_team.post_id.as_str(),
            new_team.project_name.as_str(),
            to_json_text(&new_team.required_tag_ids)?,
            i64::from(new_team.member_count),
            new_team.created_at.to_rfc3339()
        ],
    )
    .await?;

    for (position, member) in new_team.members.iter().enumerate() {
        let position = i64::try_from(position)
            .map_err(|e| DatabaseError::InvalidState(format!("member position: {e}")))?;
        conn.execute(
            "INSERT INTO team_members (team_id, position, user_id, name, email, skill_tags)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            libsql::params![
                id,
                position,
                member.id.as_str(),
                member.name.as_str(),
                member.email.as_str(),
                to_json_text(&member.skill_tags)?
            ],
        )
        .await?;
    }
    Ok(())
}

impl ForgeService {
    /// Insert the team row and all member rows in one transaction.
    ///
    /// Either the whole team is stored or nothing is; a failure midway rolls
    /// the transaction back.
    pub async fn create_team(&self, new_team: NewTeam) -> Result<Team, DatabaseError> {
        if new_team.members.len() != new_team.member_count as usize {
            return Err(DatabaseError::InvalidState(format!(
                "team has {} members but member_count is {}",
                new_team.members.len(),
                new_team.member_count
            )));
        }

        let _gate = self.write_gate().await;
        let id = self.db().generate_id(PREFIX_TEAM).await?;
        let tx = self.db().conn().transaction().await?;

        if let Err(error) = insert_team_rows(&tx, &id, &new_team).await {
            if let Err(rollback_error) = tx.rollback().await {
                tracing::warn!(team_id = %id, %rollback_error, "team insert rollback failed");
            }
            return Err(error);
        }
        tx.commit().await?;
        tracing::debug!(team_id = %id, post_id = %new_team.post_id, "team persisted");

        Ok(new_team.into_team(id))
    }

    pub async fn get_team(&self, id: &str) -> Result<Option<Team>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM teams WHERE id = ?1"), [id])
            .await?;
        let Some(row) = rows.next().await? else {
            return Ok(None);
        };
        let members = load_members(self.db().conn(), id).await?;
        Ok(Some(row_to_team(&row, members)?))
    }

    /// All teams assembled for a project, oldest first.
    pub async fn list_teams_for_post(&self, post_id: &str) -> Result<Vec<Team>, DatabaseError> {
        let _gate = self.read_gate().await;
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM teams WHERE post_id = ?1 ORDER BY created_at, id"),
                [post_id],
            )
            .await?;
        let mut teams = Vec::new();
        while let Some(row) = rows.next().await? {
            let team_id: String = row.get(0)?;
            let members = load_members(self.db().conn(), &team_id).await?;
            teams.push(row_to_team(&row, members)?);
        }
        Ok(teams)
    }

    /// Overwrite both analysis fields in a single statement.
    ///
    /// Returns `DatabaseError::NoResult` if no team has this ID.
    pub async fn update_team_analysis(
        &self,
        id: &str,
        update: &TeamAnalysisUpdate,
    ) -> Result<(), DatabaseError> {
        let _gate = self.write_gate().await;
        let changed = self
            .db()
            .conn()
            .execute(
                "UPDATE teams SET ai_analysis = ?1, ai_analyzed_at = ?2 WHERE id = ?3",
                libsql::params![
                    update.ai_analysis.as_str(),
                    update.ai_analyzed_at.to_rfc3339(),
                    id
                ],
            )
            .await?;
        if changed == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }
}
