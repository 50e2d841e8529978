//! Entity structs for all TeamForge domain objects.
//!
//! Each entity maps to a table in the libSQL database. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` so store documents are shaped
//! into explicit types at the boundary.

mod project;
mod tag;
mod team;
mod user;

pub use project::Project;
pub use tag::Tag;
pub use team::{NewTeam, Team, TeamMember};
pub use user::{SkillTag, User};
