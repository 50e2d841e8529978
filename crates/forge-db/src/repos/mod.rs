//! Repository modules. Each adds methods to `ForgeService` via `impl ForgeService`.

pub mod project;
pub mod tag;
pub mod team;
pub mod user;
