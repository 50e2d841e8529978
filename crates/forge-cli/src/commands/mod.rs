pub mod dispatch;
pub mod import;
pub mod tag;
pub mod team;
pub mod user;
