mod tag;
mod team;
mod user;

pub use tag::TagCommands;
pub use team::TeamCommands;
pub use user::UserCommands;
