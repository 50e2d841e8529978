use clap::{Args, Subcommand};

use crate::cli::subcommands::{TagCommands, TeamCommands, UserCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Compose, analyze and inspect project teams.
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },
    /// Skill tags.
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },
    /// Candidate users.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Load tags, users and posts from a JSON file.
    Import(ImportArgs),
}

/// Arguments for `tfg import`.
#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// Path to a `{tags, users, posts}` JSON document.
    pub file: String,
}
