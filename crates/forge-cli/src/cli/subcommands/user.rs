use clap::Subcommand;

/// User commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// List every user in the candidate pool.
    List,
    /// Show one user.
    Get { id: String },
}
