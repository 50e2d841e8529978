use clap::Subcommand;
use clap::builder::NonEmptyStringValueParser;

/// Team commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TeamCommands {
    /// Select and persist a team for a project.
    Compose {
        /// Project (post) ID.
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        post: String,
        /// Number of members.
        #[arg(long)]
        count: u32,
    },
    /// Generate and store a skill-gap analysis for a team.
    Analyze {
        /// Team ID.
        id: String,
    },
    /// Show a stored team.
    Get {
        /// Team ID.
        id: String,
    },
    /// List every team composed for a project, oldest first.
    List {
        /// Project (post) ID.
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        post: String,
    },
}
