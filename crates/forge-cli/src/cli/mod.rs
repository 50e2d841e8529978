use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `tfg` binary.
#[derive(Debug, Parser)]
#[command(name = "tfg", version, about = "TeamForge - skill-based project team composition")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (overrides `database.path`)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::{TagCommands, TeamCommands, UserCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn compose_parses_post_and_count() {
        let cli = Cli::try_parse_from(["tfg", "team", "compose", "--post", "P1", "--count", "3"])
            .expect("cli should parse");
        match cli.command {
            Commands::Team {
                action: TeamCommands::Compose { post, count },
            } => {
                assert_eq!(post, "P1");
                assert_eq!(count, 3);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn compose_rejects_non_numeric_count() {
        let parsed =
            Cli::try_parse_from(["tfg", "team", "compose", "--post", "P1", "--count", "three"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn compose_rejects_negative_count() {
        let parsed =
            Cli::try_parse_from(["tfg", "team", "compose", "--post", "P1", "--count", "-2"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn tag_search_rejects_empty_query() {
        let parsed = Cli::try_parse_from(["tfg", "tag", "search", ""]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "tfg", "user", "list", "--format", "raw", "--quiet", "--db", "/tmp/t.db",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::User {
                action: UserCommands::List
            }
        ));
        assert_eq!(cli.global_flags().db.as_deref(), Some("/tmp/t.db"));
    }

    #[test]
    fn output_format_rejects_table() {
        let parsed = Cli::try_parse_from(["tfg", "--format", "table", "user", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn analyze_takes_positional_id() {
        let cli = Cli::try_parse_from(["tfg", "-v", "team", "analyze", "tm-1a2b3c4d"])
            .expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Team { action: TeamCommands::Analyze { ref id } } if id == "tm-1a2b3c4d"
        ));
    }

    #[test]
    fn team_list_requires_post() {
        assert!(Cli::try_parse_from(["tfg", "team", "list"]).is_err());
        let cli = Cli::try_parse_from(["tfg", "team", "list", "--post", "P1"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Team { action: TeamCommands::List { ref post } } if post == "P1"
        ));
    }

    #[test]
    fn import_takes_file_path() {
        let cli = Cli::try_parse_from(["tfg", "import", "seed.json"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Import(ref args) if args.file == "seed.json"));
    }

    #[test]
    fn tag_search_keeps_query() {
        let cli = Cli::try_parse_from(["tfg", "tag", "search", "rust"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Tag { action: TagCommands::Search { ref query } } if query == "rust"
        ));
    }
}
