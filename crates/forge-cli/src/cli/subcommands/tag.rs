use clap::Subcommand;
use clap::builder::NonEmptyStringValueParser;

/// Tag commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TagCommands {
    /// Case-insensitive substring search on tag names.
    Search {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        query: String,
    },
}
