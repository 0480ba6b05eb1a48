use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashdeck", version)]
#[command(about = "Spaced-repetition flashcards for the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding decks, review history and config (overrides FLASHDECK_HOME)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (overrides FLASHDECK_LOG)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List decks with their due counts
    #[command(alias = "ls")]
    Decks,

    /// List the cards of a deck
    Cards {
        /// Deck index, name or id
        deck: String,
    },

    /// Review the due cards of a deck
    #[command(alias = "r")]
    Review {
        /// Deck index, name or id
        deck: String,
    },

    /// Show review statistics
    Stats {
        /// Number of days of history (defaults to the stats-days setting)
        #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..=365))]
        days: Option<u64>,
    },

    /// Import decks from JSON files or directories
    Import {
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., stats-days)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store
    Init,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["flashdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn review_alias_and_globals() {
        let cli = Cli::try_parse_from([
            "flashdeck",
            "r",
            "Kanji",
            "--data-dir",
            "/tmp/fd",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert!(matches!(cli.command, Some(Commands::Review { ref deck }) if deck == "Kanji"));
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/fd")));
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }

    #[test]
    fn stats_days_are_bounded() {
        let cli = Cli::try_parse_from(["flashdeck", "stats", "-d", "30"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Stats { days: Some(30) })));
        assert!(Cli::try_parse_from(["flashdeck", "stats", "--days", "0"]).is_err());
        assert!(Cli::try_parse_from(["flashdeck", "stats", "--days", "200000000"]).is_err());
    }

    #[test]
    fn import_requires_paths() {
        assert!(Cli::try_parse_from(["flashdeck", "import"]).is_err());
    }
}
