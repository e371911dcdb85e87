use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reelz")]
#[command(version)]
#[command(about = "Discover, search and bookmark movies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive browser (the default)
    Shell,

    /// Show popular movies
    #[command(alias = "d")]
    Discover,

    /// Search for movies
    #[command(alias = "s")]
    Search {
        /// Search text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List favorite movies
    #[command(alias = "fav")]
    Favorites,

    /// Add a movie to favorites, or remove it if already there
    #[command(alias = "t")]
    Toggle {
        /// Movie id
        id: i64,

        /// Also look for the id in the results of this search
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., source, api-url)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_is_none() {
        let cli = Cli::try_parse_from(["reelz"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn search_joins_words() {
        let cli = Cli::try_parse_from(["reelz", "search", "star", "wars"]).unwrap();
        match cli.command {
            Some(Commands::Search { query }) => assert_eq!(query.join(" "), "star wars"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn search_requires_a_query() {
        assert!(Cli::try_parse_from(["reelz", "search"]).is_err());
    }

    #[test]
    fn toggle_takes_id_and_optional_query() {
        let cli = Cli::try_parse_from(["reelz", "toggle", "8", "--query", "Batman"]).unwrap();
        match cli.command {
            Some(Commands::Toggle { id, query }) => {
                assert_eq!(id, 8);
                assert_eq!(query.as_deref(), Some("Batman"));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["reelz", "favorites", "--no-color", "-v"]).unwrap();
        assert!(cli.no_color);
        assert!(cli.verbose);
    }
}
