//! # Reelz CLI
//!
//! The binary is intentionally thin: the terminal client lives in `src/reelz/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! reelz                      interactive browser (Discover tab first)
//! reelz discover             popular movies
//! reelz search <words>       search results
//! reelz favorites            bookmarked movies
//! reelz toggle <id> [-q Q]   bookmark / unbookmark a movie
//! reelz config [key] [value] show or change configuration
//! ```
//!
//! Data lives in the platform data directory, or in `$REELZ_HOME` when set. Logging
//! goes to stderr; `--verbose` or `RUST_LOG` turn it up.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
