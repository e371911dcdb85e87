//! # CLI Behavior
//!
//! This is **one possible UI client** for reelz. It is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! For the overall architecture, see the library documentation in [`reelz`].
//!
//! ## Naked Execution (`reelz`)
//!
//! Running `reelz` with no arguments opens the interactive [`shell`]: the Discover
//! tab is shown first and the popular feed is fetched right away.
//!
//! ## One-Shot Commands
//!
//! Every subcommand builds a fresh controller, performs one interaction and prints
//! the resulting tab:
//!
//! - `reelz discover`: the popular feed.
//! - `reelz search <words>`: the Search tab for the joined words.
//! - `reelz favorites`: the Favorites tab.
//! - `reelz toggle <id>`: bookmarks or unbookmarks a movie found in favorites, the
//!   popular feed, or the results of `--query`.
//! - `reelz config [key] [value]`: shows or changes configuration.
//!
//! Favorites persist between runs, so `toggle` followed by `favorites` shows the
//! bookmarked movie.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, logging and per-command handlers
//! - `render`: Output formatting (tabs, grids, messages)
//! - `setup`: Argument parsing via clap
//! - `shell`: The interactive browser
//! - `styles`: Terminal styling constants
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod shell;
mod styles;
mod templates;

pub use commands::run;
