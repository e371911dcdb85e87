//! # Command Dispatch
//!
//! - `run()`: parses arguments, installs logging and drives the async handlers on a
//!   current-thread runtime
//! - `init_context()`: builds `AppContext` from the data directory and configuration
//! - `handle_*()`: per-command handlers that talk to the controller and print output
//!
//! Handlers return [`Result`] only for setup and configuration problems. Catalog
//! and storage failures are already absorbed by the controller, which logs them and
//! shows an empty grid instead.

use super::render::{render_messages, render_screen, render_tabs, Message};
use super::setup::{Cli, Commands};
use super::shell;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use reelz::config::ReelzConfig;
use reelz::controller::ViewController;
use reelz::error::{ReelzError, Result};
use reelz::favorites::FavoritesStore;
use reelz::model::{Movie, Tab};
use reelz::source::{self, MovieSource};
use reelz::store::fs::FsStore;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Overrides the platform data directory.
pub const HOME_ENV: &str = "REELZ_HOME";
const STORAGE_DIR: &str = "storage";

struct AppContext {
    controller: ViewController<Box<dyn MovieSource>>,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let data_dir = data_dir()?;
    let use_color = !cli.no_color && Term::stdout().features().colors_supported();
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    // Config must stay reachable even when the configured source can't be built.
    let command = match cli.command {
        Some(Commands::Config { key, value }) => {
            return handle_config(&data_dir, key, value, use_color)
        }
        other => other,
    };

    let mut ctx = init_context(&data_dir, use_color)?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        match command {
            None | Some(Commands::Shell) => shell::run(&mut ctx.controller, ctx.use_color)
                .await
                .map_err(ReelzError::Io),
            Some(Commands::Discover) => handle_discover(&mut ctx).await,
            Some(Commands::Search { query }) => handle_search(&mut ctx, query.join(" ")).await,
            Some(Commands::Favorites) => handle_favorites(&mut ctx).await,
            Some(Commands::Toggle { id, query }) => handle_toggle(&mut ctx, id, query).await,
            Some(Commands::Config { .. }) => Ok(()),
        }
    })
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "reelz=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("", "", "reelz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            ReelzError::Config(format!(
                "could not determine a data directory, set {}",
                HOME_ENV
            ))
        })
}

fn init_context(data_dir: &Path, use_color: bool) -> Result<AppContext> {
    let config = ReelzConfig::load(data_dir)?;
    let source = source::from_config(&config)?;
    tracing::debug!(source = %config.source, "catalog source selected");

    let store = FsStore::new(data_dir.join(STORAGE_DIR));
    let favorites = FavoritesStore::with_key(store, &config.favorites_key);

    Ok(AppContext {
        controller: ViewController::new(source, favorites),
        use_color,
    })
}

fn print_view(ctx: &AppContext) {
    let ctl = &ctx.controller;
    println!("{}", render_tabs(&ctl.tab_labels(), ctx.use_color));
    println!();
    print!(
        "{}",
        render_screen(ctl.active_tab(), &ctl.screen(), ctx.use_color)
    );
}

fn print_messages(messages: &[Message], use_color: bool) {
    print!("{}", render_messages(messages, use_color));
}

async fn handle_discover(ctx: &mut AppContext) -> Result<()> {
    ctx.controller.start().await;
    print_view(ctx);
    Ok(())
}

async fn handle_search(ctx: &mut AppContext, query: String) -> Result<()> {
    // A blank query is ignored without a word.
    if ctx.controller.search(query).await {
        print_view(ctx);
    }
    Ok(())
}

async fn handle_favorites(ctx: &mut AppContext) -> Result<()> {
    ctx.controller.select_tab(Tab::Favorites).await;
    print_view(ctx);
    Ok(())
}

async fn handle_toggle(ctx: &mut AppContext, id: i64, query: Option<String>) -> Result<()> {
    let Some(movie) = find_movie(&mut ctx.controller, id, query).await else {
        print_messages(
            &[Message::warning(format!("Movie {} not found", id))],
            ctx.use_color,
        );
        return Ok(());
    };

    ctx.controller.toggle_favorite(&movie);
    let message = if ctx.controller.is_favorite(id) {
        Message::success(format!("Added '{}' to favorites", movie.title))
    } else {
        Message::success(format!("Removed '{}' from favorites", movie.title))
    };
    print_messages(&[message], ctx.use_color);
    Ok(())
}

/// Looks for `id` in favorites, then the popular feed, then the results for `query`.
async fn find_movie<S: MovieSource>(
    ctl: &mut ViewController<S>,
    id: i64,
    query: Option<String>,
) -> Option<Movie> {
    if let Some(movie) = ctl.favorites().get(id) {
        return Some(movie.clone());
    }

    ctl.start().await;
    if let Some(movie) = ctl.results().iter().find(|m| m.id == id) {
        return Some(movie.clone());
    }

    let query = query?;
    ctl.search(query).await;
    ctl.results().iter().find(|m| m.id == id).cloned()
}

fn handle_config(
    data_dir: &Path,
    key: Option<String>,
    value: Option<String>,
    use_color: bool,
) -> Result<()> {
    let mut config = ReelzConfig::load(data_dir)?;

    match (key, value) {
        (None, _) => {
            for key in ReelzConfig::KEYS {
                println!("{} = {}", key, config.get(key)?);
            }
        }
        (Some(key), None) => println!("{}", config.get(&key)?),
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(data_dir)?;
            print_messages(
                &[Message::success(format!("{} = {}", key, config.get(&key)?))],
                use_color,
            );
        }
    }
    Ok(())
}
