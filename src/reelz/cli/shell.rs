//! Interactive browser.
//!
//! The shell mirrors the tabbed page: the tab bar and the active tab's grid are
//! redrawn after every input line. Plain text is a search (Enter submits it);
//! commands start with a colon.

use super::render::{render_messages, render_screen, render_tabs, Message};
use reelz::controller::{StateChange, ViewController, ViewState};
use reelz::model::Tab;
use reelz::source::MovieSource;
use std::io::{self, BufRead, Write};

pub const HELP: &str = "\
Type a title and press Enter to search.
  :discover  :d  :1     Popular movies
  :search    :s  :2     Last search results
  :favorites :f  :3     Your favorites
  :fav N                Bookmark / unbookmark card N
  :details N            Details for card N
  :help                 This help
  :quit      :q         Leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Search(String),
    SwitchTab(Tab),
    ToggleFavorite(usize),
    Details(usize),
    Help,
    Quit,
    Invalid(String),
    Nothing,
}

pub fn parse_line(line: &str) -> ShellCommand {
    let line = line.trim();
    if line.is_empty() {
        return ShellCommand::Nothing;
    }
    let Some(command) = line.strip_prefix(':') else {
        return ShellCommand::Search(line.to_string());
    };

    let mut parts = command.split_whitespace();
    let name = parts.next().unwrap_or_default();
    let arg = parts.next();

    match (name, arg) {
        ("q" | "quit" | "exit", None) => ShellCommand::Quit,
        ("h" | "help" | "?", None) => ShellCommand::Help,
        ("d" | "discover" | "1", None) => ShellCommand::SwitchTab(Tab::Discover),
        ("s" | "search" | "2", None) => ShellCommand::SwitchTab(Tab::Search),
        ("f" | "favorites" | "3", None) => ShellCommand::SwitchTab(Tab::Favorites),
        ("fav" | "toggle", Some(n)) => match n.parse() {
            Ok(n) => ShellCommand::ToggleFavorite(n),
            Err(_) => ShellCommand::Invalid(format!("Not a card number: {}", n)),
        },
        ("details" | "info", Some(n)) => match n.parse() {
            Ok(n) => ShellCommand::Details(n),
            Err(_) => ShellCommand::Invalid(format!("Not a card number: {}", n)),
        },
        _ => ShellCommand::Invalid(format!("Unknown command: {} (try :help)", line)),
    }
}

/// Applies one command. Returns the messages to show, or None to leave the shell.
pub async fn apply<S: MovieSource>(
    ctl: &mut ViewController<S>,
    command: ShellCommand,
) -> Option<Vec<Message>> {
    let mut messages = Vec::new();
    match command {
        ShellCommand::Quit => return None,
        ShellCommand::Nothing => {}
        ShellCommand::Help => messages.push(Message::info(HELP)),
        ShellCommand::Invalid(reason) => messages.push(Message::error(reason)),
        ShellCommand::Search(query) => {
            ctl.search(query).await;
        }
        ShellCommand::SwitchTab(tab) => ctl.select_tab(tab).await,
        ShellCommand::ToggleFavorite(n) => match ctl.toggle_at(n) {
            Some(movie) if ctl.is_favorite(movie.id) => {
                messages.push(Message::success(format!("Added {} to favorites", movie.title)))
            }
            Some(movie) => messages.push(Message::success(format!(
                "Removed {} from favorites",
                movie.title
            ))),
            None => messages.push(Message::warning(format!("No card {} on this tab", n))),
        },
        ShellCommand::Details(n) => match ctl.movie_at(n) {
            Some(movie) => messages.push(Message::info(format!(
                "Details for {} are not available yet",
                movie.title
            ))),
            None => messages.push(Message::warning(format!("No card {} on this tab", n))),
        },
    }
    Some(messages)
}

pub async fn run<S: MovieSource>(
    ctl: &mut ViewController<S>,
    use_color: bool,
) -> io::Result<()> {
    // Redraw as soon as a fetch starts so the skeleton shows while it runs.
    ctl.subscribe(move |change: StateChange, state: &ViewState| {
        if change == StateChange::Loading && state.loading {
            draw_state(state, &[], use_color);
            let _ = io::stdout().flush();
        }
    });

    ctl.start().await;
    draw(ctl, &[], use_color);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("reelz> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match apply(ctl, parse_line(&line)).await {
            Some(messages) => draw(ctl, &messages, use_color),
            None => break,
        }
    }
    Ok(())
}

fn draw<S: MovieSource>(ctl: &ViewController<S>, messages: &[Message], use_color: bool) {
    draw_state(ctl.state(), messages, use_color);
}

fn draw_state(state: &ViewState, messages: &[Message], use_color: bool) {
    println!();
    println!("{}", render_tabs(&state.tab_labels(), use_color));
    println!();
    println!("{}", render_screen(state.active_tab, &state.screen(), use_color));
    if !messages.is_empty() {
        print!("{}", render_messages(messages, use_color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reelz::favorites::Favorites;
    use reelz::source::fixtures::FixtureSource;

    #[test]
    fn plain_text_is_a_search() {
        assert_eq!(
            parse_line("  Blade Runner \n"),
            ShellCommand::Search("Blade Runner".to_string())
        );
    }

    #[test]
    fn blank_line_does_nothing() {
        assert_eq!(parse_line("   \n"), ShellCommand::Nothing);
    }

    #[test]
    fn tab_commands_and_shortcuts() {
        assert_eq!(parse_line(":d"), ShellCommand::SwitchTab(Tab::Discover));
        assert_eq!(parse_line(":2"), ShellCommand::SwitchTab(Tab::Search));
        assert_eq!(parse_line(":favorites"), ShellCommand::SwitchTab(Tab::Favorites));
    }

    #[test]
    fn fav_needs_a_number() {
        assert_eq!(parse_line(":fav 3"), ShellCommand::ToggleFavorite(3));
        assert!(matches!(parse_line(":fav x"), ShellCommand::Invalid(_)));
        assert!(matches!(parse_line(":fav"), ShellCommand::Invalid(_)));
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(parse_line(":rewind"), ShellCommand::Invalid(_)));
        assert_eq!(parse_line(":q"), ShellCommand::Quit);
    }

    #[tokio::test]
    async fn batman_then_enter_shows_search_tab() {
        let mut ctl = ViewController::with_favorites(FixtureSource::new(), Favorites::new());
        ctl.start().await;

        apply(&mut ctl, parse_line("Batman\n")).await.unwrap();
        assert_eq!(ctl.active_tab(), Tab::Search);
        assert_eq!(ctl.screen().cards().len(), 3);
        assert!(ctl.screen().cards().iter().all(|c| c.title.contains("Batman")));
    }

    #[tokio::test]
    async fn fav_reports_add_then_remove() {
        let mut ctl = ViewController::with_favorites(FixtureSource::new(), Favorites::new());
        ctl.start().await;

        let added = apply(&mut ctl, ShellCommand::ToggleFavorite(1)).await.unwrap();
        assert!(added[0].content.starts_with("Added Inception"));
        let removed = apply(&mut ctl, ShellCommand::ToggleFavorite(1)).await.unwrap();
        assert!(removed[0].content.starts_with("Removed Inception"));
        let missing = apply(&mut ctl, ShellCommand::ToggleFavorite(42)).await.unwrap();
        assert!(missing[0].content.contains("No card 42"));
    }

    #[tokio::test]
    async fn returning_to_discover_passes_through_skeleton() {
        let mut ctl = ViewController::with_favorites(FixtureSource::new(), Favorites::new());
        ctl.start().await;
        apply(&mut ctl, parse_line(":f")).await.unwrap();

        let frames = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
        let sink = frames.clone();
        ctl.subscribe(move |change: StateChange, state: &ViewState| {
            if change == StateChange::Loading && state.loading {
                sink.borrow_mut()
                    .push(render_screen(state.active_tab, &state.screen(), false));
            }
        });
        apply(&mut ctl, parse_line(":d")).await.unwrap();

        let frames = frames.borrow();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].lines().filter(|l| l.contains('░')).count(), 6);
        assert!(ctl.screen().cards().iter().any(|c| c.title == "Inception"));
    }

    #[tokio::test]
    async fn quit_ends_the_session() {
        let mut ctl = ViewController::with_favorites(FixtureSource::new(), Favorites::new());
        assert!(apply(&mut ctl, ShellCommand::Quit).await.is_none());
    }
}
