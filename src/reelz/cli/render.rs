//! # Rendering Module
//!
//! Turns controller output ([`Screen`], [`TabLabel`]s) and CLI messages into styled
//! terminal text.
//!
//! Layout calculations (width, truncation) stay in Rust because they require
//! Unicode-aware processing. Templates handle presentation: which style applies to
//! which field, line structure, and separators.

use super::styles::{BOOKMARK_FILLED, BOOKMARK_OUTLINE, RATING_STAR, REELZ_THEME};
use super::templates::{EMPTY_TEMPLATE, GRID_TEMPLATE, MESSAGES_TEMPLATE, TABS_TEMPLATE};
use minijinja::{Environment, Value};
use reelz::controller::{MovieCard, Screen, TabLabel};
use reelz::model::Tab;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const TITLE_WIDTH: usize = 60;
const OVERVIEW_INDENT: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub level: MessageLevel,
    pub content: String,
}

impl Message {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct TabData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct TabsData {
    tabs: Vec<TabData>,
}

/// Pre-computed card line parts; templates only pick styles.
#[derive(Serialize)]
struct CardData {
    position: String,
    bookmark: &'static str,
    bookmark_style: &'static str,
    title: String,
    year: String,
    rating: String,
    overview: String,
    poster: String,
    details: &'static str,
}

#[derive(Serialize)]
struct GridData {
    heading: &'static str,
    cards: Vec<CardData>,
}

#[derive(Serialize)]
struct LineData {
    text: String,
    style: &'static str,
}

#[derive(Serialize)]
struct EmptyData {
    heading: &'static str,
    lines: Vec<LineData>,
}

#[derive(Serialize)]
struct MessagesData<'a> {
    messages: &'a [Message],
}

pub fn heading(tab: Tab) -> &'static str {
    match tab {
        Tab::Discover => "Popular Movies",
        Tab::Search => "Search Results",
        Tab::Favorites => "Your Favorites",
    }
}

pub fn render_tabs(labels: &[TabLabel], use_color: bool) -> String {
    let tabs = labels
        .iter()
        .map(|l| {
            if l.active {
                TabData {
                    text: format!("[{}]", l.label),
                    style: "tab_active",
                }
            } else {
                TabData {
                    text: format!(" {} ", l.label),
                    style: "tab",
                }
            }
        })
        .collect();
    render_template(TABS_TEMPLATE, &TabsData { tabs }, use_color)
}

pub fn render_screen(tab: Tab, screen: &Screen, use_color: bool) -> String {
    let heading = heading(tab);
    match screen {
        Screen::Grid(cards) if cards.is_empty() => render_lines(
            heading,
            vec![line("No movies found.", "hint")],
            use_color,
        ),
        Screen::Grid(cards) => {
            let data = GridData {
                heading,
                cards: cards.iter().map(card_data).collect(),
            };
            render_template(GRID_TEMPLATE, &data, use_color)
        }
        Screen::Skeleton { placeholders } => {
            let bar = "░".repeat(TITLE_WIDTH / 2);
            let lines = (0..*placeholders)
                .map(|_| line(format!("      {}  ░░░░", bar), "skeleton"))
                .collect();
            render_lines(heading, lines, use_color)
        }
        Screen::SearchPrompt => render_lines(
            heading,
            vec![line("Search for movies to see results here", "hint")],
            use_color,
        ),
        Screen::FavoritesEmpty => render_lines(
            heading,
            vec![
                line("You haven't added any favorites yet", "hint"),
                line("Discover Movies: type :discover", "info"),
            ],
            use_color,
        ),
    }
}

pub fn render_messages(messages: &[Message], use_color: bool) -> String {
    render_template(MESSAGES_TEMPLATE, &MessagesData { messages }, use_color)
}

fn line(text: impl Into<String>, style: &'static str) -> LineData {
    LineData {
        text: text.into(),
        style,
    }
}

fn render_lines(heading: &'static str, lines: Vec<LineData>, use_color: bool) -> String {
    render_template(EMPTY_TEMPLATE, &EmptyData { heading, lines }, use_color)
}

fn card_data(card: &MovieCard) -> CardData {
    let (bookmark, bookmark_style) = if card.favorite {
        (BOOKMARK_FILLED, "bookmark_on")
    } else {
        (BOOKMARK_OUTLINE, "bookmark_off")
    };
    CardData {
        position: format!("{:>3}.", card.position),
        bookmark,
        bookmark_style,
        title: truncate_to_width(&card.title, TITLE_WIDTH),
        year: card.year.map(|y| format!("({})", y)).unwrap_or_default(),
        rating: format!("{} {}", RATING_STAR, card.rating),
        overview: truncate_to_width(&card.overview, LINE_WIDTH - OVERVIEW_INDENT),
        poster: truncate_to_width(&card.poster, LINE_WIDTH - OVERVIEW_INDENT),
        details: "View Details ›",
    }
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> String {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match REELZ_THEME.get(name.as_str()) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text,
            None => format!("(!?){}", text),
        }
    });

    env.render_str(template, data)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(position: usize, id: i64, title: &str, favorite: bool) -> MovieCard {
        MovieCard {
            position,
            id,
            title: title.to_string(),
            year: Some(2010),
            rating: "8.8".to_string(),
            overview: "Dreams within dreams.".to_string(),
            poster: "/placeholder.svg".to_string(),
            favorite,
        }
    }

    fn labels(active: usize) -> Vec<TabLabel> {
        ["Discover", "Search Results", "Favorites (1)"]
            .iter()
            .zip(Tab::ALL)
            .enumerate()
            .map(|(i, (label, tab))| TabLabel {
                tab,
                label: label.to_string(),
                active: i == active,
            })
            .collect()
    }

    #[test]
    fn grid_lists_cards_with_bookmarks() {
        let screen = Screen::Grid(vec![
            card(1, 1, "Inception", true),
            card(2, 2, "Heat", false),
        ]);
        let output = render_screen(Tab::Discover, &screen, false);

        assert!(output.starts_with("Popular Movies"));
        assert!(output.contains("1. ◆ Inception (2010)  ★ 8.8"));
        assert!(output.contains("2. ◇ Heat"));
        assert!(output.contains("Dreams within dreams."));
        assert!(output.contains("View Details"));
    }

    #[test]
    fn cards_show_poster_reference_under_overview() {
        let screen = Screen::Grid(vec![card(1, 1, "Inception", true)]);
        let output = render_screen(Tab::Discover, &screen, false);
        let lines: Vec<&str> = output.lines().collect();
        let overview = lines
            .iter()
            .position(|l| l.contains("Dreams within dreams."))
            .unwrap();
        assert_eq!(lines[overview + 1], "      /placeholder.svg");
    }

    #[test]
    fn no_color_output_has_no_ansi() {
        let screen = Screen::Grid(vec![card(1, 1, "Inception", true)]);
        let output = render_screen(Tab::Discover, &screen, false);
        assert!(!output.contains('\u{1b}'));
    }

    #[test]
    fn color_output_has_ansi() {
        let screen = Screen::Grid(vec![card(1, 1, "Inception", true)]);
        let output = render_screen(Tab::Discover, &screen, true);
        assert!(output.contains('\u{1b}'));
    }

    #[test]
    fn empty_states_have_their_own_text() {
        let prompt = render_screen(Tab::Search, &Screen::SearchPrompt, false);
        assert!(prompt.contains("Search for movies to see results here"));

        let empty = render_screen(Tab::Favorites, &Screen::FavoritesEmpty, false);
        assert!(empty.contains("You haven't added any favorites yet"));
        assert!(empty.contains(":discover"));

        let none = render_screen(Tab::Discover, &Screen::Grid(vec![]), false);
        assert!(none.contains("No movies found."));
    }

    #[test]
    fn skeleton_has_one_line_per_placeholder() {
        let output = render_screen(Tab::Discover, &Screen::Skeleton { placeholders: 6 }, false);
        assert_eq!(output.lines().filter(|l| l.contains('░')).count(), 6);
    }

    #[test]
    fn tabs_bracket_the_active_one() {
        let output = render_tabs(&labels(2), false);
        assert!(output.contains("[Favorites (1)]"));
        assert!(output.contains(" Discover "));
        assert!(!output.contains("[Discover]"));
    }

    #[test]
    fn messages_render_one_per_line() {
        let output = render_messages(
            &[Message::success("Added"), Message::warning("Careful")],
            false,
        );
        assert_eq!(output, "Added\nCareful\n");
    }

    #[test]
    fn long_titles_are_truncated() {
        let long = "A".repeat(200);
        let screen = Screen::Grid(vec![card(1, 1, &long, false)]);
        let output = render_screen(Tab::Discover, &screen, false);
        assert!(output.contains('…'));
        assert!(!output.contains(&long));
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let t = truncate_to_width("日本語のタイトル", 7);
        assert!(t.width() <= 7);
        assert!(t.ends_with('…'));
    }
}
