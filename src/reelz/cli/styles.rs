use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const BOOKMARK_FILLED: &str = "◆";
pub const BOOKMARK_OUTLINE: &str = "◇";
pub const RATING_STAR: &str = "★";

pub static REELZ_THEME: Lazy<HashMap<&'static str, Style>> = Lazy::new(|| {
    HashMap::from([
        ("heading", Style::new().bold().magenta()),
        ("tab", Style::new().dim()),
        ("tab_active", Style::new().bold().magenta()),
        ("position", Style::new().dim()),
        ("title", Style::new().bold()),
        ("year", Style::new().dim()),
        ("rating", Style::new().yellow()),
        ("bookmark_on", Style::new().magenta()),
        ("bookmark_off", Style::new().dim()),
        ("overview", Style::new().color256(246)),
        ("poster", Style::new().dim()),
        ("skeleton", Style::new().dim()),
        ("hint", Style::new().dim().italic()),
        ("info", Style::new().dim()),
        ("success", Style::new().green()),
        ("warning", Style::new().yellow()),
        ("error", Style::new().red()),
    ])
});
