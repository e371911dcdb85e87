//! # CLI Templates
//!
//! Terminal output goes through minijinja templates kept as standalone files and
//! embedded with `include_str!()`.
//!
//! Templates own structure and style selection (`{{ value | style("name") }}`); width
//! math and truncation stay in `render.rs`. Line breaks are explicit: every template
//! strips block whitespace with `{%- -%}` and emits newlines where it means to.

pub const TABS_TEMPLATE: &str = include_str!("templates/tabs.tmp");
pub const GRID_TEMPLATE: &str = include_str!("templates/grid.tmp");
pub const EMPTY_TEMPLATE: &str = include_str!("templates/empty.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
