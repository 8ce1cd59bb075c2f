//! Process-wide table of named colors

use super::Rgba;
use std::collections::HashMap;

lazy_static::lazy_static! {
    static ref NAMED_COLORS: HashMap<&'static str, Rgba> = {
        let mut table = HashMap::new();
        table.insert("apricot", Rgba::APRICOT);
        table.insert("beige", Rgba::BEIGE);
        table.insert("black", Rgba::BLACK);
        table.insert("blue", Rgba::BLUE);
        table.insert("clear", Rgba::CLEAR);
        table.insert("green", Rgba::GREEN);
        table.insert("light_orange", Rgba::LIGHT_ORANGE);
        table.insert("light_peach", Rgba::LIGHT_PEACH);
        table.insert("pool_blue", Rgba::POOL_BLUE);
        table.insert("red", Rgba::RED);
        table.insert("sky_blue", Rgba::SKY_BLUE);
        table.insert("white", Rgba::WHITE);
        table.insert("yellow", Rgba::YELLOW);
        table
    };
}

/// Looks up a named color, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<Rgba> {
    let color = NAMED_COLORS.get(name.to_ascii_lowercase().as_str()).copied();
    if color.is_none() {
        tracing::debug!(name, "no named color");
    }
    color
}

/// All names in the table, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names: Vec<_> = NAMED_COLORS.keys().copied().collect();
    names.sort_unstable();
    names
}

impl Rgba {
    /// Looks up a color in the named table.
    pub fn named(name: &str) -> Option<Rgba> {
        lookup(name)
    }
}
