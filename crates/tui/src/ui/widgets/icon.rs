//! Fixed-size glyph rendering for rail items.
//!
//! Glyph identifiers are resolved through a static table to short terminal
//! symbols. Prefer non-emoji symbols for consistent terminal rendering.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::next_node_id;

/// Symbol shown when a glyph identifier has no table entry.
pub const FALLBACK_SYMBOL: &str = "·";

static GLYPHS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("menu", "≡"),
        ("house", "⌂"),
        ("home", "⌂"),
        ("gear", "⚙"),
        ("search", "⌕"),
        ("bell", "◉"),
        ("user", "◇"),
        ("chart", "▤"),
        ("folder", "▣"),
        ("star", "✶"),
        ("mail", "✉"),
    ])
});

/// A rendered icon node.
///
/// Created once per slot and updated in place when only the glyph
/// identifier changes, so the node survives cheap refreshes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconGlyph {
    id: u64,
    name: String,
}

impl IconGlyph {
    /// Creates a new icon node for the given glyph identifier.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: next_node_id(),
            name: name.into(),
        }
    }

    /// Stable node identity; preserved across [`IconGlyph::set_name`].
    pub fn node_id(&self) -> u64 {
        self.id
    }

    /// Current glyph identifier.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Swaps the glyph identifier in place without replacing the node.
    /// No-op when the identifier is unchanged.
    pub fn set_name(&mut self, name: &str) {
        if self.name != name {
            self.name = name.to_string();
        }
    }

    /// Resolves the identifier to its terminal symbol.
    pub fn symbol(&self) -> &'static str {
        GLYPHS.get(self.name.as_str()).copied().unwrap_or(FALLBACK_SYMBOL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_name_preserves_node_identity() {
        let mut glyph = IconGlyph::new("house");
        let id = glyph.node_id();
        assert_eq!(glyph.symbol(), "⌂");

        glyph.set_name("gear");
        assert_eq!(glyph.node_id(), id);
        assert_eq!(glyph.symbol(), "⚙");
    }

    #[test]
    fn unknown_identifier_falls_back() {
        let glyph = IconGlyph::new("does-not-exist");
        assert_eq!(glyph.symbol(), FALLBACK_SYMBOL);
    }
}
