//! Fixed-size avatar chip for rail items.
//!
//! An avatar renders at a fixed two-cell width. Terminals cannot draw the
//! image source, so the node records it and renders initials derived from
//! the display name as the visible fallback.

use super::next_node_id;

/// A rendered avatar node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarNode {
    id: u64,
    src: Option<String>,
    name: Option<String>,
}

impl AvatarNode {
    pub fn new(src: Option<String>, name: Option<String>) -> Self {
        Self {
            id: next_node_id(),
            src,
            name,
        }
    }

    /// Stable node identity; preserved across in-place updates.
    pub fn node_id(&self) -> u64 {
        self.id
    }

    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Updates source and name in place, keeping the node.
    pub fn set_data(&mut self, src: Option<String>, name: Option<String>) {
        self.src = src;
        self.name = name;
    }

    /// Up to two initial letters from the display name, uppercased.
    /// Empty when no name is present.
    pub fn initials(&self) -> String {
        let Some(name) = self.name.as_deref() else {
            return String::new();
        };
        name.split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }

    /// The two-cell chip text: initials when a name exists, otherwise a
    /// placeholder dot for image-only avatars.
    pub fn chip_text(&self) -> String {
        let initials = self.initials();
        if initials.is_empty() {
            "●".to_string()
        } else {
            initials
        }
    }
}
