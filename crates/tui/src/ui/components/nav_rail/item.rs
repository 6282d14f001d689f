//! Per-item state and the content refresh that reconciles it.
//!
//! An item's rendered output is a pure function of its content fields plus
//! the purely visual `active` flag. The two are deliberately separate
//! update paths: [`NavItemState::apply_content`] diffs and refreshes the
//! retained subtree, while [`NavItemState::set_active`] flips only the
//! visual flag and never re-runs the refresh, so in-flight ripples and
//! other transient state survive activation changes.

use navrail_types::{AvatarRef, NavEntry};

use super::ripple::RippleSet;
use crate::ui::widgets::{AvatarNode, IconGlyph, next_node_id};

/// The content-affecting fields of one item, everything except `active`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemContent {
    pub path: Option<String>,
    pub icon: Option<String>,
    pub label: String,
    pub badge: Option<String>,
    pub avatar: Option<AvatarRef>,
}

impl ItemContent {
    /// Projects a caller-supplied entry descriptor into item content.
    pub fn from_entry(entry: &NavEntry) -> Self {
        Self {
            path: entry.path.clone(),
            icon: entry.icon.clone(),
            label: entry.label.clone(),
            badge: entry.badge.clone(),
            avatar: entry.avatar.clone(),
        }
    }

    fn has_avatar(&self) -> bool {
        self.avatar.as_ref().is_some_and(AvatarRef::is_present)
    }
}

/// Rendered badge element. Present exactly when the content has a badge
/// value; removed outright rather than hidden so nothing stale lingers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeNode {
    id: u64,
    text: String,
}

impl BadgeNode {
    fn new(text: &str) -> Self {
        Self {
            id: next_node_id(),
            text: text.to_string(),
        }
    }

    pub fn node_id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text = text.to_string();
        }
    }
}

/// What currently occupies the icon/avatar slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SlotContent {
    #[default]
    Empty,
    Icon(IconGlyph),
    Avatar(AvatarNode),
}

/// The retained rendered subtree of one item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedItem {
    pub badge: Option<BadgeNode>,
    pub slot: SlotContent,
    pub label: String,
}

/// State for a single interactive rail row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavItemState {
    content: ItemContent,
    active: bool,
    rendered: RenderedItem,
    /// Live decorative ripples owned by this item.
    pub ripples: RippleSet,
}

impl NavItemState {
    pub fn new(content: ItemContent) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    pub fn content(&self) -> &ItemContent {
        &self.content
    }

    pub fn rendered(&self) -> &RenderedItem {
        &self.rendered
    }

    pub fn path(&self) -> Option<&str> {
        self.content.path.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Flips only the visual active flag. Content is never touched here,
    /// so activation changes cannot discard transient state.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Brings the retained subtree in line with the current content. The
    /// first call populates the empty scaffold; re-attachment only re-runs
    /// the refresh, so node identity and transient state are preserved.
    pub fn ensure_rendered(&mut self) {
        self.update_content();
    }

    /// Diffs `next` against the current content and refreshes the subtree
    /// when anything differs. The `active` flag takes a different path and
    /// is not part of content.
    pub fn apply_content(&mut self, next: ItemContent) {
        if self.content != next {
            self.content = next;
            self.update_content();
        }
    }

    /// Idempotent reconcile of the retained subtree against the current
    /// content: badge presence, slot occupant, label text.
    pub fn update_content(&mut self) {
        // Badge: presence/absence toggling, not hide/show.
        match self.content.badge.as_deref() {
            Some(text) => match self.rendered.badge.as_mut() {
                Some(node) => node.set_text(text),
                None => self.rendered.badge = Some(BadgeNode::new(text)),
            },
            None => self.rendered.badge = None,
        }

        // Slot: avatar data wins over the icon; an existing icon node is
        // updated in place rather than recreated.
        if self.content.has_avatar() {
            let avatar = self.content.avatar.clone().unwrap_or_default();
            match &mut self.rendered.slot {
                SlotContent::Avatar(node) => node.set_data(avatar.src, avatar.name),
                slot => *slot = SlotContent::Avatar(AvatarNode::new(avatar.src, avatar.name)),
            }
        } else if let Some(icon) = self.content.icon.as_deref() {
            match &mut self.rendered.slot {
                SlotContent::Icon(glyph) => glyph.set_name(icon),
                slot => *slot = SlotContent::Icon(IconGlyph::new(icon)),
            }
        } else {
            self.rendered.slot = SlotContent::Empty;
        }

        self.rendered.label = self.content.label.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(content: ItemContent) -> NavItemState {
        let mut state = NavItemState::new(content);
        state.ensure_rendered();
        state
    }

    #[test]
    fn content_refresh_is_idempotent() {
        let mut state = item(ItemContent {
            path: Some("/home".into()),
            icon: Some("house".into()),
            label: "Home".into(),
            badge: Some("3".into()),
            avatar: None,
        });

        let first = state.rendered().clone();
        state.update_content();
        assert_eq!(state.rendered(), &first, "no duplicate badge or recreated nodes");
    }

    #[test]
    fn badge_round_trip() {
        let mut state = item(ItemContent {
            badge: Some("3".into()),
            ..ItemContent::default()
        });
        assert_eq!(state.rendered().badge.as_ref().map(BadgeNode::text), Some("3"));

        let mut without = state.content().clone();
        without.badge = None;
        state.apply_content(without.clone());
        assert!(state.rendered().badge.is_none(), "badge element removed, not hidden");

        let mut again = without;
        again.badge = Some("7".into());
        state.apply_content(again);
        assert_eq!(state.rendered().badge.as_ref().map(BadgeNode::text), Some("7"));
    }

    #[test]
    fn icon_swap_updates_glyph_in_place() {
        let mut state = item(ItemContent {
            icon: Some("house".into()),
            ..ItemContent::default()
        });
        let SlotContent::Icon(before) = state.rendered().slot.clone() else {
            panic!("expected icon slot");
        };

        let mut next = state.content().clone();
        next.icon = Some("gear".into());
        state.apply_content(next);

        let SlotContent::Icon(after) = &state.rendered().slot else {
            panic!("expected icon slot after swap");
        };
        assert_eq!(after.node_id(), before.node_id(), "glyph swapped without node replacement");
        assert_eq!(after.name(), "gear");
    }

    #[test]
    fn avatar_takes_precedence_over_icon() {
        let mut state = item(ItemContent {
            icon: Some("user".into()),
            avatar: Some(AvatarRef {
                src: None,
                name: Some("Ada Lovelace".into()),
            }),
            ..ItemContent::default()
        });
        let SlotContent::Avatar(avatar) = &state.rendered().slot else {
            panic!("avatar should win over icon");
        };
        assert_eq!(avatar.initials(), "AL");

        // Dropping the avatar data falls back to the icon.
        let mut next = state.content().clone();
        next.avatar = None;
        state.apply_content(next);
        assert!(matches!(state.rendered().slot, SlotContent::Icon(_)));
    }

    #[test]
    fn empty_slot_when_nothing_to_render() {
        let state = item(ItemContent::default());
        assert!(matches!(state.rendered().slot, SlotContent::Empty));
        assert!(state.rendered().badge.is_none());
        assert_eq!(state.rendered().label, "");
    }

    #[test]
    fn active_flag_never_touches_content() {
        let mut state = item(ItemContent {
            icon: Some("gear".into()),
            label: "Settings".into(),
            badge: Some("1".into()),
            ..ItemContent::default()
        });
        state.ripples.spawn((3, 0), 20, 1);
        let rendered_before = state.rendered().clone();

        state.set_active(true);
        assert!(state.is_active());
        assert_eq!(state.rendered(), &rendered_before);
        assert_eq!(state.ripples.len(), 1, "in-flight ripple survives activation");

        // And a label-only change never alters the active flag.
        let mut next = state.content().clone();
        next.label = "Preferences".into();
        state.apply_content(next);
        assert!(state.is_active());
        assert_eq!(state.rendered().label, "Preferences");
    }

    #[test]
    fn unchanged_content_skips_refresh() {
        let mut state = item(ItemContent {
            icon: Some("house".into()),
            label: "Home".into(),
            ..ItemContent::default()
        });
        let before = state.rendered().clone();
        state.apply_content(state.content().clone());
        assert_eq!(state.rendered(), &before);
    }
}
