//! Shared type definitions for the navrail workspace.
//!
//! This crate holds the declarative data model consumed by the rail
//! container (entry descriptors), the router contract the components talk
//! to, and the message/effect enums that flow between the runtime and the
//! component layer. Keeping these in a leaf crate avoids cyclic wiring
//! between the TUI crate and any host that embeds the rail.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Distinguishes interactive rows from decorative separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A clickable navigation row that can become active.
    #[default]
    Item,
    /// A non-interactive separator; never a candidate for activation.
    Divider,
}

/// Optional avatar data for an entry. When either field is present, avatar
/// rendering takes precedence over icon rendering in the item slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvatarRef {
    /// Image source. Terminals cannot draw it, but the renderer records it
    /// and styles the chip accordingly.
    #[serde(default)]
    pub src: Option<String>,
    /// Display name; initials are derived from it as the fallback.
    #[serde(default)]
    pub name: Option<String>,
}

impl AvatarRef {
    /// True when the descriptor carries any avatar data at all.
    pub fn is_present(&self) -> bool {
        self.src.is_some() || self.name.is_some()
    }
}

/// Declarative descriptor for one row of the navigation rail.
///
/// The caller owns the list of these; the container treats them as
/// read-only input and maps them into rendered rows on every
/// `set_entries` call. A missing `path` on an item is tolerated: the row
/// renders but clicking it is a no-op and it can never become active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    /// Row kind; defaults to `item` when omitted in config files.
    #[serde(default)]
    pub kind: EntryKind,
    /// Canonical route path this entry activates (e.g., "/settings").
    #[serde(default)]
    pub path: Option<String>,
    /// Glyph identifier resolved by the icon renderer (e.g., "gear").
    #[serde(default)]
    pub icon: Option<String>,
    /// Avatar data; wins over `icon` when present.
    #[serde(default)]
    pub avatar: Option<AvatarRef>,
    /// Display label. Empty string when not given.
    #[serde(default)]
    pub label: String,
    /// Optional badge marker (count or short text).
    #[serde(default)]
    pub badge: Option<String>,
}

impl NavEntry {
    /// Creates an item entry with a path and label.
    pub fn item(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind: EntryKind::Item,
            path: Some(path.into()),
            label: label.into(),
            ..Self::default()
        }
    }

    /// Creates a divider entry.
    pub fn divider() -> Self {
        Self {
            kind: EntryKind::Divider,
            ..Self::default()
        }
    }

    /// Sets the icon identifier.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the badge marker.
    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Sets avatar data.
    pub fn with_avatar(mut self, src: Option<String>, name: Option<String>) -> Self {
        self.avatar = Some(AvatarRef { src, name });
        self
    }
}

/// Errors raised while loading an entry list from configuration.
#[derive(Debug, Error)]
pub enum EntryConfigError {
    /// The JSON document could not be parsed into an entry list.
    #[error("invalid entry list: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parses a JSON document into an entry list.
///
/// The expected shape is a top-level array of entry objects. Malformed
/// individual entries surface as a parse error here; entries that parse
/// but are semantically incomplete (an item without a path) are accepted
/// and degrade gracefully at render time.
pub fn parse_entries(json: &str) -> Result<Vec<NavEntry>, EntryConfigError> {
    Ok(serde_json::from_str(json)?)
}

/// Which external notification channel reported a route change.
///
/// Mirrors the two channels a host typically exposes: history traversal
/// (back/forward) and programmatic navigation. Both must trigger the same
/// active-state recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteOrigin {
    /// Back/forward traversal of the history stack.
    History,
    /// Programmatic navigation requested through `Router::navigate`.
    App,
}

/// A route-change notification delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChange {
    /// The channel that produced the notification.
    pub origin: RouteOrigin,
    /// The router's location after the change.
    pub location: String,
}

/// Handle proving a component holds a live route-change subscription.
///
/// Acquired from `Router::subscribe` on activation and returned through
/// `Router::unsubscribe` on teardown, so listeners never outlive the
/// component that registered them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteSubscription(pub u64);

/// The router collaborator the rail talks to.
///
/// Navigation requests flow in through `navigate`; the current path is
/// read through `location`. Implementations queue a [`RouteChange`] for
/// every navigation or history traversal so the host runtime can pump
/// them back into subscribed components.
pub trait Router {
    /// Requests a route change to `path`.
    fn navigate(&mut self, path: &str);

    /// Returns the current path.
    fn location(&self) -> String;

    /// Registers a route-change subscriber and returns its handle.
    fn subscribe(&mut self) -> RouteSubscription;

    /// Releases a previously acquired subscription.
    fn unsubscribe(&mut self, subscription: RouteSubscription);
}

/// Messages that update component state.
#[derive(Debug, Clone)]
pub enum Msg {
    /// Periodic UI tick driving transient animations (ripples).
    Tick,
    /// Terminal resized.
    Resize(u16, u16),
    /// The router reported a route change on either channel.
    RouteChanged(RouteChange),
}

/// Side effects components report back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request navigation to the given path via the router collaborator.
    Navigate(String),
}
