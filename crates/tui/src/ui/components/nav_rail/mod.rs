//! Collapsible application navigation rail.
//!
//! This module provides the rail container and its per-entry item state:
//! - Declarative entry descriptors mapped into rendered rows on every
//!   `set_entries` call (full rebuild, no partial updates)
//! - Active-route synchronization driven by router notifications
//! - Expand/collapse toggled by an explicit control, never by the route
//! - Transient ripple feedback on mouse-down
//! - rat-focus integration via `FocusFlag`s per interactive row
//!
//! The component is self-contained: consumers instantiate
//! [`NavRailState`], feed events to [`NavRailComponent`], and render it in
//! any layout slot. Navigation requests surface as `Effect::Navigate`; the
//! host forwards them to its router and pumps route changes back in.
//!
//! # Usage (crate-internal)
//!
//! ```ignore
//! let mut state = NavRailState::new();
//! state.set_entries(
//!     vec![
//!         NavEntry::item("/home", "Home").with_icon("house"),
//!         NavEntry::divider(),
//!         NavEntry::item("/settings", "Settings").with_icon("gear"),
//!     ],
//!     &router,
//! );
//! let mut component = NavRailComponent::new();
//! // Route key/mouse events to the component and call render() each frame.
//! ```

mod item;
mod rail_component;
mod ripple;
mod state;

pub use item::{BadgeNode, ItemContent, NavItemState, RenderedItem, SlotContent};
pub use rail_component::NavRailComponent;
pub use ripple::{RIPPLE_FRAMES, Ripple, RippleSet};
pub use state::{NavRailState, RailRow, normalize_location};
