//! Application state for the rail host.
//!
//! The `App` struct is the central state container the runtime threads
//! through components: shared context (theme), the router collaborator,
//! the rail state, and the global focus ring.

use rat_focus::{Focus, FocusBuilder};

use crate::router::MemoryRouter;
use crate::ui::components::nav_rail::NavRailState;
use crate::ui::theme::{self, Theme};

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects so components do not thread multiple
/// references around.
pub struct SharedCtx {
    /// Active theme used by every render path.
    pub theme: Box<dyn Theme>,
}

/// The main application state.
pub struct App {
    pub ctx: SharedCtx,
    /// Router collaborator; navigation requests land here and route
    /// changes are drained from here.
    pub router: MemoryRouter,
    /// Navigation rail container state.
    pub nav_rail: NavRailState,
    /// Global focus ring, rebuilt before each render.
    pub focus: Focus,
}

impl App {
    pub fn new(router: MemoryRouter, preferred_theme: Option<&str>) -> Self {
        let nav_rail = NavRailState::new();
        let focus = FocusBuilder::build_for(&nav_rail);
        Self {
            ctx: SharedCtx {
                theme: theme::load(preferred_theme),
            },
            router,
            nav_rail,
            focus,
        }
    }
}
