//! Component system for the rail UI.
//!
//! Defines the Component trait that keeps UI elements modular: each
//! component owns its local state, handles its own events, and renders
//! into a provided `Rect`, reporting side effects back to the host through
//! `Effect`s instead of mutating global state directly.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use navrail_types::{Effect, Msg};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::app::App;

/// A trait representing a UI component with its own state and behavior.
///
/// Components handle localized events, update their internal state, and
/// render themselves into a provided area. Lifecycle: `init` once at
/// creation, then event handlers and `update` as messages arrive, then
/// `render` each frame.
pub(crate) trait Component {
    /// Initialize any internal state.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events that land inside this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Update internal state based on an application message.
    fn update(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area. Implementations should be
    /// side-effect free except for frame drawing and hit-test geometry
    /// tracking; state changes belong in `update` or the event handlers.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Styled spans for the hint strip while this component is focused.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Per-row layout inside `area`, used for rendering and hit testing.
    fn get_preferred_layout(&self, _app: &App, _area: Rect) -> Vec<Rect> {
        Vec::new()
    }
}
