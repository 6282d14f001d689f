//! UI components: the navigation rail and its component trait.

pub mod component;
pub mod nav_rail;

pub use component::*;
pub use nav_rail::NavRailComponent;

use ratatui::layout::Rect;

/// Maps a mouse position to the index of the row it landed in.
///
/// Returns `None` when the position is outside the component's last
/// rendered area or between rows.
pub fn find_target_index_by_mouse_position(last_area: &Rect, per_item_areas: &[Rect], x: u16, y: u16) -> Option<usize> {
    if !last_area.contains((x, y).into()) {
        return None;
    }
    per_item_areas.iter().position(|area| area.contains((x, y).into()))
}
