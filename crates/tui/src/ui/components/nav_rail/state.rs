use navrail_types::{EntryKind, NavEntry, RouteChange, RouteSubscription, Router};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;

use super::item::{ItemContent, NavItemState};

/// One rendered row of the rail: an interactive item or a separator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RailRow {
    Item(NavItemState),
    #[default]
    Divider,
}

/// State for the navigation rail container.
///
/// Owns the caller-supplied entry list, the rows derived from it, the
/// expand/collapse boolean, and rat-focus flags for the toggle control and
/// each interactive row. Consumers mutate state through the provided
/// reducers to keep logic testable.
#[derive(Debug, Default)]
pub struct NavRailState {
    entries: Vec<NavEntry>,
    rows: Vec<RailRow>,
    expanded: bool,
    /// Focus flag for the container in the global focus tree.
    pub container_focus: FocusFlag,
    /// Focus flag for the expand/collapse toggle control.
    pub toggle_focus: FocusFlag,
    /// Focus flags for interactive rows; kept in sync with the item count.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Last rendered area of the rail; used for mouse hit testing.
    pub last_area: Rect,
    /// Last rendered area of the toggle control.
    pub toggle_area: Rect,
    /// Last computed per-row areas for hit testing, parallel to `rows`.
    pub per_row_areas: Vec<Rect>,
    subscription: Option<RouteSubscription>,
}

impl NavRailState {
    pub fn new() -> Self {
        Self {
            container_focus: FocusFlag::named("rail"),
            toggle_focus: FocusFlag::named("rail.toggle"),
            ..Self::default()
        }
    }

    /// Replaces the full entry set: every call is a full rebuild of the
    /// row list, focus flags, and hit-test geometry, followed by an
    /// active-state pass against the router's current location. There is
    /// no partial-update path.
    pub fn set_entries(&mut self, entries: Vec<NavEntry>, router: &dyn Router) {
        self.rows = entries
            .iter()
            .map(|entry| match entry.kind {
                EntryKind::Divider => RailRow::Divider,
                EntryKind::Item => {
                    let mut item = NavItemState::new(ItemContent::from_entry(entry));
                    item.ensure_rendered();
                    RailRow::Item(item)
                }
            })
            .collect();
        self.entries = entries;
        self.per_row_areas.clear();
        self.rebuild_item_focus_flags();
        self.sync_active_route(&router.location());
        debug!(rows = self.rows.len(), "rail entries rebuilt");
    }

    /// The last set entries; empty if never set.
    pub fn entries(&self) -> &[NavEntry] {
        &self.entries
    }

    pub fn rows(&self) -> &[RailRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [RailRow] {
        &mut self.rows
    }

    /// Interactive items in row order.
    pub fn items(&self) -> impl Iterator<Item = &NavItemState> {
        self.rows.iter().filter_map(|row| match row {
            RailRow::Item(item) => Some(item),
            RailRow::Divider => None,
        })
    }

    fn items_mut(&mut self) -> impl Iterator<Item = &mut NavItemState> {
        self.rows.iter_mut().filter_map(|row| match row {
            RailRow::Item(item) => Some(item),
            RailRow::Divider => None,
        })
    }

    /// The interactive item at `item_idx`, counting items only.
    pub fn item_mut(&mut self, item_idx: usize) -> Option<&mut NavItemState> {
        self.items_mut().nth(item_idx)
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Flips expand/collapse. Pure local UI state: toggled only by
    /// explicit user action, never derived from the route, never reported
    /// to any collaborator.
    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Acquires the route-change subscription. Notifications are only
    /// applied while this is held.
    pub fn activate(&mut self, router: &mut dyn Router) {
        if self.subscription.is_none() {
            self.subscription = Some(router.subscribe());
        }
        self.sync_active_route(&router.location());
    }

    /// Releases the subscription and drops any transient visuals.
    pub fn deactivate(&mut self, router: &mut dyn Router) {
        if let Some(subscription) = self.subscription.take() {
            router.unsubscribe(subscription);
        }
        for item in self.items_mut() {
            item.ripples.clear();
        }
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Applies a route-change notification. Both notification channels go
    /// through here, so history traversal and programmatic navigation
    /// recompute the active row identically.
    pub fn handle_route_change(&mut self, change: &RouteChange) {
        if self.subscription.is_none() {
            return;
        }
        self.sync_active_route(&change.location);
    }

    /// Recomputes the active marker: the location is normalized to a
    /// leading `/`, then compared by exact string equality against each
    /// item's path. With duplicate paths the first match wins; everything
    /// else ends up inactive. Dividers and pathless items never match.
    pub fn sync_active_route(&mut self, location: &str) {
        let location = normalize_location(location);
        let mut matched = false;
        for item in self.items_mut() {
            let is_match = !matched && item.path() == Some(location.as_str());
            item.set_active(is_match);
            matched = matched || is_match;
        }
    }

    /// Advances every item's ripples; true while anything still animates.
    pub fn advance_ripples(&mut self) -> bool {
        let mut animating = false;
        for item in self.items_mut() {
            animating |= item.ripples.advance();
        }
        animating
    }

    pub fn is_animating(&self) -> bool {
        self.items().any(|item| item.ripples.is_animating())
    }

    /// Updates the item focus flags to match the interactive row count and
    /// focuses the first item when the previous focus vanished.
    fn rebuild_item_focus_flags(&mut self) {
        let count = self.items().count();
        self.item_focus_flags = (0..count).map(|i| FocusFlag::named(&format!("rail.item.{i}"))).collect();
        if let Some(first) = self.item_focus_flags.first() {
            first.set(true);
        }
    }

    /// The focused item with its index among interactive rows.
    pub fn get_focused_item(&self) -> Option<(&NavItemState, usize)> {
        let idx = self.item_focus_flags.iter().position(|flag| flag.get())?;
        self.items().nth(idx).map(|item| (item, idx))
    }

    /// The flag of the next or previous interactive item, wrapping.
    pub fn cycle_focus(&self, increment: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let ordinal = if increment { len + 1 } else { len - 1 };
        let idx = self.item_focus_flags.iter().position(|flag| flag.get())?;
        self.item_focus_flags.get((idx + ordinal) % len).cloned()
    }

    /// Maps an interactive-row index to its index in `rows`.
    pub fn row_index_of_item(&self, item_idx: usize) -> Option<usize> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matches!(row, RailRow::Item(_)))
            .nth(item_idx)
            .map(|(row_idx, _)| row_idx)
    }

    /// Maps a row index back to its interactive-row index, if any.
    pub fn item_index_of_row(&self, row_idx: usize) -> Option<usize> {
        match self.rows.get(row_idx) {
            Some(RailRow::Item(_)) => Some(
                self.rows[..row_idx]
                    .iter()
                    .filter(|row| matches!(row, RailRow::Item(_)))
                    .count(),
            ),
            _ => None,
        }
    }
}

/// Enforces the leading separator before comparison; never rejects.
pub fn normalize_location(location: &str) -> String {
    if location.starts_with('/') {
        location.to_string()
    } else {
        format!("/{location}")
    }
}

impl HasFocus for NavRailState {
    /// Builds a focus subtree: the toggle control, then each item as a
    /// leaf under the container flag.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.leaf_widget(&self.toggle_focus);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::MemoryRouter;
    use navrail_types::{RouteOrigin, Router};

    fn sample_entries() -> Vec<NavEntry> {
        vec![
            NavEntry::item("/home", "Home").with_icon("house"),
            NavEntry::divider(),
            NavEntry::item("/settings", "Settings").with_icon("gear"),
        ]
    }

    #[test]
    fn set_entries_maps_rows_and_separators() {
        let router = MemoryRouter::new("/");
        let mut state = NavRailState::new();
        state.set_entries(sample_entries(), &router);

        assert_eq!(state.rows().len(), 3);
        assert_eq!(state.items().count(), 2);
        let dividers = state.rows().iter().filter(|row| matches!(row, RailRow::Divider)).count();
        assert_eq!(dividers, 1);
        assert_eq!(state.item_focus_flags.len(), 2);
        assert_eq!(state.entries().len(), 3);
    }

    #[test]
    fn entries_empty_before_first_set() {
        let state = NavRailState::new();
        assert!(state.entries().is_empty());
        assert_eq!(state.rows().len(), 0);
    }

    #[test]
    fn active_row_matches_current_location() {
        let router = MemoryRouter::new("/settings");
        let mut state = NavRailState::new();
        state.set_entries(sample_entries(), &router);

        let actives: Vec<bool> = state.items().map(NavItemState::is_active).collect();
        assert_eq!(actives, vec![false, true], "Settings active, Home not");
    }

    #[test]
    fn location_without_separator_is_normalized() {
        let router = MemoryRouter::new("/");
        let mut state = NavRailState::new();
        state.set_entries(sample_entries(), &router);

        state.sync_active_route("settings");
        let actives: Vec<bool> = state.items().map(NavItemState::is_active).collect();
        assert_eq!(actives, vec![false, true]);
    }

    #[test]
    fn at_most_one_active_and_first_match_wins() {
        let router = MemoryRouter::new("/dup");
        let mut state = NavRailState::new();
        state.set_entries(
            vec![
                NavEntry::item("/dup", "First"),
                NavEntry::item("/dup", "Second"),
                NavEntry::item("/other", "Other"),
            ],
            &router,
        );

        let actives: Vec<bool> = state.items().map(NavItemState::is_active).collect();
        assert_eq!(actives, vec![true, false, false]);
    }

    #[test]
    fn pathless_item_never_activates() {
        let router = MemoryRouter::new("/");
        let mut state = NavRailState::new();
        state.set_entries(vec![NavEntry::default(), NavEntry::item("/", "Root")], &router);

        let actives: Vec<bool> = state.items().map(NavItemState::is_active).collect();
        assert_eq!(actives, vec![false, true]);
    }

    #[test]
    fn both_notification_channels_sync_identically() {
        let mut router = MemoryRouter::new("/home");
        let mut state = NavRailState::new();
        state.set_entries(sample_entries(), &router);
        state.activate(&mut router);

        state.handle_route_change(&RouteChange {
            origin: RouteOrigin::App,
            location: "/settings".into(),
        });
        assert!(state.items().nth(1).expect("settings row").is_active());

        state.handle_route_change(&RouteChange {
            origin: RouteOrigin::History,
            location: "/home".into(),
        });
        let actives: Vec<bool> = state.items().map(NavItemState::is_active).collect();
        assert_eq!(actives, vec![true, false]);
    }

    #[test]
    fn route_changes_ignored_without_subscription() {
        let mut router = MemoryRouter::new("/home");
        let mut state = NavRailState::new();
        state.set_entries(sample_entries(), &router);
        state.activate(&mut router);
        state.deactivate(&mut router);

        state.handle_route_change(&RouteChange {
            origin: RouteOrigin::App,
            location: "/settings".into(),
        });
        let actives: Vec<bool> = state.items().map(NavItemState::is_active).collect();
        assert_eq!(actives, vec![true, false], "stale notification not applied");
    }

    #[test]
    fn toggle_is_pure_local_state() {
        let mut router = MemoryRouter::new("/home");
        let mut state = NavRailState::new();
        assert!(!state.expanded());
        state.toggle_expanded();
        assert!(state.expanded());
        state.toggle_expanded();
        assert!(!state.expanded());

        // Route movement does not disturb it.
        state.toggle_expanded();
        router.navigate("/settings");
        state.sync_active_route(&router.location());
        assert!(state.expanded());
    }

    #[test]
    fn row_and_item_index_mapping() {
        let router = MemoryRouter::new("/");
        let mut state = NavRailState::new();
        state.set_entries(sample_entries(), &router);

        assert_eq!(state.row_index_of_item(0), Some(0));
        assert_eq!(state.row_index_of_item(1), Some(2));
        assert_eq!(state.item_index_of_row(0), Some(0));
        assert_eq!(state.item_index_of_row(1), None, "divider row has no item index");
        assert_eq!(state.item_index_of_row(2), Some(1));
    }
}
