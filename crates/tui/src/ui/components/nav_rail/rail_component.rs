use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use navrail_types::{Effect, Msg};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Borders, Paragraph},
};

use super::ripple::RIPPLE_FRAMES;
use super::state::{NavRailState, RailRow};
use super::{NavItemState, SlotContent};
use crate::app::App;
use crate::ui::components::{Component, find_target_index_by_mouse_position};
use crate::ui::theme::theme_helpers::{self as th, ButtonRenderOptions, ButtonType};
use crate::ui::theme::Theme;
use crate::ui::utils::{pad_to_width, truncate_to_width};

/// Cells reserved for the icon/avatar slot at the left of each row.
const SLOT_WIDTH: u16 = 3;
/// Glyph identifier shown on the expand/collapse toggle.
const TOGGLE_GLYPH: &str = "≡";

/// The navigation rail component.
///
/// Renders a vertical column with the expand/collapse toggle on top and
/// one row per entry: interactive items with an icon/avatar slot, a label
/// (expanded mode), an optional badge, and a ripple overlay; dividers as
/// plain separator lines. Exposes navigation as `Effect::Navigate` and
/// leaves routing itself to the host.
#[derive(Debug, Default)]
pub struct NavRailComponent {
    /// Optional title for the surrounding block. When `None`, no title is shown.
    pub title: Option<String>,
}

impl NavRailComponent {
    pub fn new() -> Self {
        Self { title: None }
    }

    fn any_focused(&self, state: &NavRailState) -> bool {
        state.toggle_focus.get() || state.item_focus_flags.iter().any(|flag| flag.get())
    }

    /// Toggle rect plus one rect per row inside the block's inner area.
    fn layout_rows(row_count: usize, inner: Rect) -> (Rect, Vec<Rect>) {
        let mut constraints = Vec::with_capacity(row_count + 3);
        constraints.push(Constraint::Length(3)); // toggle button
        constraints.push(Constraint::Length(1)); // gap below the toggle
        constraints.extend(std::iter::repeat_n(Constraint::Length(1), row_count));
        constraints.push(Constraint::Min(0));

        let chunks = Layout::vertical(constraints).split(inner);
        let toggle = chunks[0];
        let rows = chunks[2..2 + row_count].to_vec();
        (toggle, rows)
    }

    fn navigate_effect(item: &NavItemState) -> Vec<Effect> {
        // Missing path degrades to a no-op click.
        match item.path() {
            Some(path) => vec![Effect::Navigate(path.to_string())],
            None => Vec::new(),
        }
    }

    fn render_row(frame: &mut Frame, area: Rect, theme: &dyn Theme, item: &NavItemState, focused: bool, expanded: bool) {
        let mut style = th::panel_style(theme);
        if item.is_active() {
            style = theme.active_style();
        }
        if focused {
            style = if item.is_active() {
                style.add_modifier(ratatui::style::Modifier::UNDERLINED)
            } else {
                theme.selection_style()
            };
        }

        let slot_text = match &item.rendered().slot {
            SlotContent::Icon(glyph) => glyph.symbol().to_string(),
            SlotContent::Avatar(avatar) => avatar.chip_text(),
            SlotContent::Empty => String::new(),
        };
        let mut spans = vec![Span::raw(pad_to_width(&slot_text, SLOT_WIDTH))];
        if expanded {
            let label_width = area.width.saturating_sub(SLOT_WIDTH + 3);
            spans.push(Span::raw(truncate_to_width(&item.rendered().label, label_width)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);

        // Badge overlays the row's right edge, mirroring the absolute
        // positioning of a corner badge.
        if let Some(badge) = &item.rendered().badge {
            let text = badge.text();
            let width = (text.chars().count() as u16).clamp(1, area.width);
            let badge_area = Rect {
                x: area.right().saturating_sub(width),
                y: area.y,
                width,
                height: 1,
            };
            frame.render_widget(Paragraph::new(text).style(theme.badge_style()), badge_area);
        }

        Self::paint_ripples(frame, area, theme, item);
    }

    /// Paints every live ripple as an expanding filled circle clipped to
    /// the row. Cell height counts double to keep the wave visually round.
    fn paint_ripples(frame: &mut Frame, area: Rect, theme: &dyn Theme, item: &NavItemState) {
        let buf = frame.buffer_mut();
        for ripple in item.ripples.iter() {
            let color = th::ripple_fade(theme, ripple.frame, RIPPLE_FRAMES);
            let radius = ripple.current_radius();
            let cx = f32::from(area.x + ripple.center.0);
            let cy = f32::from(area.y + ripple.center.1);
            for y in area.y..area.bottom() {
                for x in area.x..area.right() {
                    let dx = f32::from(x) - cx;
                    let dy = (f32::from(y) - cy) * 2.0;
                    if (dx * dx + dy * dy).sqrt() <= radius
                        && let Some(cell) = buf.cell_mut((x, y))
                    {
                        cell.set_bg(color);
                    }
                }
            }
        }
    }
}

impl Component for NavRailComponent {
    /// Handles key events for the rail: item focus cycling, activation,
    /// and the expand/collapse binding.
    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        // Ensure a valid initial child focus when the container gains focus.
        let needs_init = {
            let state = &app.nav_rail;
            state.container_focus.get() && !self.any_focused(state)
        };
        if needs_init {
            app.focus.focus(&app.nav_rail);
        }

        let mut effects = Vec::new();
        match key.code {
            KeyCode::Tab => {
                app.focus.next();
            }
            KeyCode::BackTab => {
                app.focus.prev();
            }
            KeyCode::Down => {
                if let Some(flag) = app.nav_rail.cycle_focus(true) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Up => {
                if let Some(flag) = app.nav_rail.cycle_focus(false) {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Home => {
                if let Some(flag) = app.nav_rail.item_focus_flags.first().cloned() {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::End => {
                if let Some(flag) = app.nav_rail.item_focus_flags.last().cloned() {
                    app.focus.by_widget_id(flag.widget_id());
                }
            }
            KeyCode::Enter => {
                if app.nav_rail.toggle_focus.get() {
                    app.nav_rail.toggle_expanded();
                } else if let Some((item, _)) = app.nav_rail.get_focused_item() {
                    effects.extend(Self::navigate_effect(item));
                }
            }
            KeyCode::Char('m') => {
                app.nav_rail.toggle_expanded();
            }
            _ => {}
        }
        effects
    }

    /// Handles mouse events: mouse-down spawns a ripple on the item it
    /// landed in, mouse-up commits (toggle or navigation). A click is a
    /// down/up pair and issues exactly one navigation request.
    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        let (x, y) = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(row_idx) = find_target_index_by_mouse_position(&app.nav_rail.last_area, &app.nav_rail.per_row_areas, x, y)
                else {
                    return effects;
                };
                let Some(item_idx) = app.nav_rail.item_index_of_row(row_idx) else {
                    return effects;
                };
                let row_area = app.nav_rail.per_row_areas[row_idx];
                let offset = (x.saturating_sub(row_area.x), y.saturating_sub(row_area.y));
                if let Some(item) = app.nav_rail.item_mut(item_idx) {
                    item.ripples.spawn(offset, row_area.width, row_area.height);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if app.nav_rail.toggle_area.contains((x, y).into()) {
                    app.nav_rail.toggle_expanded();
                    let flag = app.nav_rail.toggle_focus.clone();
                    app.focus.focus(&flag);
                    return effects;
                }
                let Some(row_idx) = find_target_index_by_mouse_position(&app.nav_rail.last_area, &app.nav_rail.per_row_areas, x, y)
                else {
                    return effects;
                };
                let Some(item_idx) = app.nav_rail.item_index_of_row(row_idx) else {
                    return effects;
                };
                if let Some(item) = app.nav_rail.items().nth(item_idx) {
                    effects.extend(Self::navigate_effect(item));
                }
                if let Some(flag) = app.nav_rail.item_focus_flags.get(item_idx).cloned() {
                    app.focus.focus(&flag);
                }
            }
            _ => {}
        }
        effects
    }

    /// Applies route changes and advances ripple animations.
    fn update(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        match msg {
            Msg::RouteChanged(change) => {
                app.nav_rail.handle_route_change(change);
            }
            Msg::Tick => {
                app.nav_rail.advance_ripples();
            }
            Msg::Resize(..) => {}
        }
        Vec::new()
    }

    /// Renders the rail: outer block, toggle button, rows, hit-test
    /// geometry bookkeeping.
    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let inner = area.inner(Margin::new(1, 1));
        let mut rects = self.get_preferred_layout(app, inner);
        let toggle_area = rects.remove(0);
        let row_areas = rects;

        let App { ctx, nav_rail, .. } = app;
        let theme = &*ctx.theme;
        let focused = self.any_focused(nav_rail);
        frame.render_widget(th::block(theme, self.title.as_deref(), focused), area);
        th::render_button(
            frame,
            toggle_area,
            TOGGLE_GLYPH,
            theme,
            ButtonRenderOptions::new(true, nav_rail.toggle_focus.get(), nav_rail.expanded(), Borders::NONE, ButtonType::Secondary),
        );

        let expanded = nav_rail.expanded();
        let mut item_idx = 0usize;
        for (row, row_area) in nav_rail.rows().iter().zip(row_areas.iter().copied()) {
            match row {
                RailRow::Divider => {
                    let line = "─".repeat(row_area.width as usize);
                    frame.render_widget(Paragraph::new(line).style(theme.divider_style()), row_area);
                }
                RailRow::Item(item) => {
                    let item_focused = nav_rail.item_focus_flags.get(item_idx).map(|flag| flag.get()).unwrap_or_default();
                    Self::render_row(frame, row_area, theme, item, item_focused, expanded);
                    item_idx += 1;
                }
            }
        }

        nav_rail.last_area = area;
        nav_rail.toggle_area = toggle_area;
        nav_rail.per_row_areas = row_areas;
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        th::build_hint_spans(
            &*app.ctx.theme,
            &[(" Enter", " Open"), (" ↑/↓", " Navigate"), (" m", " Expand/collapse")],
        )
    }

    fn get_preferred_layout(&self, app: &App, area: Rect) -> Vec<Rect> {
        let (toggle, mut rows) = Self::layout_rows(app.nav_rail.rows().len(), area);
        rows.insert(0, toggle);
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::router::MemoryRouter;
    use navrail_types::{NavEntry, Router};

    fn mouse(kind: MouseEventKind, x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column: x,
            row: y,
            modifiers: crossterm::event::KeyModifiers::empty(),
        }
    }

    /// Builds an app with three rows and hand-laid hit-test geometry, as
    /// if the rail had been rendered at the terminal's top-left corner.
    fn app_with_geometry() -> App {
        let mut app = App::new(MemoryRouter::new("/home"), None);
        let entries = vec![
            NavEntry::item("/home", "Home").with_icon("house"),
            NavEntry::divider(),
            NavEntry::item("/reports", "Reports").with_icon("chart"),
        ];
        let App { nav_rail, router, .. } = &mut app;
        nav_rail.set_entries(entries, router);
        nav_rail.activate(router);
        nav_rail.last_area = Rect::new(0, 0, 24, 12);
        nav_rail.toggle_area = Rect::new(1, 1, 22, 3);
        nav_rail.per_row_areas = vec![Rect::new(1, 5, 22, 1), Rect::new(1, 6, 22, 1), Rect::new(1, 7, 22, 1)];
        app
    }

    #[test]
    fn click_issues_exactly_one_navigation_request() {
        let mut app = app_with_geometry();
        let mut component = NavRailComponent::new();

        let down = component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 12, 7));
        assert!(down.is_empty(), "mouse-down must not navigate");

        let up = component.handle_mouse_events(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 12, 7));
        assert_eq!(up, vec![Effect::Navigate("/reports".into())]);
    }

    #[test]
    fn mouse_down_spawns_centered_ripple() {
        let mut app = app_with_geometry();
        let mut component = NavRailComponent::new();

        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 12, 7));
        let item = app.nav_rail.items().nth(1).expect("reports row");
        assert_eq!(item.ripples.len(), 1);
        let ripple = item.ripples.iter().next().expect("ripple");
        assert_eq!(ripple.center, (11, 0), "pointer offset within the row");
        assert_eq!(ripple.diameter, 22, "larger of row width and height");
    }

    #[test]
    fn click_on_divider_does_nothing() {
        let mut app = app_with_geometry();
        let mut component = NavRailComponent::new();

        let down = component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 5, 6));
        let up = component.handle_mouse_events(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 5, 6));
        assert!(down.is_empty() && up.is_empty());
        assert!(app.nav_rail.items().all(|item| item.ripples.is_empty()));
    }

    #[test]
    fn click_on_pathless_item_is_a_noop() {
        let mut app = app_with_geometry();
        let App { nav_rail, router, .. } = &mut app;
        nav_rail.set_entries(vec![NavEntry::default()], router);
        nav_rail.last_area = Rect::new(0, 0, 24, 12);
        nav_rail.per_row_areas = vec![Rect::new(1, 5, 22, 1)];

        let mut component = NavRailComponent::new();
        let up = component.handle_mouse_events(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 5, 5));
        assert!(up.is_empty(), "no navigation request without a path");
    }

    #[test]
    fn toggle_click_flips_expansion_without_navigating() {
        let mut app = app_with_geometry();
        let mut component = NavRailComponent::new();
        assert!(!app.nav_rail.expanded());

        let effects = component.handle_mouse_events(&mut app, mouse(MouseEventKind::Up(MouseButton::Left), 5, 2));
        assert!(effects.is_empty());
        assert!(app.nav_rail.expanded());
    }

    #[test]
    fn route_change_updates_active_row() {
        let mut app = app_with_geometry();
        let mut component = NavRailComponent::new();

        app.router.navigate("/reports");
        for change in app.router.drain_changes() {
            component.update(&mut app, &Msg::RouteChanged(change));
        }
        let actives: Vec<bool> = app.nav_rail.items().map(|item| item.is_active()).collect();
        assert_eq!(actives, vec![false, true]);
    }

    #[test]
    fn ticks_drive_ripples_to_completion() {
        let mut app = app_with_geometry();
        let mut component = NavRailComponent::new();
        component.handle_mouse_events(&mut app, mouse(MouseEventKind::Down(MouseButton::Left), 3, 5));
        assert!(app.nav_rail.is_animating());

        for _ in 0..RIPPLE_FRAMES {
            component.update(&mut app, &Msg::Tick);
        }
        assert!(!app.nav_rail.is_animating(), "ripple removed after its animation");
    }

    #[test]
    fn enter_navigates_to_the_focused_item() {
        let mut app = app_with_geometry();
        let mut component = NavRailComponent::new();
        // First item holds focus after set_entries.
        let effects = component.handle_key_events(&mut app, KeyEvent::from(KeyCode::Enter));
        assert_eq!(effects, vec![Effect::Navigate("/home".into())]);
    }
}
