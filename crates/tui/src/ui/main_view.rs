//! Top-level view: the navigation rail beside a content pane, with a
//! hint strip along the bottom.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use navrail_types::{Effect, Msg, Router};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::Paragraph,
};

use crate::app::App;
use crate::ui::components::{Component, NavRailComponent};
use crate::ui::theme::theme_helpers as th;

/// Rail width in cells when collapsed (icon column only).
const COLLAPSED_WIDTH: u16 = 7;
/// Rail width in cells when expanded (icons plus labels).
const EXPANDED_WIDTH: u16 = 26;

pub(crate) struct MainView {
    rail: NavRailComponent,
}

impl MainView {
    pub fn new() -> Result<Self> {
        let mut rail = NavRailComponent::new();
        rail.init()?;
        Ok(Self { rail })
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        self.rail.handle_key_events(app, key)
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.rail.handle_mouse_events(app, mouse)
    }

    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        self.rail.update(app, &msg)
    }

    /// Puts focus back on the rail when nothing holds it.
    pub fn restore_focus(&self, app: &mut App) {
        let rail = &app.nav_rail;
        app.focus.focus(rail);
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let rail_width = if app.nav_rail.expanded() { EXPANDED_WIDTH } else { COLLAPSED_WIDTH };
        let columns = Layout::horizontal([Constraint::Length(rail_width), Constraint::Min(0)]).split(area);
        self.rail.render(frame, columns[0], app);

        let rows = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(columns[1]);
        let theme = &*app.ctx.theme;
        let content = Paragraph::new(format!("Current route: {}", app.router.location()))
            .style(theme.text_primary_style())
            .block(th::block(theme, Some("Content"), false));
        frame.render_widget(content, rows[0]);

        let hints = Paragraph::new(Line::from(self.rail.get_hint_spans(app))).style(th::panel_style(theme));
        frame.render_widget(hints, rows[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::MemoryRouter;
    use navrail_types::NavEntry;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).expect("cell in bounds").symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn render_shows_rail_glyphs_and_current_route() {
        let mut app = App::new(MemoryRouter::new("/home"), None);
        {
            let App { nav_rail, router, .. } = &mut app;
            nav_rail.set_entries(
                vec![
                    NavEntry::item("/home", "Home").with_icon("house"),
                    NavEntry::divider(),
                    NavEntry::item("/settings", "Settings").with_icon("gear"),
                ],
                router,
            );
        }
        let mut view = MainView::new().expect("view");

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).expect("terminal");
        terminal.draw(|frame| view.render(frame, frame.area(), &mut app)).expect("draw");

        let text = buffer_text(&terminal);
        assert!(text.contains("Current route: /home"), "content pane reflects the router location");
        assert!(text.contains('⌂'), "house glyph rendered in the rail slot");
    }
}
