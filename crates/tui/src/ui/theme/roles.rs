use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic color roles used throughout the rail UI.
#[derive(Debug, Clone)]
pub struct ThemeRoles {
    pub background: Color,
    pub surface: Color,
    pub surface_muted: Color,
    pub border: Color,
    pub divider: Color,

    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    /// Link-like accent used for the active row's foreground.
    pub accent: Color,
    /// Background tint for the active row (the accent mixed toward the
    /// surface, the terminal stand-in for a translucent accent wash).
    pub active_bg: Color,

    pub badge_bg: Color,
    pub badge_fg: Color,

    pub selection_bg: Color,
    pub selection_fg: Color,
    pub focus: Color,

    /// Base color of the ripple overlay; the painter fades it per frame.
    pub ripple: Color,
}

/// Theme trait exposes semantic roles and common style builders.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    // Text styles
    fn text_primary_style(&self) -> Style {
        Style::default().fg(self.roles().text)
    }
    fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.roles().text_secondary)
    }
    fn text_muted_style(&self) -> Style {
        Style::default().fg(self.roles().text_muted)
    }

    // Borders and focus
    fn border_style(&self, focused: bool) -> Style {
        let color = if focused { self.roles().focus } else { self.roles().border };
        Style::default().fg(color)
    }

    // Selection and activation
    fn selection_style(&self) -> Style {
        Style::default().fg(self.roles().selection_fg).bg(self.roles().selection_bg)
    }

    /// Style for the row matching the current route. Label weight follows
    /// the active treatment, content does not change.
    fn active_style(&self) -> Style {
        Style::default()
            .bg(self.roles().active_bg)
            .fg(self.roles().accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Badge marker style (filled, readable at one or two cells).
    fn badge_style(&self) -> Style {
        Style::default()
            .bg(self.roles().badge_bg)
            .fg(self.roles().badge_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Separator row style for divider entries.
    fn divider_style(&self) -> Style {
        Style::default().fg(self.roles().divider)
    }
}
