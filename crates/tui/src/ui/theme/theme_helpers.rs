use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};

use super::roles::{Theme, ThemeRoles};

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(
            t,
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let dr = (r as f32 * f).round().clamp(0.0, 255.0) as u8;
            let dg = (g as f32 * f).round().clamp(0.0, 255.0) as u8;
            let db = (b as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(dr, dg, db)
        }
        other => other,
    }
}

/// Lighten an RGB color by a multiplicative factor (>= 1.0).
pub fn lighten_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.max(1.0);
            let lr = (r as f32 * f).round().clamp(0.0, 255.0) as u8;
            let lg = (g as f32 * f).round().clamp(0.0, 255.0) as u8;
            let lb = (b as f32 * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(lr, lg, lb)
        }
        other => other,
    }
}

/// Mix `top` into `base` at the given opacity (0.0 keeps `base`, 1.0 yields
/// `top`). Non-RGB inputs return `top` unchanged.
pub fn mix_rgb(top: Color, base: Color, opacity: f32) -> Color {
    match (top, base) {
        (Color::Rgb(tr, tg, tb), Color::Rgb(br, bg, bb)) => {
            let a = opacity.clamp(0.0, 1.0);
            let ch = |t: u8, b: u8| (t as f32 * a + b as f32 * (1.0 - a)).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(ch(tr, br), ch(tg, bg), ch(tb, bb))
        }
        _ => top,
    }
}

/// Color of a ripple cell at `frame` out of `total` frames: the overlay
/// starts near the base ripple color and fades into the surface.
pub fn ripple_fade<T: Theme + ?Sized>(theme: &T, frame: u8, total: u8) -> Color {
    let ThemeRoles { ripple, surface, .. } = *theme.roles();
    let total = total.max(1);
    let progress = (frame.min(total) as f32) / total as f32;
    // Start at a subdued 35% wash and fade out.
    mix_rgb(ripple, surface, 0.35 * (1.0 - progress))
}

/// Secondary button style (outline-like, rely on border color in Block).
pub fn button_secondary_style<T: Theme + ?Sized>(theme: &T, enabled: bool, selected: bool) -> Style {
    if enabled {
        let ThemeRoles {
            accent, selection_bg, ..
        } = theme.roles().clone();
        let style = Style::default().fg(accent);
        if selected {
            return style.bg(selection_bg);
        }
        style
    } else {
        theme.text_muted_style()
    }
}

/// Visual treatment of a rendered button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonType {
    Primary,
    Secondary,
}

/// Options controlling how [`render_button`] draws a button.
#[derive(Debug, Clone, Copy)]
pub struct ButtonRenderOptions {
    pub enabled: bool,
    pub focused: bool,
    pub selected: bool,
    pub borders: Borders,
    pub kind: ButtonType,
}

impl ButtonRenderOptions {
    pub fn new(enabled: bool, focused: bool, selected: bool, borders: Borders, kind: ButtonType) -> Self {
        Self {
            enabled,
            focused,
            selected,
            borders,
            kind,
        }
    }
}

/// Renders a standard button.
pub fn render_button<T: Theme + ?Sized>(frame: &mut Frame, area: Rect, label: &str, theme: &T, options: ButtonRenderOptions) {
    let border_style = if options.enabled {
        theme.border_style(options.focused)
    } else {
        theme.text_muted_style()
    };

    let button_style = match (options.enabled, options.kind) {
        (true, ButtonType::Primary) => Style::default()
            .bg(theme.roles().accent)
            .fg(theme.roles().background)
            .add_modifier(Modifier::BOLD),
        (true, ButtonType::Secondary) => button_secondary_style(theme, true, options.selected),
        (false, _) => theme.text_muted_style(),
    };

    let padding = if options.borders.is_empty() {
        Padding::uniform(1) // Match bordered button size when borderless
    } else {
        Padding::uniform(0)
    };

    frame.render_widget(
        Paragraph::new(label)
            .centered()
            .block(
                Block::bordered()
                    .borders(options.borders)
                    .border_style(border_style)
                    .padding(padding),
            )
            .style(button_style),
        area,
    );
}

/// Build alternating key/description spans for the hint strip.
pub fn build_hint_spans<'a, T: Theme + ?Sized>(theme: &T, pairs: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (key, description) in pairs {
        spans.push(Span::styled(*key, Style::default().fg(theme.roles().accent).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(*description, theme.text_muted_style()));
    }
    spans
}
