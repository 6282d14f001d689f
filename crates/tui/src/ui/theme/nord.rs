//! Nord palette mapped onto the rail's theme roles, in default and
//! high-contrast variants.

use ratatui::style::Color;

use super::{
    roles::{Theme, ThemeRoles},
    theme_helpers::{darken_rgb, lighten_rgb, mix_rgb},
};

// Polar Night (base surfaces)
pub const N0: Color = Color::Rgb(0x2E, 0x34, 0x40); // #2E3440
pub const N1: Color = Color::Rgb(0x3B, 0x42, 0x52); // #3B4252
pub const N2: Color = Color::Rgb(0x43, 0x4C, 0x5E); // #434C5E
pub const N3: Color = Color::Rgb(0x4C, 0x56, 0x6A); // #4C566A

// Snow Storm (foregrounds)
pub const S0: Color = Color::Rgb(0xD8, 0xDE, 0xE9); // #D8DEE9
pub const S1: Color = Color::Rgb(0xE5, 0xE9, 0xF0); // #E5E9F0
pub const S2: Color = Color::Rgb(0xEC, 0xEF, 0xF4); // #ECEFF4

// Frost (accents)
pub const F1: Color = Color::Rgb(0x88, 0xC0, 0xD0); // #88C0D0
pub const F2: Color = Color::Rgb(0x81, 0xA1, 0xC1); // #81A1C1
pub const F3: Color = Color::Rgb(0x5E, 0x81, 0xAC); // #5E81AC

// Aurora (status)
pub const A_RED: Color = Color::Rgb(0xBF, 0x61, 0x6A); // #BF616A

pub const TEXT_MUTED: Color = Color::Rgb(0x61, 0x6E, 0x88); // #616E88

fn build_nord_roles() -> ThemeRoles {
    ThemeRoles {
        background: N0,
        surface: N1,
        surface_muted: N2,
        border: N2,
        divider: N3,
        text: S0,
        text_secondary: S1,
        text_muted: TEXT_MUTED,
        accent: F1,
        // Accent washed 25% into the panel surface, the terminal analogue
        // of a translucent active highlight.
        active_bg: mix_rgb(F1, N1, 0.25),
        badge_bg: A_RED,
        badge_fg: S2,
        selection_bg: F3,
        selection_fg: S2,
        focus: F1,
        ripple: F2,
    }
}

/// Default Nord theme.
#[derive(Debug, Clone)]
pub struct NordTheme {
    roles: ThemeRoles,
}

impl NordTheme {
    pub fn new() -> Self {
        Self {
            roles: build_nord_roles(),
        }
    }
}

impl Default for NordTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for NordTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

/// High-contrast Nord variant: darker surfaces, brighter foregrounds.
#[derive(Debug, Clone)]
pub struct NordThemeHighContrast {
    roles: ThemeRoles,
}

impl NordThemeHighContrast {
    pub fn new() -> Self {
        let base = build_nord_roles();
        Self {
            roles: ThemeRoles {
                background: darken_rgb(base.background, 0.75),
                surface: darken_rgb(base.surface, 0.80),
                surface_muted: darken_rgb(base.surface_muted, 0.80),
                text: S2,
                text_secondary: S2,
                text_muted: lighten_rgb(base.text_muted, 1.25),
                active_bg: mix_rgb(F1, darken_rgb(N1, 0.80), 0.35),
                ..base
            },
        }
    }
}

impl Default for NordThemeHighContrast {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for NordThemeHighContrast {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}
