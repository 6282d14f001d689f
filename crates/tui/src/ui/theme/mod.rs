//! Theme styling module for the rail UI.
//!
//! Defines semantic theme roles, the Nord palette in default and
//! high-contrast variants, and helper builders for Ratatui widgets and
//! styles. Prefer these helpers over hard-coding colors so the rail stays
//! visually consistent with its host.

use std::env;

use tracing::debug;

pub mod nord;
pub mod roles;
pub mod theme_helpers;

pub use nord::{NordTheme, NordThemeHighContrast};
pub use roles::{Theme, ThemeRoles};

/// Selects a theme from an explicit preference, falling back to the
/// `NAVRAIL_THEME` environment variable and then the default palette.
pub fn load(preferred_theme: Option<&str>) -> Box<dyn Theme> {
    let env_theme = env::var("NAVRAIL_THEME").ok();
    let name = preferred_theme.or(env_theme.as_deref()).unwrap_or("nord");
    match resolve(name) {
        Some(theme) => theme,
        None => {
            debug!(theme = name, "unknown theme name; falling back to nord");
            Box::new(NordTheme::new())
        }
    }
}

fn resolve(name: &str) -> Option<Box<dyn Theme>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "nord" => Some(Box::new(NordTheme::new())),
        "nord-high-contrast" | "nord-hc" => Some(Box::new(NordThemeHighContrast::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_and_unknown_names() {
        assert!(resolve("nord").is_some());
        assert!(resolve("Nord-HC").is_some());
        assert!(resolve("solarized").is_none());
    }
}
