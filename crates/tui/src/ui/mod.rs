//! UI layer: components, theme, runtime, and shared helpers.

pub mod components;
pub(crate) mod main_view;
pub mod runtime;
pub mod theme;
pub mod utils;
pub mod widgets;
