//! # Navrail TUI Library
//!
//! A collapsible application navigation rail for the terminal, built on
//! Ratatui with a component-based architecture.
//!
//! ## Key Features
//!
//! - Declarative entry descriptors mapped into rendered rows
//! - Active-route synchronization with a router collaborator
//! - Expand/collapse toggle with keyboard and mouse bindings
//! - Transient ripple feedback on mouse-down
//! - Focus management via rat-focus
//!
//! ## Architecture
//!
//! The rail is a self-contained component that handles its own events
//! and rendering; the runtime owns the terminal, routes input, executes
//! reported effects, and pumps router notifications back into the view.

mod app;
mod router;
mod ui;

use anyhow::Result;

pub use ui::runtime::RunOptions;

/// Runs the rail host application until the user quits.
///
/// Sets up the terminal, builds the rail from the supplied entries, and
/// drives the event loop. Returns when the user quits (`q`/Ctrl+C) or on
/// a terminal setup failure.
pub async fn run(options: RunOptions) -> Result<()> {
    ui::runtime::run_app(options).await
}
