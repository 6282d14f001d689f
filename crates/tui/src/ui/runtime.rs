//! Runtime: unified event loop and input routing for the rail host.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a single event loop that handles input and animations.
//! - Route events to the main view and execute returned `Effect`s.
//! - Pump the router's queued route changes back into the view, so both
//!   notification channels reach the rail the same way.
//!
//! Ticking strategy: fast interval (125 ms) only while ripples animate;
//! long interval (5 s) when idle, so an idle rail costs nothing.

use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use navrail_types::{Effect, Msg, NavEntry, Router};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*};
use tokio::{
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::debug;

use crate::app::App;
use crate::router::MemoryRouter;
use crate::ui::main_view::MainView;

/// Host configuration for [`run_app`].
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Declarative entry list the rail renders.
    pub entries: Vec<NavEntry>,
    /// Preferred theme name; falls back to the environment and default.
    pub theme: Option<String>,
    /// Route the router starts at.
    pub start_route: String,
}

/// Spawn a dedicated input thread that blocks on terminal input and
/// forwards `crossterm` events over a Tokio channel. Keeping `read()` on
/// its own OS thread avoids lost or delayed events in some terminals.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(500);
    std::thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!("failed to read event: {e}");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame, rebuilding focus first so structure changes are
/// reflected in the focus ring.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(&app.nav_rail, Some(old_focus));
    if app.focus.focused().is_none() {
        main_view.restore_focus(app);
    }
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Handle raw crossterm input events and update the view.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Executes effects reported by components.
fn execute_effects(app: &mut App, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::Navigate(path) => {
                debug!(path, "navigation requested");
                app.router.navigate(&path);
            }
        }
    }
}

/// Delivers every queued route change to the view. Both the history and
/// the application channel arrive through the same message, so the rail
/// recomputes its active row identically for either.
fn pump_router(app: &mut App, main_view: &mut MainView) -> Vec<Effect> {
    let changes = app.router.drain_changes();
    let mut effects = Vec::new();
    for change in changes {
        effects.extend(main_view.handle_message(app, Msg::RouteChanged(change)));
    }
    effects
}

/// Entry point for the TUI runtime: sets up the terminal, spawns the
/// input thread, runs the event loop, and performs cleanup on exit.
pub async fn run_app(options: RunOptions) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new()?;

    let mut app = App::new(MemoryRouter::new(options.start_route), options.theme.as_deref());
    {
        let App { nav_rail, router, .. } = &mut app;
        nav_rail.set_entries(options.entries, router);
        nav_rail.activate(router);
    }

    let mut terminal = setup_terminal()?;

    // Ticking strategy: fast while animating, very slow when idle.
    let fast_interval = Duration::from_millis(125);
    let idle_interval = Duration::from_millis(5000);
    let mut current_interval = idle_interval;
    let mut ticker = time::interval(current_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(&mut terminal, &mut app, &mut main_view)?;

    loop {
        let needs_animation = app.nav_rail.is_animating();
        let target_interval = if needs_animation { fast_interval } else { idle_interval };
        if target_interval != current_interval {
            current_interval = target_interval;
            ticker = time::interval(current_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        }

        let mut effects: Vec<Effect> = Vec::new();
        let mut should_quit = false;
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                match maybe_event {
                    Some(Event::Key(key)) if is_quit(&key) => should_quit = true,
                    // History traversal lives on the host, not the rail:
                    // the rail only observes the resulting route changes.
                    Some(Event::Key(key)) if key.code == KeyCode::Left && key.modifiers.contains(KeyModifiers::ALT) => {
                        app.router.back();
                    }
                    Some(Event::Key(key)) if key.code == KeyCode::Right && key.modifiers.contains(KeyModifiers::ALT) => {
                        app.router.forward();
                    }
                    Some(input_event) => {
                        effects.extend(handle_input_event(&mut app, &mut main_view, input_event));
                    }
                    None => should_quit = true,
                }
            }
            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(&mut app, Msg::Tick));
            }
        }
        if should_quit {
            break;
        }

        execute_effects(&mut app, effects);
        let route_effects = pump_router(&mut app, &mut main_view);
        execute_effects(&mut app, route_effects);
        render(&mut terminal, &mut app, &mut main_view)?;
    }

    let App { nav_rail, router, .. } = &mut app;
    nav_rail.deactivate(router);
    cleanup_terminal(&mut terminal)?;
    Ok(())
}
