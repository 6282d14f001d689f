use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use navrail_tui::RunOptions;
use navrail_types::NavEntry;
use tracing::{Level, warn};

/// Collapsible navigation rail demo.
#[derive(Debug, Parser)]
#[command(name = "navrail", version, about)]
struct Cli {
    /// JSON file holding the entry list. When omitted, a config-dir
    /// entries.json is tried, then a built-in default list.
    #[arg(long)]
    entries: Option<PathBuf>,

    /// Theme name (nord, nord-high-contrast).
    #[arg(long)]
    theme: Option<String>,

    /// Route the router starts at.
    #[arg(long, default_value = "/home")]
    start: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let entries = load_entries(cli.entries.as_deref())?;

    navrail_tui::run(RunOptions {
        entries,
        theme: cli.theme,
        start_route: cli.start,
    })
    .await
}

fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::INFO)
        .try_init();
}

/// Resolves the entry list: an explicit file must parse; the implicit
/// config-dir file degrades to the defaults with a warning.
fn load_entries(explicit: Option<&Path>) -> Result<Vec<NavEntry>> {
    if let Some(path) = explicit {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading entries from {}", path.display()))?;
        return navrail_types::parse_entries(&text).with_context(|| format!("parsing entries from {}", path.display()));
    }

    if let Some(config) = dirs_next::config_dir().map(|dir| dir.join("navrail").join("entries.json"))
        && config.exists()
    {
        match std::fs::read_to_string(&config)
            .map_err(anyhow::Error::from)
            .and_then(|text| navrail_types::parse_entries(&text).map_err(anyhow::Error::from))
        {
            Ok(entries) => return Ok(entries),
            Err(e) => warn!("ignoring {}: {e}", config.display()),
        }
    }

    Ok(default_entries())
}

fn default_entries() -> Vec<NavEntry> {
    vec![
        NavEntry::item("/home", "Home").with_icon("house"),
        NavEntry::item("/reports", "Reports").with_icon("chart").with_badge("3"),
        NavEntry::item("/inbox", "Inbox").with_icon("mail"),
        NavEntry::divider(),
        NavEntry::item("/profile", "Profile").with_avatar(None, Some("Ada Lovelace".into())),
        NavEntry::item("/settings", "Settings").with_icon("gear"),
    ]
}
