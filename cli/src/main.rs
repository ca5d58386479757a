//! Showcase CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI builds the widget catalog from [`showcase_config`] and hands it to
//! [`showcase_tui`], providing RAII-based terminal management with guaranteed
//! cleanup.
//!
//! ```text
//! main() -> Cli::parse() -> --dump WIDTH -> print page, exit
//!                       \-> (no flag) -> TerminalSession::new() -> run_app() -> App + TUI
//! ```
//!
//! # Event Loop
//!
//! Rendering runs at a fixed ~30 FPS cadence:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking, bounded per frame)
//! 3. Render frame (every healthy widget renders; failed ones show their frame)

use std::{
    fs::{self, File, OpenOptions},
    io::{Stdout, Write, stdout},
    panic,
    path::PathBuf,
    sync::Mutex,
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use tokio::{
    runtime::Builder,
    time::{self, MissedTickBehavior},
};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use showcase_catalog::CatalogOptions;
use showcase_config::{ConfigError, ShowcaseConfig};
use showcase_core::Catalog;
use showcase_tui::{App, draw, dump_page, handle_events};
use showcase_types::UiOptions;

const FRAME_DURATION: Duration = Duration::from_millis(33);

#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Widget catalog with per-widget failure isolation")]
struct Cli {
    /// Print the catalog once as plain text, WIDTH columns wide, and exit
    #[arg(long, value_name = "WIDTH", num_args = 0..=1, default_missing_value = "80")]
    dump: Option<u16>,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.showcase/logs/showcase.log
    if let Some(config_path) = ShowcaseConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("showcase.log"));
    }

    // Fallback: ./.showcase/logs/showcase.log (useful in constrained environments)
    candidates.push(PathBuf::from(".showcase").join("logs").join("showcase.log"));

    candidates
}

/// Routes panic reports to the log. Widget panics are caught by their
/// boundaries, but the default hook would still print over the TUI.
fn install_panic_hook() {
    panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_default();
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_default();
        error!(%location, %message, "panic");
    }));
}

/// Loads the config, falling back to defaults when it can't be read.
fn load_config() -> ShowcaseConfig {
    match ShowcaseConfig::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            let path = err.path().display().to_string();
            match &err {
                ConfigError::Parse { source, .. } => {
                    eprintln!("Couldn't parse {path} ({source}). Using defaults.");
                }
                ConfigError::Read { source, .. } => {
                    eprintln!("Couldn't read {path} ({source}). Using defaults.");
                }
            }
            ShowcaseConfig::default()
        }
    }
}

fn build_catalog(config: &ShowcaseConfig) -> Catalog {
    let catalog = config.catalog();
    showcase_catalog::build(&CatalogOptions {
        include_faulty: catalog.include_faulty,
        sections: catalog.sections,
    })
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Enables raw mode and the alternate screen; on drop, both are restored so
/// the terminal remains usable even after panics or early returns.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();
    install_panic_hook();

    let config = load_config();
    let options = config.ui_options();
    let mut catalog = build_catalog(&config);

    match cli.dump {
        Some(width) => {
            let text = dump_page(&mut catalog, options, width);
            let mut out = stdout().lock();
            writeln!(out, "{text}")?;
            out.flush()?;
            Ok(())
        }
        None => run(catalog, options),
    }
}

fn run(catalog: Catalog, options: UiOptions) -> Result<()> {
    let runtime = Builder::new_current_thread()
        .enable_time()
        .build()
        .context("failed to start runtime")?;

    let mut app = App::new(catalog, options);
    let result = {
        let mut session = TerminalSession::new()?;
        runtime.block_on(run_app(&mut session.terminal, &mut app))
    };

    let summary = app.summary();
    info!(
        total = summary.total,
        failed = summary.failed,
        "Showcase exited"
    );
    result
}

async fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut frames = time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        if handle_events(app)? {
            return Ok(());
        }

        terminal.draw(|frame| draw(frame, app))?;
    }
}
