mod app;
mod config;
mod date;
mod error;
mod screen;
mod ui;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use app::{App, KeyOutcome};
use config::Config;
use date::DateLocale;
use ui::layout::Platform;

#[derive(Parser, Debug)]
#[command(name = "diary")]
#[command(about = "Daily diary - eight time slots for today")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long)]
    config: Option<String>,

    /// Locale for the date label (e.g. en_GB); overrides config and LANG
    #[arg(long)]
    locale: Option<String>,

    /// Open the page for this date (YYYY-MM-DD) instead of today
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_file.as_deref())?;

    // Load config
    let config_path = cli
        .config
        .unwrap_or_else(|| Config::default_path().display().to_string());
    let config = Config::load(&config_path)?;

    let locale = DateLocale::resolve(cli.locale.as_deref().or(config.locale.as_deref()));
    tracing::info!("Using locale {}", locale.name());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Mount the diary page
    let mut app = App::new(config, locale, cli.date, Platform::detect());

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Logs go to a file when asked; stderr only gets warnings so the TUI stays clean
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "daily_diary=info".into()),
                )
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| "daily_diary=warn".into()),
                )
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
    Ok(())
}

/// Draw, poll, dispatch; all state changes happen inside key handlers
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if app.handle_key(key)? == KeyOutcome::Quit {
                    return Ok(());
                }
            }
        }
    }
}
