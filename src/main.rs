//! `Stageflow` operator console.
//!
//! Usage: `stageflow [SCENARIO_ID]`

use anyhow::Context;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::sync::{Arc, Mutex};
use std::{io, panic, time::Duration};
use tracing_subscriber::EnvFilter;

use stageflow::app::App;
use stageflow::config::Config;
use stageflow::constants::console::POLL_INTERVAL_MS;
use stageflow::input::command_for_key;
use stageflow::screen::{PresentationEngine, ScreenStore};
use stageflow::services::{
    BroadcastNotifier, FileContentRepository, FileScenarioRepository, SettingsProvider, SharedSettings,
};
use stageflow::types::ScenarioId;
use stageflow::ui;

// Logs go to a file; stdout belongs to the terminal UI
fn init_logging(config: &Config) -> anyhow::Result<()> {
    fs_err::create_dir_all(&config.data_dir)?;
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_file())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stageflow=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))
}

// Helper function to ensure the terminal is cleaned up on exit
fn cleanup_terminal<B: Backend + std::io::Write>(terminal: &mut Terminal<B>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;
    init_logging(&config)?;
    tracing::info!(
        "Starting {} {} with data in {}",
        config.app_name(),
        config.app_version(),
        config.data_dir.display()
    );

    let settings = Arc::new(SharedSettings::new(config.display_constraints()));
    let notifier = Arc::new(BroadcastNotifier::new());
    let updates = notifier.subscribe();
    let engine = PresentationEngine::new(
        Arc::new(ScreenStore::new()),
        Arc::new(FileContentRepository::new(config.texts_dir())),
        Arc::new(FileScenarioRepository::new(config.scenarios_dir())),
        Arc::clone(&settings) as Arc<dyn SettingsProvider>,
        notifier,
    );

    let mut app = App::new(engine, settings, updates);
    if let Some(id) = std::env::args().nth(1) {
        app.open_scenario(&ScenarioId::new(id)).await;
    }

    // Restore the terminal before the default panic output
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app).await;

    if let Err(e) = cleanup_terminal(&mut terminal) {
        eprintln!("Error cleaning up terminal: {e:?}");
    }

    if let Err(err) = &res {
        tracing::error!("Console stopped: {err:?}");
    }
    res
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> anyhow::Result<()> {
    loop {
        app.handle_updates();

        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = command_for_key(key) {
                    app.handle_command(command).await;
                }
            }
        } else {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }

        if app.should_quit() {
            break;
        }
    }
    tracing::info!("Console closed");
    Ok(())
}
