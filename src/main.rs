use std::{
    env, io,
    path::PathBuf,
    time::Duration,
};

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};

use burrow::{app::App, config::Config, logging};

fn main() -> Result<()> {
    // Keep the guard alive or buffered log lines are dropped on exit.
    let _guard = logging::init()?;

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "config load failed, using defaults");
            Config::default()
        }
    };
    let start_dir = resolve_start_dir(&config)?;
    info!(dir = %start_dir.display(), "starting browser");

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(start_dir);
    let tick_rate = Duration::from_millis(200);

    // Main event loop: draw, then dispatch at most one key event
    loop {
        terminal.draw(|f| app.draw(f))?;

        if event::poll(tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                if app.on_key(key) {
                    break;
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Start directory resolution: CLI argument first, then the config file,
/// then the process working directory.
fn resolve_start_dir(config: &Config) -> Result<PathBuf> {
    if let Some(arg) = env::args().nth(1) {
        return Ok(PathBuf::from(arg));
    }
    if let Some(dir) = &config.start_dir {
        return Ok(dir.clone());
    }
    Ok(env::current_dir()?)
}
