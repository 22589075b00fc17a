use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use textarea_mentions::config::{load_config, load_config_from_path};
use textarea_mentions::mentions::load_groups_from_path;

mod app;

use app::App;

/// How long to wait for input before running deferred work
const TICK_RATE: Duration = Duration::from_millis(16);

/// Type the trigger character in the text area to mention someone
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file (defaults to ~/.config/textarea-mentions/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// JSON file with an array of mention groups
    #[arg(long, value_name = "PATH")]
    mentions: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    if let Some(path) = textarea_mentions::logging::init() {
        log::debug!("Logging to {}", path.display());
    }

    // Load everything before touching the terminal so errors print normally
    let config = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };
    let groups = match &args.mentions {
        Some(path) => load_groups_from_path(path)?,
        None => app::sample_groups(),
    };

    let app = App::new(config.mentions, groups);

    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, app);

    let _ = execute!(io::stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_RATE)? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
