use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod api;
mod app;
mod config;
mod error;
mod help;
mod input;
mod layout;
mod notification;
mod recipes;
mod scroll;
mod suggestions;
#[cfg(test)]
mod test_utils;
mod theme;
mod visit;
mod widgets;

use app::App;
use error::LarderError;
use visit::VisitTracker;

/// Find recipes by ingredient
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Find recipes by the ingredients you have, with live ingredient suggestions"
)]
struct Args {
    /// Ingredients to search for right away, e.g. "chicken, garlic"
    query: Option<String>,

    /// API key for the recipe service (overrides the config file)
    #[arg(long)]
    api_key: Option<String>,

    /// Base URL of the recipe service (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,

    /// Show the welcome screen again on this start
    #[arg(long)]
    reset_welcome: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/larder-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/larder-debug.log")
            .expect("Failed to open /tmp/larder-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== LARDER DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let config::ConfigResult { config, warning } = config::load_config();
    let config = config.with_overrides(args.api_key, args.base_url);

    validate_base_url(&config.api.base_url)?;

    let visits = VisitTracker::from_default_location();
    if args.reset_welcome
        && let Err(e) = visits.reset()
    {
        log::warn!("Failed to reset welcome marker: {}", e);
    }
    let first_visit = visits.check_and_mark();

    let terminal = init_terminal()?;

    let mut app = App::new(&config, first_visit);
    if let Some(warning) = &warning {
        app.notification.show_warning(warning);
    }

    setup_api_worker(&mut app, &config);

    if let Some(query) = args.query.as_deref() {
        app.input.set_query(query);
        app.search_recipes();
    }

    let result = run(terminal, app);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== LARDER DEBUG SESSION ENDED ===");

    Ok(())
}

/// Reject a base URL the HTTP client could never use, before touching the terminal
fn validate_base_url(base_url: &str) -> Result<(), LarderError> {
    let url = reqwest::Url::parse(base_url).map_err(|e| LarderError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(LarderError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, mouse capture and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(
        stdout(),
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    ) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(
                stdout(),
                DisableMouseCapture,
                DisableBracketedPaste,
                LeaveAlternateScreen
            );
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the API worker thread and channels
///
/// The worker runs even without an API key; it answers every request with a
/// configuration error so the UI shows the usual failure message.
fn setup_api_worker(app: &mut App, config: &config::Config) {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.api.set_channels(request_tx, response_rx);

    api::worker::spawn_worker(&config.api, request_rx, response_tx);
}
