//! lookahead TUI - debounced autocomplete in the terminal.
//!
//! The left side hosts the autocomplete widget; the right side mirrors the
//! shared result store through its own subscription.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures_util::StreamExt;
use lookahead_core::config::{Config, Directories};
use lookahead_tui::app::App;
use lookahead_tui::headless::{build_controller, run_query};
use lookahead_tui::render::render_ui;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;

use cli::{Cli, Commands};

/// Set up logging with file output. TUI must log to file since it uses the terminal for display.
fn setup_logging(debug_flag: bool) {
    let level = if debug_flag || cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let log_dir = std::env::temp_dir();
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let log_filename = format!("lookahead-tui-{timestamp}.log");

    #[cfg(unix)]
    {
        let symlink_path = log_dir.join("lookahead-tui.log");
        let _ = std::fs::remove_file(&symlink_path);
        let _ = std::os::unix::fs::symlink(log_dir.join(&log_filename), symlink_path);
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    std::mem::forget(guard);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .with(filter)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => Directories::new()?.config_file,
    };
    let mut config =
        Config::load(&path).with_context(|| format!("loading {}", path.display()))?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    tracing::debug!("Effective config: {:?}", config);
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let config = load_config(&cli)?;

    match cli.command {
        Some(Commands::Query { query }) => {
            let results = run_query(&config, &query).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Some(Commands::Config) => println!("{}", serde_json::to_string_pretty(&config)?),
        Some(Commands::Tui) | None => run_tui(&config).await?,
    }

    Ok(())
}

async fn run_tui(config: &Config) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &Config,
) -> Result<()> {
    let mut app = App::new(build_controller(config));
    let mut mirror = app.controller.store().subscribe();
    let mut event_stream = EventStream::new();
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| render_ui(f, &mut app))?;
            needs_render = false;
        }

        tokio::select! {
            Some(continuation) = app.controller.next_continuation() => {
                app.controller.handle(continuation);
                needs_render = true;
            }

            Ok(()) = mirror.changed() => {
                app.mirror = mirror.borrow_and_update().clone();
                needs_render = true;
            }

            Some(event_result) = event_stream.next() => {
                match event_result {
                    Ok(event) => needs_render |= app.handle_event(&event),
                    Err(e) => tracing::error!("Event stream error: {}", e),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
