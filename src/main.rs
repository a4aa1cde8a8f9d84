mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

use config::Cli;
use controller::{AppController, FetchCompletion};
use model::SearchClient;
use view::AppView;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!(term = %cli.term, endpoint = %cli.endpoint, "=== itunes-rs starting ===");

    let client = SearchClient::new(cli.search_config())?;
    let (mut controller, completions) = AppController::new(client, cli.term.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    controller.start_initial_load();

    let res = run_app(&mut terminal, &mut controller, completions);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("itunes-rs shutting down");
    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
    mut completions: UnboundedReceiver<FetchCompletion>,
) -> io::Result<()> {
    loop {
        // Fetch results are applied here and nowhere else
        while let Ok(completion) = completions.try_recv() {
            controller.apply_completion(completion);
        }

        controller.model.auto_clear_old_errors();

        terminal.draw(|f| {
            AppView::render(f, controller.model(), controller.transport());
        })?;

        if event::poll(INPUT_POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key);
            }
        }

        if controller.should_quit() {
            break;
        }
    }

    Ok(())
}
