//! Terminal browser for the paginated artwork catalog.
//!
//! Renders the current page as a table with a leading checkbox column,
//! a paginator, and a "select first N rows" input. Selections persist
//! across page navigation for the lifetime of the session.

mod action;
mod app;
mod fetch;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use catalog::io::client::{DEFAULT_ENDPOINT, HttpCatalogClient};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::action::Action;
use crate::app::App;

const TICK_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Parser)]
#[command(name = "catalog-tui")]
#[command(about = "Browse the artwork catalog with persistent row selection")]
struct Args {
    /// Artwork endpoint to fetch pages from
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Page to open on startup (1-indexed)
    #[arg(long, default_value = "1")]
    page: u32,
}

fn main() -> Result<()> {
    catalog::logging::init();
    let args = Args::parse();

    let client = Arc::new(HttpCatalogClient::new(args.endpoint));
    let mut app = App::new(client);
    app.request_page(args.page.max(1));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.update(action::from_key(key, app.input_mode));
                }
            }
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            app.update(Action::Tick);
            last_tick = Instant::now();
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
