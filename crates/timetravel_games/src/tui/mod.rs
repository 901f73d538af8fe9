//! Terminal UI for Time Travel Tic-Tac-Toe.

pub mod app;
pub mod input;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Write};
use tokio::time::{Duration, sleep};
use tracing::{debug, error, info, instrument};
use tracing_subscriber::EnvFilter;

use crate::config::TuiConfig;
use app::App;
use input::key_action;
use ui::HitMap;

/// Sends tracing output to the configured log file so it never draws over
/// the terminal UI.
pub fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Switches `out` to the alternate screen, capturing the mouse if asked.
fn enter_screen<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, EnterAlternateScreen, EnableMouseCapture)
    } else {
        execute!(out, EnterAlternateScreen)
    }
}

/// Leaves the alternate screen, releases the mouse and shows the cursor.
fn leave_screen<W: Write>(out: &mut W, mouse: bool) -> io::Result<()> {
    if mouse {
        execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
    } else {
        execute!(out, LeaveAlternateScreen, Show)
    }
}

/// Undoes [`enter_screen`] and raw mode.
///
/// Every step is attempted even if an earlier one fails; the first error is
/// returned.
fn restore_terminal<W: Write>(out: &mut W, mouse: bool) -> Result<()> {
    let raw = disable_raw_mode().context("Failed to disable raw mode");
    let screen = leave_screen(out, mouse).context("Failed to leave alternate screen");
    raw.and(screen)
}

/// Enables raw mode and builds the terminal, restoring it if any step fails.
fn setup_terminal(mouse: bool) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    let terminal = enter_screen(&mut stdout, mouse)
        .context("Failed to enter alternate screen")
        .and_then(|()| {
            Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
        });
    if let Err(err) = &terminal {
        error!(error = ?err, "Terminal setup failed");
        if let Err(restore_err) = restore_terminal(&mut io::stdout(), mouse) {
            error!(error = ?restore_err, "Failed to restore terminal");
        }
    }
    terminal
}

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored before returning, even when setup or the event
/// loop fails.
#[instrument(skip(config))]
pub async fn run_tui(config: TuiConfig) -> Result<()> {
    init_tracing(&config)?;
    info!(?config, "Starting Time Travel Tic-Tac-Toe");

    let mouse = *config.mouse();
    let mut terminal = setup_terminal(mouse)?;

    let app = App::new(*config.move_order());
    let tick_rate = Duration::from_millis(*config.tick_rate_ms());
    let res = run_app(&mut terminal, app, tick_rate).await;

    let restored = restore_terminal(terminal.backend_mut(), mouse);
    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    if let Err(err) = &restored {
        error!(error = ?err, "Failed to restore terminal");
    }
    info!("Exiting");
    res.and(restored)
}

/// Draw, poll, dispatch. One input event is handled per iteration.
#[instrument(skip_all)]
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    let mut hits = HitMap::default();

    loop {
        terminal.draw(|f| hits = ui::draw(f, &app))?;

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if let Some(action) = key_action(key.code, app.focus()) {
                        app.apply(action);
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    match hits.action_at(mouse.column, mouse.row) {
                        Some(action) => app.apply(action),
                        None => debug!(column = mouse.column, row = mouse.row, "Click missed"),
                    }
                }
                _ => {}
            }
        }

        if app.should_quit() {
            return Ok(());
        }

        sleep(Duration::from_millis(10)).await;
    }
}
