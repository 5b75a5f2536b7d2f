use anyhow::Result;
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures_util::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, time::Duration};
use tracing::info;

use crate::config::DemoConfig;
use crate::tui::draw::draw;
use crate::tui::event_handlers::{handle_key, KeyResult};
use crate::tui::state::App;
use crate::tui::state_manager::StateManager;

const STATUS_TTL: Duration = Duration::from_secs(3);

// ── Entry point ───────────────────────────────────────────────────────────────

pub async fn run(config: DemoConfig) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    info!(%today, "starting widget demo");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut sm = StateManager::new(App::new(config, today));
    let result = event_loop(&mut terminal, &mut sm).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

// ── Event loop ────────────────────────────────────────────────────────────────

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    sm: &mut StateManager,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(100));

    loop {
        terminal.draw(|f| draw(f, sm.app_mut()))?;

        tokio::select! {
            // Redraw tick; also expires transient status messages
            _ = tick.tick() => {
                let app = sm.app_mut();
                if app.status_at.is_some_and(|at| at.elapsed() >= STATUS_TTL) {
                    app.status.clear();
                    app.status_at = None;
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        if handle_key(sm, key) == KeyResult::Quit {
                            info!("quit requested");
                            return Ok(());
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(err)) => return Err(err.into()),
                    None => return Ok(()),
                }
            }
        }
    }
}
