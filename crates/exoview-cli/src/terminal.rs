//! Terminal lifecycle and the interactive event loop.

use std::io::{self, Stdout};

use crossterm::ExecutableCommand;
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use exoview_client::ArchiveClient;
use exoview_core::PlanetRecord;
use futures::StreamExt;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::oneshot;

use crate::Result;
use crate::app::App;
use crate::config::ExoviewConfig;
use crate::ui;

type Backend = CrosstermBackend<Stdout>;

/// Outcome delivered by the loader task.
pub type LoadOutcome = std::result::Result<Vec<PlanetRecord>, String>;

/// Enter raw mode and the alternate screen with mouse capture.
pub fn setup_terminal() -> io::Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    terminal.clear()?;
    Ok(terminal)
}

/// Undo [`setup_terminal`].
pub fn restore_terminal(terminal: &mut Terminal<Backend>) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Spawn the archive request; the receiver yields its outcome once.
pub fn spawn_loader(client: ArchiveClient) -> oneshot::Receiver<LoadOutcome> {
    let (tx, rx) = oneshot::channel();
    log::debug!("Spawning archive load from {}", client.endpoint());
    tokio::spawn(async move {
        let outcome = client.fetch_records().await.map_err(|e| e.to_string());
        if let Err(e) = &outcome {
            log::error!("Archive load failed: {e}");
        }
        if tx.send(outcome).is_err() {
            log::debug!("UI exited before the load finished");
        }
    });
    rx
}

/// Run the interactive browser until the user quits.
pub async fn run(config: &ExoviewConfig) -> Result<()> {
    let client = ArchiveClient::new(&config.archive)?;
    let app = App::new(config.ui.methods.clone());
    let loader = spawn_loader(client);

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, app, loader).await;
    restore_terminal(&mut terminal)?;
    result
}

async fn run_app(
    terminal: &mut Terminal<Backend>,
    mut app: App,
    mut loader: oneshot::Receiver<LoadOutcome>,
) -> Result<()> {
    let mut events = EventStream::new();
    let mut loading = true;

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            outcome = &mut loader, if loading => {
                loading = false;
                match outcome {
                    Ok(outcome) => app.on_load(outcome),
                    Err(_) => app.on_load(Err::<Vec<PlanetRecord>, _>("loader task ended without a result")),
                }
            }
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => app.on_key(key),
                    Some(Ok(Event::Mouse(mouse))) => app.on_mouse(mouse),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }
        }

        if app.should_quit() {
            break;
        }
    }

    log::info!("Exiting: {app:?}");
    Ok(())
}
