//! Panel runner — main loop that wires everything together.
//!
//! Creates the terminal, multiplexes keyboard input, render ticks, and
//! HTTP completions with `tokio::select!`, and owns the scan poller: a
//! cancellable task created when the panel enters `Active` and aborted
//! when it leaves (or on teardown). Aborting does not cancel an
//! in-flight request; its late completion is dropped by the reducer.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::debug;

use crate::reader::{Command, ReaderClient};

use super::app::{PanelApp, ScanState};
use super::event::PanelMessage;
use super::layout;

/// Poll cadence for inventory data while scanning.
const POLL_PERIOD: Duration = Duration::from_secs(1);

/// Run the panel. Blocks until quit.
pub async fn run(client: ReaderClient) -> anyhow::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, client).await;

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: ReaderClient,
) -> anyhow::Result<()> {
    let mut app = PanelApp::new(client.base_url());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut poller: Option<JoinHandle<()>> = None;
    let mut render_interval = interval(Duration::from_millis(33)); // ~30fps

    loop {
        tokio::select! {
            _ = render_interval.tick() => {
                terminal.draw(|f| layout::draw(f, &mut app))?;
            }
            Some(msg) = rx.recv() => {
                app.update(msg);
            }
            // Poll crossterm events (non-blocking via tokio::task::spawn_blocking)
            result = tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            }) => {
                if let Ok(Some(Event::Key(key))) = result {
                    app.update(PanelMessage::Input(key));
                }
            }
        }

        if let Some(command) = app.pending_command.take() {
            spawn_command(client.clone(), command, tx.clone());
        }
        sync_poller(&mut poller, &app, &client, &tx);

        if app.should_quit {
            break;
        }
    }

    if let Some(handle) = poller.take() {
        handle.abort();
    }
    Ok(())
}

/// Fire one command in the background; the completion comes back through
/// the panel channel.
fn spawn_command(
    client: ReaderClient,
    command: Command,
    tx: mpsc::UnboundedSender<PanelMessage>,
) {
    tokio::spawn(async move {
        let outcome = client.command(command).await.map_err(|e| e.to_string());
        let _ = tx.send(PanelMessage::CommandDone { command, outcome });
    });
}

/// Keep the poller's existence in lockstep with the scan state.
fn sync_poller(
    poller: &mut Option<JoinHandle<()>>,
    app: &PanelApp,
    client: &ReaderClient,
    tx: &mpsc::UnboundedSender<PanelMessage>,
) {
    let want = app.scan == ScanState::Active;
    match (want, poller.is_some()) {
        (true, false) => {
            debug!("scan active: starting inventory poller");
            *poller = Some(spawn_poller(client.clone(), tx.clone()));
        }
        (false, true) => {
            debug!("scan inactive: stopping inventory poller");
            if let Some(handle) = poller.take() {
                handle.abort();
            }
        }
        _ => {}
    }
}

/// Spawn the 1 Hz inventory poller.
fn spawn_poller(
    client: ReaderClient,
    tx: mpsc::UnboundedSender<PanelMessage>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(POLL_PERIOD);
        // interval fires immediately; the first poll waits a full period,
        // matching the reference timer.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let outcome = client.inventory_data().await.map_err(|e| e.to_string());
            if tx.send(PanelMessage::Poll(outcome)).is_err() {
                break;
            }
        }
    })
}
