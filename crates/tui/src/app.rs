//! The terminal loop.
//!
//! Owns [`AppState`] on the calling thread. Key presses and finished
//! requests both become [`Msg`]s and go through [`update`]; the commands it
//! returns are spawned on the tokio runtime and report back over an
//! unbounded channel that is drained between frames.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mazzura_client::ApiClient;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info};

use crate::command::Command;
use crate::input::key_to_msg;
use crate::message::Msg;
use crate::state::AppState;
use crate::update::{init, update};
use crate::view;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Spawns commands and collects their outcomes.
pub struct Dispatcher {
    client: ApiClient,
    handle: Handle,
    tx: UnboundedSender<Msg>,
    rx: UnboundedReceiver<Msg>,
}

impl Dispatcher {
    #[must_use]
    pub fn new(client: ApiClient, handle: Handle) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            client,
            handle,
            tx,
            rx,
        }
    }

    /// Start every command as its own task.
    pub fn spawn_all(&self, commands: Vec<Command>) {
        for command in commands {
            debug!(command = command.name(), "dispatching");
            let client = self.client.clone();
            let tx = self.tx.clone();
            self.handle.spawn(async move {
                let msg = command.execute(&client).await;
                // The loop has exited if the receiver is gone
                let _ = tx.send(msg);
            });
        }
    }

    /// Apply every outcome that has arrived since the last frame.
    pub fn drain(&mut self, state: &mut AppState) {
        while let Ok(msg) = self.rx.try_recv() {
            let commands = update(state, msg);
            self.spawn_all(commands);
        }
    }
}

/// Run the client until the user quits.
///
/// The terminal is restored even when drawing or reading input fails.
pub fn run(client: ApiClient, handle: Handle) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, client, handle);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    client: ApiClient,
    handle: Handle,
) -> io::Result<()> {
    let mut state = AppState::new(client.base_url());
    let mut dispatcher = Dispatcher::new(client, handle);

    info!(base_url = %state.base_url, "starting");
    dispatcher.spawn_all(init());

    while !state.should_quit {
        terminal.draw(|f| view::render(f, &state))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if let Some(msg) = key_to_msg(&state, key) {
                    let commands = update(&mut state, msg);
                    dispatcher.spawn_all(commands);
                }
            }
        }

        dispatcher.drain(&mut state);
    }

    info!("quit");
    Ok(())
}
