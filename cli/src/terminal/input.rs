use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::thread;
use std::time::Duration;

use anyhow::bail;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use sweepr_core::session::Action;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    Resize,
}

/// Reads terminal events on a background thread and hands them over as [`Input`].
pub struct InputHandle {
    rx: mpsc::Receiver<Input>,
    tx: Option<mpsc::Sender<Input>>,
}

impl InputHandle {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { rx, tx: Some(tx) }
    }

    pub fn start(&mut self) {
        if let Some(tx) = self.tx.take() {
            thread::spawn(move || {
                loop {
                    let input = match event::read() {
                        Ok(Event::Key(key_event)) => map_key(key_event).map(Input::Action),
                        Ok(Event::Resize(..)) => Some(Input::Resize),
                        Ok(_) => None,
                        Err(e) => {
                            debug!("terminal input closed: {e}");
                            break;
                        }
                    };
                    let Some(input) = input else { continue };
                    if tx.send(input).is_err() {
                        break;
                    }
                }
            });
        }
    }

    /// Next pending input, if any. Never blocks.
    pub fn poll(&self) -> anyhow::Result<Option<Input>> {
        match self.rx.try_recv() {
            Ok(input) => Ok(Some(input)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => bail!("input thread stopped"),
        }
    }

    /// Blocks for up to `timeout` until the next input arrives.
    pub fn wait(&self, timeout: Duration) -> anyhow::Result<Option<Input>> {
        match self.rx.recv_timeout(timeout) {
            Ok(input) => Ok(Some(input)),
            Err(RecvTimeoutError::Timeout) => Ok(None),
            Err(RecvTimeoutError::Disconnected) => bail!("input thread stopped"),
        }
    }
}

fn map_key(key_event: KeyEvent) -> Option<Action> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
