use std::thread;
use std::time::Duration;

use anyhow::Context;
use sweepr_common::config::Config;
use sweepr_core::scanner::PollOutcome;
use sweepr_core::session::{Session, Stage};
use tracing::info;

use crate::terminal::input::{Input, InputHandle};
use crate::terminal::screen::TerminalGuard;
use crate::terminal::view;

/// How long the loop sleeps on the keyboard while there is nothing to poll.
const IDLE_WAIT: Duration = Duration::from_millis(500);

/// Runs the UI until the operator quits. The terminal is restored on every way out.
pub fn run(session: &mut Session, cfg: &Config) -> anyhow::Result<()> {
    let mut terminal = TerminalGuard::enter()?;
    let mut input = InputHandle::new();
    input.start();

    let mut dirty = true;
    loop {
        if dirty {
            let (cols, rows) = terminal.size()?;
            terminal
                .paint(&view::render(session, cols, rows))
                .context("failed to draw")?;
            dirty = false;
        }

        let mut next = if session.stage() == Stage::Scanning {
            if let PollOutcome::Discovered(_) = session.tick() {
                dirty = true;
            }
            thread::sleep(cfg.tick);
            input.poll()?
        } else {
            input.wait(IDLE_WAIT)?
        };

        while let Some(event) = next {
            if let Input::Action(action) = event {
                if session.handle(action)?.is_break() {
                    info!("Quit requested");
                    return Ok(());
                }
            }
            dirty = true;
            next = input.poll()?;
        }
    }
}
