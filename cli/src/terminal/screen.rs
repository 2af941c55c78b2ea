use std::io::{self, Stdout, Write};

use anyhow::Context;
use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use super::colors;
use super::view::Frame;

const BACKDROP: &str = "▚";

/// Owns the terminal while the UI runs; dropping it puts the terminal back.
pub struct TerminalGuard {
    out: Stdout,
}

impl TerminalGuard {
    pub fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut guard = Self { out: io::stdout() };
        execute!(guard.out, EnterAlternateScreen, Hide).context("failed to enter the alternate screen")?;
        Ok(guard)
    }

    pub fn size(&self) -> anyhow::Result<(u16, u16)> {
        terminal::size().context("failed to read the terminal size")
    }

    pub fn paint(&mut self, frame: &Frame) -> io::Result<()> {
        let out = &mut self.out;

        queue!(
            out,
            MoveTo(0, 0),
            SetBackgroundColor(colors::STATUS_BG),
            SetForegroundColor(colors::STATUS_FG),
            Print(&frame.status),
            ResetColor
        )?;

        let backdrop = BACKDROP.repeat(usize::from(frame.cols));
        queue!(out, SetForegroundColor(colors::BACKDROP))?;
        for y in 1..frame.rows {
            queue!(out, MoveTo(0, y), Print(&backdrop))?;
        }
        queue!(out, ResetColor)?;

        let panel = &frame.panel;
        let border = "─".repeat(panel.width);
        queue!(out, MoveTo(panel.left, panel.top), Print(format!("╭{border}╮")))?;
        for (i, line) in panel.lines.iter().enumerate() {
            let y = panel.top.saturating_add(1).saturating_add(i as u16);
            queue!(out, MoveTo(panel.left, y), Print("│"))?;
            if line.selected {
                queue!(out, SetBackgroundColor(colors::SELECTION), Print(&line.text), ResetColor)?;
            } else {
                queue!(out, Print(&line.text))?;
            }
            queue!(out, Print("│"))?;
        }
        let bottom = panel.top.saturating_add(1).saturating_add(panel.lines.len() as u16);
        queue!(out, MoveTo(panel.left, bottom), Print(format!("╰{border}╯")))?;

        out.flush()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, ResetColor, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
