use crate::render::frame::{CellStyle, FrameBuffer};
use crate::render::palette::Rgb;
use crate::{Result, Twenty48Error};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};

/// Owns the terminal while the game runs: raw mode, alternate screen, hidden
/// cursor. Everything is restored on drop.
pub struct TerminalRenderer {
    out: Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode()
            .map_err(|e| Twenty48Error::Terminal(format!("cannot enable raw mode: {}", e)))?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(Twenty48Error::Terminal(format!("cannot enter alternate screen: {}", e)));
        }
        log::info!("🖥️ Terminal renderer ready");
        Ok(Self { out })
    }

    /// Current terminal size as `(columns, rows)`.
    pub fn size(&self) -> Result<(u16, u16)> {
        Ok(terminal::size()?)
    }

    /// Write a whole frame and flush it.
    pub fn draw(&mut self, frame: &FrameBuffer) -> Result<()> {
        let mut current: Option<CellStyle> = None;
        for y in 0..frame.height() {
            queue!(self.out, MoveTo(0, y))?;
            for x in 0..frame.width() {
                let Some(cell) = frame.get(x, y) else {
                    continue;
                };
                if current != Some(cell.style) {
                    queue!(
                        self.out,
                        ResetColor,
                        SetForegroundColor(to_color(cell.style.fg)),
                        SetBackgroundColor(to_color(cell.style.bg))
                    )?;
                    current = Some(cell.style);
                }
                queue!(self.out, Print(cell.ch))?;
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if let Err(e) = execute!(self.out, ResetColor, Show, LeaveAlternateScreen) {
            log::error!("❌ Failed to leave alternate screen: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::error!("❌ Failed to disable raw mode: {}", e);
        }
        log::info!("🖥️ Terminal restored");
    }
}

fn to_color(color: Option<Rgb>) -> Color {
    match color {
        Some(Rgb(r, g, b)) => Color::Rgb { r, g, b },
        None => Color::Reset,
    }
}
