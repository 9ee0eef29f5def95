use std::io::{self, BufWriter, Stdout, Write};
use std::panic;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};

use crate::surface::{Paint, StatusColour, Style, Surface};

const TEAM_COLOURS: [(u8, u8, u8); 10] = [
    (0, 210, 190),
    (220, 0, 0),
    (30, 65, 255),
    (255, 255, 255),
    (245, 150, 200),
    (255, 245, 0),
    (70, 155, 255),
    (240, 215, 135),
    (255, 135, 0),
    (155, 0, 0),
];

/// Terminal colour for a paint. `None` leaves the terminal default.
pub fn colour(paint: Paint) -> Option<Color> {
    match paint {
        Paint::Default => None,
        Paint::Team(team) => TEAM_COLOURS
            .get(team as usize)
            .map(|&(r, g, b)| Color::Rgb { r, g, b }),
        Paint::Status(StatusColour::Green) => Some(Color::Green),
        Paint::Status(StatusColour::Yellow) => Some(Color::Yellow),
        Paint::Status(StatusColour::Orange) => Some(Color::Rgb { r: 255, g: 165, b: 0 }),
        Paint::Status(StatusColour::Red) => Some(Color::Red),
    }
}

/// Puts the terminal back into line mode on the main screen. Safe to call
/// when nothing was changed.
pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Restores the terminal before the default panic message is printed, so a
/// panic anywhere, the worker included, leaves a usable shell behind.
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if let Err(err) = restore() {
            error!("Failed to restore terminal: {}", err);
        }
        default_hook(info);
    }));
}

/// Full-screen crossterm surface on stdout. Commands are queued and only
/// reach the terminal on `flush`.
pub struct TerminalSurface {
    out: BufWriter<Stdout>,
    width: u16,
}

impl TerminalSurface {
    pub fn new() -> TerminalSurface {
        TerminalSurface { out: BufWriter::new(io::stdout()), width: 0 }
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        TerminalSurface::new()
    }
}

impl Surface for TerminalSurface {
    fn setup(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        execute!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        let (width, height) = terminal::size()?;
        info!("Terminal is {}x{}", width, height);
        self.width = width;
        Ok(())
    }

    fn put(&mut self, row: u16, col: u16, text: &str, style: Style) -> io::Result<()> {
        queue!(self.out, MoveTo(col, row))?;
        if let Some(colour) = colour(style.paint) {
            queue!(self.out, SetForegroundColor(colour))?;
        }
        if style.bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(self.out, Print(text), SetAttribute(Attribute::Reset), ResetColor)
    }

    fn clear(&mut self, row: u16, col: u16, len: u16) -> io::Result<()> {
        if len == 0 {
            return Ok(());
        }
        queue!(self.out, MoveTo(col, row), Print(" ".repeat(len as usize)))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn release(&mut self) -> io::Result<()> {
        self.out.flush()?;
        restore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_covers_ten_teams() {
        assert_eq!(colour(Paint::Team(0)), Some(Color::Rgb { r: 0, g: 210, b: 190 }));
        assert_eq!(colour(Paint::Team(9)), Some(Color::Rgb { r: 155, g: 0, b: 0 }));
        assert_eq!(colour(Paint::Team(10)), None);
        assert_eq!(colour(Paint::Team(255)), None);
        assert_eq!(colour(Paint::Default), None);
        assert_eq!(colour(Paint::Status(StatusColour::Red)), Some(Color::Red));
    }
}
