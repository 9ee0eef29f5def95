use std::io;

/// The four status colours installed next to the team palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColour {
    Green,
    Yellow,
    Orange,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Default,
    Team(u8),
    Status(StatusColour),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub paint: Paint,
    pub bold: bool,
}

impl Style {
    pub fn plain() -> Style {
        Style { paint: Paint::Default, bold: false }
    }

    pub fn paint(paint: Paint) -> Style {
        Style { paint, bold: false }
    }

    pub fn bold(self) -> Style {
        Style { bold: true, ..self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::plain()
    }
}

/// A character grid the dashboard draws on. Writes may be buffered until
/// `flush`.
pub trait Surface: Send {
    fn setup(&mut self) -> io::Result<()>;

    fn put(&mut self, row: u16, col: u16, text: &str, style: Style) -> io::Result<()>;

    /// Blanks `len` cells of `row` starting at `col`.
    fn clear(&mut self, row: u16, col: u16, len: u16) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    fn width(&self) -> u16;

    fn release(&mut self) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

const BLANK: Cell = Cell { ch: ' ', style: Style { paint: Paint::Default, bold: false } };

/// In-memory surface, used by tests and anywhere a terminal isn't wanted.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
    flushes: usize,
    set_up: bool,
    released: bool,
}

impl MemorySurface {
    pub fn new(width: u16, height: u16) -> MemorySurface {
        MemorySurface {
            width,
            height,
            cells: vec![BLANK; width as usize * height as usize],
            flushes: 0,
            set_up: false,
            released: false,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell(&self, row: u16, col: u16) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    pub fn style_at(&self, row: u16, col: u16) -> Option<Style> {
        self.cell(row, col).map(|cell| cell.style)
    }

    /// The text of one row with trailing blanks removed.
    pub fn line(&self, row: u16) -> String {
        if row >= self.height {
            return String::new();
        }
        let start = self.index(row, 0);
        let text: String = self.cells[start..start + self.width as usize]
            .iter()
            .map(|cell| cell.ch)
            .collect();
        text.trim_end().to_string()
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }

    pub fn is_set_up(&self) -> bool {
        self.set_up
    }

    pub fn is_released(&self) -> bool {
        self.released
    }

    fn index(&self, row: u16, col: u16) -> usize {
        row as usize * self.width as usize + col as usize
    }
}

impl Surface for MemorySurface {
    fn setup(&mut self) -> io::Result<()> {
        self.cells.iter_mut().for_each(|cell| *cell = BLANK);
        self.set_up = true;
        self.released = false;
        Ok(())
    }

    fn put(&mut self, row: u16, col: u16, text: &str, style: Style) -> io::Result<()> {
        if row >= self.height {
            return Ok(());
        }
        for (offset, ch) in text.chars().enumerate() {
            let col = col as usize + offset;
            if col >= self.width as usize {
                break;
            }
            let idx = self.index(row, col as u16);
            self.cells[idx] = Cell { ch, style };
        }
        Ok(())
    }

    fn clear(&mut self, row: u16, col: u16, len: u16) -> io::Result<()> {
        if row >= self.height {
            return Ok(());
        }
        let end = (col as usize + len as usize).min(self.width as usize);
        for col in (col as usize)..end {
            let idx = self.index(row, col as u16);
            self.cells[idx] = BLANK;
        }
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushes += 1;
        Ok(())
    }

    fn width(&self) -> u16 {
        self.width
    }

    fn release(&mut self) -> io::Result<()> {
        self.released = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_clips_at_the_right_edge() {
        let mut surface = MemorySurface::new(8, 2);
        surface.put(0, 5, "abcdef", Style::plain()).unwrap();
        assert_eq!(surface.line(0), "     abc");
        surface.put(7, 0, "ignored", Style::plain()).unwrap();
    }

    #[test]
    fn clear_blanks_only_the_requested_cells() {
        let mut surface = MemorySurface::new(10, 1);
        let red = Style::paint(Paint::Status(StatusColour::Red));
        surface.put(0, 0, "0123456789", red).unwrap();
        surface.clear(0, 2, 3).unwrap();

        assert_eq!(surface.line(0), "01   56789");
        assert_eq!(surface.style_at(0, 3), Some(Style::plain()));
        assert_eq!(surface.style_at(0, 6), Some(red));
    }
}
