use crate::render::palette::Rgb;

/// Colors of a cell; `None` leaves the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Rgb>,
    pub bg: Option<Rgb>,
}

impl CellStyle {
    pub const PLAIN: CellStyle = CellStyle { fg: None, bg: None };

    pub fn fg(color: Rgb) -> Self {
        Self {
            fg: Some(color),
            bg: None,
        }
    }

    pub fn with_bg(mut self, color: Rgb) -> Self {
        self.bg = Some(color);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::PLAIN,
        }
    }
}

/// Grid of character cells. Writes outside the buffer are clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if (width, height) != (self.width, self.height) {
            *self = Self::new(width, height);
        } else {
            self.clear();
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        let i = self.index(x, y)?;
        self.cells.get(i)
    }

    fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        let i = self.index(x, y)?;
        self.cells.get_mut(i)
    }

    /// One row as a string, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|cell| cell.ch))
            .collect()
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        if let Some(cell) = self.get_mut(x, y) {
            *cell = Cell { ch, style };
        }
    }

    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle) {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            self.put_char(x.saturating_add(offset), y, ch, style);
        }
    }

    /// Write `text` centered within `[x, x + width)`.
    pub fn put_str_centered(&mut self, x: u16, y: u16, width: u16, text: &str, style: CellStyle) {
        let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let start = x.saturating_add(width.saturating_sub(len) / 2);
        self.put_str(start, y, text, style);
    }

    /// Write `text` keeping each cell's background.
    pub fn put_str_over(&mut self, x: u16, y: u16, text: &str, fg: Rgb) {
        for (offset, ch) in text.chars().enumerate() {
            let Ok(offset) = u16::try_from(offset) else {
                break;
            };
            if let Some(cell) = self.get_mut(x.saturating_add(offset), y) {
                cell.ch = ch;
                cell.style.fg = Some(fg);
            }
        }
    }

    /// Fill a rectangle with blanks in `style`.
    pub fn fill_rect(&mut self, x: u16, y: u16, width: u16, height: u16, style: CellStyle) {
        for row in y..y.saturating_add(height) {
            for col in x..x.saturating_add(width) {
                self.put_char(col, row, ' ', style);
            }
        }
    }

    /// Tint a rectangle with `color` at opacity `alpha`, text included.
    ///
    /// Default-colored cells are treated as black backgrounds and white text.
    pub fn blend_rect(&mut self, x: u16, y: u16, width: u16, height: u16, color: Rgb, alpha: f32) {
        for row in y..y.saturating_add(height) {
            for col in x..x.saturating_add(width) {
                if let Some(cell) = self.get_mut(col, row) {
                    let bg = cell.style.bg.unwrap_or(Rgb::BLACK);
                    let fg = cell.style.fg.unwrap_or(Rgb::WHITE);
                    cell.style = CellStyle {
                        fg: Some(fg.blend(color, alpha)),
                        bg: Some(bg.blend(color, alpha)),
                    };
                }
            }
        }
    }
}
