use crate::game::board::SIZE;
use crate::game::{Board, Status};
use crate::render::frame::{CellStyle, FrameBuffer};
use crate::render::palette::{label_color, tile_color, Rgb};

const PADDING: u16 = 1;
const FOOTER_ROWS: u16 = 1;
const OVERLAY_ALPHA: f32 = 0.8;
const HELP: &str = "arrows move  u undo  s new game  r rotate  q quit";

/// Region of the frame the game may draw into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    /// The whole frame.
    pub fn full(frame: &FrameBuffer) -> Self {
        Self {
            x: 0,
            y: 0,
            width: frame.width(),
            height: frame.height(),
        }
    }
}

/// Where the grid lands inside a viewport.
///
/// Terminal cells are about twice as tall as wide, so tiles are
/// `2 * tile_height + 3` characters wide to look roughly square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    pub grid_x: u16,
    pub grid_y: u16,
    pub tile_width: u16,
    pub tile_height: u16,
}

impl GameView {
    /// Largest grid fitting the viewport, centered; `None` if even the
    /// smallest grid does not fit.
    pub fn layout(viewport: Viewport) -> Option<Self> {
        let lines = SIZE as u16 + 1;
        let tiles = SIZE as u16;
        let avail_height = viewport.height.checked_sub(2 * PADDING + FOOTER_ROWS)?;
        let avail_width = viewport.width.checked_sub(2 * PADDING)?;

        let by_height = avail_height.checked_sub(lines)? / tiles;
        let by_width = avail_width.checked_sub(lines + 3 * tiles)? / (2 * tiles);
        let tile_height = by_height.min(by_width);
        if tile_height == 0 {
            return None;
        }
        let tile_width = 2 * tile_height + 3;

        let view = Self {
            grid_x: 0,
            grid_y: 0,
            tile_width,
            tile_height,
        };
        let (grid_width, grid_height) = view.grid_size();
        Some(Self {
            grid_x: viewport.x + (viewport.width - grid_width) / 2,
            grid_y: viewport.y + (viewport.height - FOOTER_ROWS - grid_height) / 2,
            ..view
        })
    }

    /// Width and height of the grid including its lines.
    pub fn grid_size(&self) -> (u16, u16) {
        let tiles = SIZE as u16;
        (
            tiles * (self.tile_width + 1) + 1,
            tiles * (self.tile_height + 1) + 1,
        )
    }

    /// Top-left corner of the inside of a tile.
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (
            self.grid_x + 1 + col as u16 * (self.tile_width + 1),
            self.grid_y + 1 + row as u16 * (self.tile_height + 1),
        )
    }
}

/// Overlay caption for a terminal status.
pub fn overlay_text(status: Status) -> Option<&'static str> {
    match status {
        Status::Playing => None,
        Status::Won => Some("You win!"),
        Status::Lost => Some("You lose."),
    }
}

/// Draw the board, grid, overlay and key help into `viewport`.
pub fn draw_game(frame: &mut FrameBuffer, viewport: Viewport, board: &Board, status: Status) {
    let Some(view) = GameView::layout(viewport) else {
        frame.put_str_centered(
            viewport.x,
            viewport.y + viewport.height / 2,
            viewport.width,
            "Terminal too small",
            CellStyle::PLAIN,
        );
        return;
    };

    draw_tiles(frame, &view, board);
    draw_grid(frame, &view);

    if let Some(text) = overlay_text(status) {
        let (grid_width, grid_height) = view.grid_size();
        frame.blend_rect(
            view.grid_x,
            view.grid_y,
            grid_width,
            grid_height,
            Rgb::GRAY,
            OVERLAY_ALPHA,
        );
        let len = text.chars().count() as u16;
        let x = viewport.x + viewport.width.saturating_sub(len) / 2;
        let y = view.grid_y + grid_height / 2;
        frame.put_str_over(x, y, text, Rgb::WHITE);
    }

    let footer_y = viewport.y + viewport.height - FOOTER_ROWS;
    frame.put_str_centered(viewport.x, footer_y, viewport.width, HELP, CellStyle::fg(Rgb::GRAY));
}

fn draw_tiles(frame: &mut FrameBuffer, view: &GameView, board: &Board) {
    for (row, col, cell) in board.iter() {
        let Some(value) = cell else {
            continue;
        };
        let (x, y) = view.tile_origin(row, col);
        let label = value.to_string();
        let label_y = y + view.tile_height / 2;

        match tile_color(value) {
            Some(background) => {
                let style = CellStyle::PLAIN.with_bg(background);
                frame.fill_rect(x, y, view.tile_width, view.tile_height, style);
                let text = CellStyle::fg(label_color(background)).with_bg(background);
                frame.put_str_centered(x, label_y, view.tile_width, &label, text);
            }
            // Past the palette: label only.
            None => frame.put_str_centered(x, label_y, view.tile_width, &label, CellStyle::PLAIN),
        }
    }
}

fn draw_grid(frame: &mut FrameBuffer, view: &GameView) {
    let style = CellStyle::fg(Rgb::GRAY);
    let (grid_width, grid_height) = view.grid_size();
    let step_x = view.tile_width + 1;
    let step_y = view.tile_height + 1;

    for dy in 0..grid_height {
        for dx in 0..grid_width {
            let on_row = dy % step_y == 0;
            let on_col = dx % step_x == 0;
            let ch = match (on_row, on_col) {
                (true, true) => junction(dx / step_x, dy / step_y),
                (true, false) => '─',
                (false, true) => '│',
                (false, false) => continue,
            };
            frame.put_char(view.grid_x + dx, view.grid_y + dy, ch, style);
        }
    }
}

/// Box-drawing character where grid line `col` crosses grid line `row`.
fn junction(col: u16, row: u16) -> char {
    let last = SIZE as u16;
    match (row, col) {
        (0, 0) => '┌',
        (0, c) if c == last => '┐',
        (0, _) => '┬',
        (r, 0) if r == last => '└',
        (r, c) if r == last && c == last => '┘',
        (r, _) if r == last => '┴',
        (_, 0) => '├',
        (_, c) if c == last => '┤',
        _ => '┼',
    }
}
