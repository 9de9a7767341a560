use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows and columns.
pub const SIZE: usize = 4;

/// Largest tile value a cell can hold.
pub const MAX_TILE: u32 = 1 << 31;

/// A single square: `None` when empty, otherwise a power of two >= 2.
pub type Cell = Option<u32>;

/// Fixed 4x4 grid of tiles, row-major, `cells[row][col]` with row 0 on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// An empty board.
    pub const EMPTY: Board = Board {
        cells: [[None; SIZE]; SIZE],
    };

    /// Build a board from its cells.
    ///
    /// Panics if a value is not a power of two >= 2. Any such `u32` is at most
    /// [`MAX_TILE`].
    pub fn new(cells: [[Cell; SIZE]; SIZE]) -> Self {
        for value in cells.iter().flatten().flatten() {
            assert!(
                *value >= 2 && value.is_power_of_two(),
                "tile value {} is not a power of two >= 2",
                value
            );
        }
        Board { cells }
    }

    /// Build a board from plain values, `0` meaning empty.
    ///
    /// ```
    /// use twenty48::game::Board;
    /// let board = Board::from_values([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    /// assert_eq!(board.get(0, 0), Some(2));
    /// assert_eq!(board.get(0, 1), None);
    /// ```
    pub fn from_values(values: [[u32; SIZE]; SIZE]) -> Self {
        Board::new(values.map(|row| row.map(|v| if v == 0 { None } else { Some(v) })))
    }

    /// Build a board from dynamically-sized rows.
    ///
    /// Anything other than exactly 4 rows of 4 cells is a programming error and panics.
    pub fn from_nested(rows: &[Vec<Cell>]) -> Self {
        assert_eq!(rows.len(), SIZE, "board must have {} rows, got {}", SIZE, rows.len());
        let mut cells = [[None; SIZE]; SIZE];
        for (row, source) in rows.iter().enumerate() {
            assert_eq!(
                source.len(),
                SIZE,
                "row {} must have {} cells, got {}",
                row,
                SIZE,
                source.len()
            );
            cells[row].copy_from_slice(source);
        }
        Board::new(cells)
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Copy of this board with one cell replaced.
    #[inline]
    pub fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[row][col] = cell;
        self
    }

    #[inline]
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterate over `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .map(move |(col, cell)| (row, col, *cell))
            })
    }

    /// Highest tile value on the board, if any.
    pub fn highest_tile(&self) -> Option<u32> {
        self.cells.iter().flatten().flatten().copied().max()
    }

    /// Sum of all tile values.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().flatten().flatten().map(|v| u64::from(*v)).sum()
    }

    /// Number of non-empty cells.
    pub fn tile_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(SIZE * (3 + SIZE));
        for row in &self.cells {
            writeln!(f, "{}", separator)?;
            for cell in row {
                match cell {
                    Some(value) => write!(f, "| {:<4} ", value)?,
                    None => write!(f, "| {:<4} ", "")?,
                }
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "{}", separator)
    }
}
