use crate::game::board::Board;

/// Returns `(row, col)` of all empty cells, row-major.
pub fn empty_cells(board: &Board) -> Vec<(usize, usize)> {
    board
        .iter()
        .filter_map(|(row, col, cell)| if cell.is_none() { Some((row, col)) } else { None })
        .collect()
}
