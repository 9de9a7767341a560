use crate::game::board::{Board, SIZE};

/// Quarter turn clockwise: the left column becomes the top row.
pub fn rotate_clockwise(board: &Board) -> Board {
    let cells = board.rows();
    let mut rotated = [[None; SIZE]; SIZE];
    for (row, line) in rotated.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            *cell = cells[SIZE - 1 - col][row];
        }
    }
    Board::new(rotated)
}

/// Quarter turn counter-clockwise: the left column becomes the bottom row.
pub fn rotate_counter_clockwise(board: &Board) -> Board {
    let cells = board.rows();
    let mut rotated = [[None; SIZE]; SIZE];
    for (row, line) in rotated.iter_mut().enumerate() {
        for (col, cell) in line.iter_mut().enumerate() {
            *cell = cells[col][SIZE - 1 - row];
        }
    }
    Board::new(rotated)
}
