use crate::game::board::Board;

/// True if any cell holds exactly `value`.
pub fn has_value(board: &Board, value: u32) -> bool {
    board.iter().any(|(_, _, cell)| cell == Some(value))
}
