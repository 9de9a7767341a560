use crate::game::board::{Board, Cell, SIZE};
use crate::game::moves::Move;
use crate::game::rotate::{rotate_clockwise, rotate_counter_clockwise};

/// Slide one line toward index 0, merging equal neighbours once each.
///
/// Two [`MAX_TILE`](crate::game::board::MAX_TILE) tiles have no larger value to
/// merge into and stay apart.
///
/// ```
/// use twenty48::game::slide_line;
/// assert_eq!(slide_line([Some(2), Some(2), Some(2), Some(2)]), [Some(4), Some(4), None, None]);
/// ```
pub fn slide_line(line: [Cell; SIZE]) -> [Cell; SIZE] {
    let mut out: [Cell; SIZE] = [None; SIZE];
    let mut next = 0;
    // Whether out[next - 1] can still absorb an equal tile.
    let mut mergeable = false;
    for value in line.into_iter().flatten() {
        let merged = if mergeable && out[next - 1] == Some(value) {
            value.checked_mul(2)
        } else {
            None
        };
        match merged {
            Some(sum) => {
                out[next - 1] = Some(sum);
                mergeable = false;
            }
            None => {
                out[next] = Some(value);
                next += 1;
                mergeable = true;
            }
        }
    }
    out
}

/// Gravity toward the bottom edge, column by column.
fn slide_down(board: &Board) -> Board {
    let cells = board.rows();
    let mut result = [[None; SIZE]; SIZE];
    for col in 0..SIZE {
        let line: [Cell; SIZE] = std::array::from_fn(|i| cells[SIZE - 1 - i][col]);
        for (i, cell) in slide_line(line).into_iter().enumerate() {
            result[SIZE - 1 - i][col] = cell;
        }
    }
    Board::new(result)
}

/// Return the board after sliding/merging toward `direction` (no spawn).
///
/// Every direction is turned into a slide down: rotate so the target edge is at
/// the bottom, slide, rotate back.
pub fn slide(board: &Board, direction: Move) -> Board {
    match direction {
        Move::Down => slide_down(board),
        Move::Up => {
            let flipped = rotate_clockwise(&rotate_clockwise(board));
            let slid = slide_down(&flipped);
            rotate_clockwise(&rotate_clockwise(&slid))
        }
        Move::Left => rotate_clockwise(&slide_down(&rotate_counter_clockwise(board))),
        Move::Right => rotate_counter_clockwise(&slide_down(&rotate_clockwise(board))),
    }
}

/// True if sliding toward `direction` changes at least one cell.
pub fn can_move(board: &Board, direction: Move) -> bool {
    slide(board, direction) != *board
}

/// True if no direction changes the board.
pub fn is_stuck(board: &Board) -> bool {
    Move::ALL.iter().all(|&direction| !can_move(board, direction))
}
