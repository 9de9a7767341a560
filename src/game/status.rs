use crate::game::board::Board;
use crate::game::board_contains::has_value;
use crate::game::slide::is_stuck;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tile value that wins the game.
pub const WIN_VALUE: u32 = 2048;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Playing,
    Won,
    Lost,
}

impl Status {
    /// Won and Lost end the game.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Playing => "playing",
            Status::Won => "won",
            Status::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// Derive the status from a board. Won takes precedence over Lost.
pub fn evaluate_status(board: &Board) -> Status {
    if has_value(board, WIN_VALUE) {
        Status::Won
    } else if is_stuck(board) {
        Status::Lost
    } else {
        Status::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_playing_when_moves_remain() {
        let board = Board::from_values([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_matches!(evaluate_status(&board), Status::Playing);
    }

    #[test]
    fn test_won_with_2048() {
        let board = Board::from_values([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_matches!(evaluate_status(&board), Status::Won);
    }

    #[test]
    fn test_won_beats_lost_on_stuck_board() {
        let board = Board::from_values([[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(is_stuck(&board));
        assert_matches!(evaluate_status(&board), Status::Won);
    }

    #[test]
    fn test_lost_when_stuck() {
        let board = Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_matches!(evaluate_status(&board), Status::Lost);
    }

    #[test]
    fn test_terminal() {
        assert!(!Status::Playing.is_terminal());
        assert!(Status::Won.is_terminal());
        assert!(Status::Lost.is_terminal());
    }

    #[test]
    fn test_status_json_is_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Lost).unwrap(), "\"lost\"");
    }
}
