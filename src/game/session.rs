use crate::game::board::Board;
use crate::game::moves::Move;
use crate::game::rotate::rotate_counter_clockwise;
use crate::game::slide::slide;
use crate::game::spawn::{spawn_tile, SpawnOdds, SpawnSource};
use crate::game::status::{evaluate_status, Status};
use serde::{Deserialize, Serialize};

/// One game in progress.
///
/// Transitions consume the session and return the next one, so prior boards are
/// kept as plain values on the undo stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    board: Board,
    status: Status,
    history: Vec<Board>,
    odds: SpawnOdds,
}

/// Serializable view of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub status: Status,
    pub history_len: usize,
}

impl Session {
    /// Fresh game with the default spawn odds.
    pub fn new() -> Self {
        Self::with_odds(SpawnOdds::default())
    }

    /// Fresh game: a single 2 in the top-left corner.
    pub fn with_odds(odds: SpawnOdds) -> Self {
        Self {
            board: Self::starting_board(),
            status: Status::Playing,
            history: Vec::new(),
            odds,
        }
    }

    /// Resume from an arbitrary board; the status is derived from it.
    pub fn from_board(board: Board, odds: SpawnOdds) -> Self {
        Self {
            board,
            status: evaluate_status(&board),
            history: Vec::new(),
            odds,
        }
    }

    pub fn starting_board() -> Board {
        Board::EMPTY.with_cell(0, 0, Some(2))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn odds(&self) -> SpawnOdds {
        self.odds
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Slide, spawn if anything moved, then recompute the status.
    ///
    /// A move that changes nothing (including any move once Lost) only
    /// refreshes the status.
    pub fn apply_move<S: SpawnSource + ?Sized>(mut self, direction: Move, source: &mut S) -> Self {
        let slid = slide(&self.board, direction);
        let next = if slid != self.board {
            self.history.push(self.board);
            spawn_tile(&slid, self.odds, source)
        } else {
            log::trace!("Move {} changed nothing", direction);
            slid
        };

        let status = evaluate_status(&next);
        if status != self.status {
            log::info!("Status {} -> {} after move {}", self.status, status, direction);
        }

        self.board = next;
        self.status = status;
        self
    }

    /// Restore the previous board; no-op when there is nothing to undo.
    pub fn undo(mut self) -> Self {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                self.status = Status::Playing;
            }
            None => log::debug!("Nothing to undo"),
        }
        self
    }

    /// Start over, keeping the spawn odds.
    pub fn reset(self) -> Self {
        Self::with_odds(self.odds)
    }

    /// Turn the board a quarter counter-clockwise without sliding.
    pub fn rotate_view(mut self) -> Self {
        self.board = rotate_counter_clockwise(&self.board);
        self.status = Status::Playing;
        self
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board,
            status: self.status,
            history_len: self.history.len(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::tests::random_board;
    use crate::game::board_contains::has_value;
    use crate::game::get_empty_cells::empty_cells;
    use crate::game::spawn::tests::FixedSource;
    use crate::game::spawn::RandomSource;
    use assert_matches::assert_matches;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stuck_board() -> Board {
        Board::from_values([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]])
    }

    #[test]
    fn test_new_session() {
        let session = Session::new();

        assert_eq!(session.board().get(0, 0), Some(2));
        assert_eq!(session.board().tile_count(), 1);
        assert_matches!(session.status(), Status::Playing);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_move_down_then_spawn() {
        let mut source = FixedSource { cell: 0, roll: 0.5 };
        let session = Session::new().apply_move(Move::Down, &mut source);

        assert_eq!(session.board().get(3, 0), Some(2));
        // First empty cell in row-major order after the slide.
        assert_eq!(session.board().get(0, 0), Some(2));
        assert_eq!(session.board().tile_count(), 2);
        assert_eq!(session.history_len(), 1);
    }

    #[test]
    fn test_spawned_tile_lands_on_previously_empty_cell() {
        let mut source = RandomSource::seeded(3);
        for _ in 0..50 {
            let before = Session::new();
            let slid = slide(before.board(), Move::Down);
            let after = before.apply_move(Move::Down, &mut source);

            let new_cells: Vec<_> = empty_cells(&slid)
                .into_iter()
                .filter(|&(r, c)| after.board().get(r, c).is_some())
                .collect();
            assert_eq!(new_cells.len(), 1);
            let (r, c) = new_cells[0];
            assert_matches!(after.board().get(r, c), Some(2) | Some(4));
            assert_eq!(after.board().get(3, 0), Some(2));
        }
    }

    #[test]
    fn test_noop_move_does_not_spawn_or_push() {
        let mut source = FixedSource { cell: 0, roll: 0.0 };
        let session = Session::new().apply_move(Move::Up, &mut source);

        assert_eq!(*session.board(), Session::starting_board());
        assert_eq!(session.history_len(), 0);
        assert_matches!(session.status(), Status::Playing);
    }

    #[test]
    fn test_noop_moves_never_spawn_on_random_boards() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut source = RandomSource::seeded(8);
        let fills = [0.0, 0.5, 0.9, 1.0];
        for i in 0..2000 {
            let board = random_board(&mut rng, fills[i % fills.len()]);
            for direction in Move::ALL {
                let session = Session::from_board(board, SpawnOdds::default());
                let next = session.apply_move(direction, &mut source);

                if slide(&board, direction) == board {
                    assert_eq!(*next.board(), board, "{:?} {}", direction, board);
                    assert_eq!(next.history_len(), 0);
                } else {
                    let slid = slide(&board, direction);
                    assert_eq!(next.board().tile_count(), slid.tile_count() + 1);
                    assert_eq!(next.history_len(), 1);
                }
            }
        }
    }

    #[test]
    fn test_four_spawn_with_low_odds() {
        let odds = SpawnOdds::new(0.0).unwrap();
        let mut source = FixedSource { cell: 0, roll: 0.3 };
        let session = Session::with_odds(odds).apply_move(Move::Right, &mut source);

        assert_eq!(session.board().get(0, 3), Some(2));
        assert_eq!(session.board().get(0, 0), Some(4));
    }

    #[test]
    fn test_undo_restores_previous_board() {
        let mut source = RandomSource::seeded(11);
        let session = Session::new()
            .apply_move(Move::Down, &mut source)
            .apply_move(Move::Right, &mut source);
        let before = *session.board();

        let session = session.apply_move(Move::Up, &mut source);
        assert_ne!(*session.board(), before);

        let restored = session.undo();
        assert_eq!(*restored.board(), before);
        assert_matches!(restored.status(), Status::Playing);
        assert_eq!(restored.history_len(), 2);
    }

    #[test]
    fn test_undo_on_empty_stack_is_noop() {
        let session = Session::new();
        assert_eq!(session.clone().undo(), session);
    }

    #[test]
    fn test_lost_when_no_move_possible() {
        // Sliding left leaves one gap, the spawned 4 fills it and nothing can merge.
        let board = Board::from_values([
            [0, 2, 4, 8],
            [4, 8, 16, 32],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
        ]);
        let mut four = FixedSource { cell: 0, roll: 0.9 };
        let session = Session::from_board(board, SpawnOdds::default());
        assert_matches!(session.status(), Status::Playing);

        let lost = session.apply_move(Move::Left, &mut four);

        assert_eq!(lost.board().rows()[0], [Some(2), Some(4), Some(8), Some(4)]);
        assert_matches!(lost.status(), Status::Lost);
        assert!(lost.can_undo());

        let undone = lost.undo();
        assert_eq!(*undone.board(), board);
        assert_matches!(undone.status(), Status::Playing);
    }

    #[test]
    fn test_moves_after_loss_are_noops() {
        let session = Session::from_board(stuck_board(), SpawnOdds::default());
        assert_matches!(session.status(), Status::Lost);

        let mut source = FixedSource { cell: 0, roll: 0.0 };
        let mut current = session.clone();
        for direction in Move::ALL {
            current = current.apply_move(direction, &mut source);
        }

        assert_eq!(current, session);
    }

    #[test]
    fn test_win_on_reaching_2048() {
        let board = Board::from_values([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        let mut source = FixedSource { cell: 0, roll: 0.0 };

        let won =
            Session::from_board(board, SpawnOdds::default()).apply_move(Move::Left, &mut source);

        assert!(has_value(won.board(), 2048));
        assert_matches!(won.status(), Status::Won);
    }

    #[test]
    fn test_status_consistent_with_board_over_random_game() {
        let mut source = RandomSource::seeded(2024);
        let mut session = Session::new();
        for step in 0..500 {
            let direction = Move::ALL[step % 4];
            session = session.apply_move(direction, &mut source);

            let won = has_value(session.board(), 2048);
            assert_eq!(session.status() == Status::Won, won);
            assert!(!(won && session.status() == Status::Lost));
            if session.status() == Status::Lost {
                break;
            }
        }
    }

    #[test]
    fn test_reset_drops_history_and_keeps_odds() {
        let odds = SpawnOdds::new(0.5).unwrap();
        let mut source = RandomSource::seeded(5);
        let session = Session::with_odds(odds)
            .apply_move(Move::Down, &mut source)
            .apply_move(Move::Right, &mut source)
            .reset();

        assert_eq!(*session.board(), Session::starting_board());
        assert_eq!(session.history_len(), 0);
        assert_eq!(session.odds(), odds);
    }

    #[test]
    fn test_rotate_view_keeps_history_and_plays() {
        let mut source = FixedSource { cell: 0, roll: 0.0 };
        let session = Session::new().apply_move(Move::Down, &mut source);
        let history = session.history_len();

        let rotated = Session::from_board(stuck_board(), SpawnOdds::default()).rotate_view();
        assert_matches!(rotated.status(), Status::Playing);

        let rotated = session.rotate_view();
        assert_eq!(rotated.history_len(), history);
        // Bottom-left 2 ends up bottom-right.
        assert_eq!(rotated.board().get(3, 3), Some(2));
    }

    #[test]
    fn test_snapshot_json() {
        let snapshot = Session::new().snapshot();
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["status"], "playing");
        assert_eq!(json["history_len"], 0);
        assert_eq!(json["board"][0][0], 2);
    }
}
