pub mod board;
pub mod board_contains;
pub mod get_empty_cells;
pub mod moves;
pub mod rotate;
pub mod session;
pub mod slide;
pub mod spawn;
pub mod status;

pub use board::{Board, Cell, MAX_TILE};
pub use board_contains::has_value;
pub use get_empty_cells::empty_cells;
pub use moves::Move;
pub use rotate::{rotate_clockwise, rotate_counter_clockwise};
pub use session::{Session, SessionSnapshot};
pub use slide::{can_move, is_stuck, slide, slide_line};
pub use spawn::{spawn_tile, RandomSource, SpawnOdds, SpawnSource};
pub use status::{evaluate_status, Status, WIN_VALUE};
