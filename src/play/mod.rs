//! Play loops: one command in, one session transition out.

pub mod interactive;
pub mod scripted;

use crate::game::{Session, SpawnSource};
use crate::input::Command;
use std::ops::ControlFlow;

/// Apply one command. `Break` carries the final session when the player quits.
pub fn dispatch<S: SpawnSource + ?Sized>(
    session: Session,
    command: Command,
    source: &mut S,
) -> ControlFlow<Session, Session> {
    let next = match command {
        Command::Move(direction) => session.apply_move(direction, source),
        Command::Undo => session.undo(),
        Command::Reset => {
            log::info!("🔄 New game");
            session.reset()
        }
        Command::RotateView => session.rotate_view(),
        Command::Quit => return ControlFlow::Break(session),
    };

    log::debug!(
        "{} -> {} | tiles={} highest={:?} undo={}",
        command,
        next.status(),
        next.board().tile_count(),
        next.board().highest_tile(),
        next.history_len()
    );
    ControlFlow::Continue(next)
}
