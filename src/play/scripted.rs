use crate::game::{Session, SpawnSource};
use crate::input::Command;
use crate::play::dispatch;
use std::ops::ControlFlow;

/// Run `commands` without a terminal; stops early at `quit`.
pub fn run<S: SpawnSource + ?Sized>(
    session: Session,
    commands: &[Command],
    source: &mut S,
) -> Session {
    log::info!("📜 Running {} scripted commands", commands.len());
    let mut session = session;
    for &command in commands {
        match dispatch(session, command, source) {
            ControlFlow::Continue(next) => session = next,
            ControlFlow::Break(last) => return last,
        }
    }
    session
}
