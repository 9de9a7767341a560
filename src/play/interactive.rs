use crate::game::{Session, SpawnSource};
use crate::input::map_key;
use crate::play::dispatch;
use crate::render::{draw_game, FrameBuffer, TerminalRenderer, Viewport};
use crate::Result;
use crossterm::event::{self, Event};
use std::ops::ControlFlow;

/// Play in the terminal until the player quits. Returns the final session.
///
/// Each key press is handled completely, and the frame redrawn, before the
/// next event is read.
pub fn run<S: SpawnSource + ?Sized>(session: Session, source: &mut S) -> Result<Session> {
    let mut renderer = TerminalRenderer::new()?;
    let (width, height) = renderer.size()?;
    let mut frame = FrameBuffer::new(width, height);
    let mut session = session;

    render(&mut renderer, &mut frame, &session)?;
    loop {
        match event::read()? {
            Event::Key(key) => {
                let Some(command) = map_key(key) else {
                    continue;
                };
                match dispatch(session, command, source) {
                    ControlFlow::Continue(next) => session = next,
                    ControlFlow::Break(last) => return Ok(last),
                }
            }
            Event::Resize(width, height) => {
                log::debug!("Resized to {}x{}", width, height);
                frame.resize(width, height);
            }
            _ => continue,
        }
        render(&mut renderer, &mut frame, &session)?;
    }
}

fn render(
    renderer: &mut TerminalRenderer,
    frame: &mut FrameBuffer,
    session: &Session,
) -> Result<()> {
    frame.clear();
    let viewport = Viewport::full(frame);
    draw_game(frame, viewport, session.board(), session.status());
    renderer.draw(frame)
}
