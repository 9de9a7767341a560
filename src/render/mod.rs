//! Terminal game renderer.
//!
//! The scene is drawn into a [`FrameBuffer`] of styled character cells, which
//! keeps the drawing code pure and testable. [`TerminalRenderer`] flushes a
//! frame to the real terminal through crossterm.

pub mod frame;
pub mod palette;
pub mod scene;
pub mod terminal;

pub use frame::{Cell, CellStyle, FrameBuffer};
pub use palette::{label_color, tile_color, Rgb};
pub use scene::{draw_game, overlay_text, GameView, Viewport};
pub use terminal::TerminalRenderer;
