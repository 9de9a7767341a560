//! Input mapping.
//!
//! Turns crossterm key events and text commands into [`Command`]s. Nothing here
//! touches the session; the play loop dispatches the commands.

pub mod map;

pub use map::{map_key, parse_script, Command};
