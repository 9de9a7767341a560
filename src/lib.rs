//! # Twenty48 Game Library
//!
//! The 2048 sliding-tile puzzle: a pure board engine, an immutable game session
//! with undo, and a small terminal front-end.
//!
//! ## Features
//!
//! - **Board Engine**: slide/merge through a single slide-down primitive and rotations
//! - **Game Session**: spawn, win/loss detection, undo, reset, rotate view
//! - **Renderer**: frame-buffer scene drawing flushed to the terminal with crossterm
//! - **Input**: key-event and text-command mapping
//!
//! ## Usage
//!
//! ```rust
//! use twenty48::{
//!     game::{Move, Session, RandomSource},
//! };
//!
//! let mut source = RandomSource::thread();
//! let session = Session::new().apply_move(Move::Down, &mut source);
//! assert_eq!(session.board().get(3, 0), Some(2));
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Core game logic and rules
pub mod game;

/// Key-event and text-command mapping
pub mod input;

/// Frame-buffer rendering and the terminal backend
pub mod render;

/// Interactive and scripted play loops
pub mod play;

/// Logger setup
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

/// Main game engine facade
pub use game::*;

/// Commands and key mapping
pub use input::{map_key, parse_script, Command};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the Twenty48 library
#[derive(Debug, thiserror::Error)]
pub enum Twenty48Error {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Script error: {0}")]
    Script(String),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Twenty48Error>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
