//! SpaceChallenge - a turn-based reflex minigame
//!
//! Core modules:
//! - `sim`: Game model, players, countdown timers and the session driver
//! - `settings`: Tunable configuration (time limit, name cap, board size)
//! - `error`: Typed errors for rejected inputs and bad configuration
//!
//! Rendering is left to the caller: a presentation layer polls the
//! [`sim::Session`] each frame, feeds it [`sim::Input`]s and draws whatever
//! the session exposes.

pub mod error;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, TransitionError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Seconds each player gets per turn
    pub const TIME_LIMIT_SECS: u32 = 3;
    /// Longest name accepted during name entry
    pub const MAX_NAME_LEN: usize = 10;

    /// Board dimensions markers are scattered over
    pub const BOARD_WIDTH: f32 = 960.0;
    pub const BOARD_HEIGHT: f32 = 540.0;
    /// Markers get a diameter in [0, MAX_MARKER_DIAMETER)
    pub const MAX_MARKER_DIAMETER: f32 = 200.0;

    /// Players allowed in one game (single or dual mode)
    pub const MIN_PLAYERS: usize = 1;
    pub const MAX_PLAYERS: usize = 2;
}
