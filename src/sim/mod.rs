//! Game logic module
//!
//! Everything that decides who plays, who scores and who wins lives here.
//! Nothing in this module reads a clock or touches a screen:
//! - Time comes in as millisecond timestamps from the caller
//! - Marker placement uses a seeded RNG only
//! - Turn order is roster order

pub mod markers;
pub mod player;
pub mod session;
pub mod state;
pub mod tick;
pub mod timer;

pub use markers::{Marker, MarkerBoard};
pub use player::Player;
pub use session::{Outcome, PlayerMode, Session};
pub use state::{GameModel, GamePhase, PhaseEvent, TurnAdvance, WinnerResult};
pub use tick::{Input, apply, tick};
pub use timer::CountdownTimer;
