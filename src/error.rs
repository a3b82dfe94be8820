//! Error types for game transitions and settings.

use thiserror::Error;

use crate::sim::{GamePhase, PhaseEvent};

/// An input the game refused to apply.
///
/// Rejections never mutate state: the model and session look exactly as they
/// did before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// The event has no edge out of the current phase.
    #[error("cannot apply {event:?} while in {phase:?}")]
    IllegalTransition { phase: GamePhase, event: PhaseEvent },

    /// The roster is built once per game.
    #[error("roster already built")]
    RosterAlreadyBuilt,

    #[error("invalid player count: {0} (expected 1 or 2)")]
    InvalidPlayerCount(usize),

    /// Turn-based operation on a model with no players.
    #[error("roster is empty")]
    EmptyRoster,

    /// Scoring outside a running turn.
    #[error("no turn is running (phase {0:?})")]
    NotPlaying(GamePhase),

    #[error("no player with key {0}")]
    UnknownPlayer(usize),

    /// At least one name buffer is still empty.
    #[error("every player needs a name")]
    NamesIncomplete,

    /// Typing outside the name-entry screen.
    #[error("name entry is closed")]
    NameEntryClosed,

    #[error("game mode not selected yet")]
    ModeNotSelected,

    #[error("game mode already selected")]
    ModeAlreadySelected,

    /// `Next` before the active player's countdown ran out.
    #[error("current turn still has time remaining")]
    TimeRemaining,

    /// A press after the countdown ran out.
    #[error("current turn is over")]
    TimeUp,

    /// Only confirm/cancel are accepted while the reset prompt is open.
    #[error("reset confirmation pending")]
    ResetPending,

    #[error("no reset requested")]
    NoResetPending,
}

/// Errors loading or validating [`crate::Settings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}
