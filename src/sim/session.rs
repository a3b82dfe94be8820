//! Presentation-agnostic session
//!
//! Wraps a [`GameModel`] together with the controller state a front end
//! needs between frames: the chosen mode, name-entry buffers, the time's-up
//! flag, the reset prompt and the markers. Inputs go through
//! [`super::tick::apply`]; frames go through [`super::tick::tick`].

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::markers::{Marker, MarkerBoard};
use super::state::{GameModel, GamePhase, WinnerResult};
use crate::error::SettingsError;
use crate::settings::Settings;

/// Single or dual player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerMode {
    Single,
    Dual,
}

impl PlayerMode {
    pub fn player_count(&self) -> usize {
        match self {
            PlayerMode::Single => 1,
            PlayerMode::Dual => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerMode::Single => "Single-Player Mode",
            PlayerMode::Dual => "Dual-Player Mode",
        }
    }
}

/// What the final screen announces
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Single-player game: just the final score
    SoloScore { name: String, score: u32 },
    Winner { name: String, score: u32 },
    Draw { score: u32 },
}

/// One game from mode selection to the final screen
#[derive(Debug, Clone)]
pub struct Session {
    pub(super) settings: Settings,
    pub(super) model: GameModel,
    pub(super) mode: Option<PlayerMode>,
    /// Names being typed, one per player
    pub(super) name_buffers: Vec<String>,
    /// Set once the active player's countdown ran out
    pub(super) times_up: bool,
    pub(super) reset_prompt: bool,
    pub(super) markers: MarkerBoard,
}

impl Session {
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let time_limit = NonZeroU32::new(settings.time_limit_secs)
            .ok_or_else(|| SettingsError::Invalid("time_limit_secs must be positive".into()))?;
        Ok(Self {
            model: GameModel::new(time_limit),
            mode: None,
            name_buffers: Vec::new(),
            times_up: false,
            reset_prompt: false,
            markers: MarkerBoard::new(&settings),
            settings,
        })
    }

    /// Throw away the current game and return to mode selection.
    ///
    /// The marker generator keeps its position, so a new game does not
    /// replay the previous one's markers.
    pub fn reset(&mut self) {
        self.model.reset();
        self.mode = None;
        self.name_buffers.clear();
        self.times_up = false;
        self.reset_prompt = false;
        self.markers.reset(0);
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn model(&self) -> &GameModel {
        &self.model
    }

    pub fn phase(&self) -> GamePhase {
        self.model.phase()
    }

    pub fn mode(&self) -> Option<PlayerMode> {
        self.mode
    }

    pub fn name_buffer(&self, slot: usize) -> Option<&str> {
        self.name_buffers.get(slot).map(String::as_str)
    }

    /// True when confirm should be enabled
    pub fn names_complete(&self) -> bool {
        !self.name_buffers.is_empty() && self.name_buffers.iter().all(|n| !n.is_empty())
    }

    pub fn times_up(&self) -> bool {
        self.times_up
    }

    pub fn reset_prompt_open(&self) -> bool {
        self.reset_prompt
    }

    pub fn markers(&self, player: usize) -> &[Marker] {
        self.markers.markers(player)
    }

    /// Markers of the player whose turn it is
    pub fn current_markers(&self) -> &[Marker] {
        match self.model.current_player() {
            Some(player) => self.markers.markers(player.key()),
            None => &[],
        }
    }

    /// Result announcement, available once the game reached `Final`
    pub fn outcome(&self) -> Option<Outcome> {
        if self.model.phase() != GamePhase::Final {
            return None;
        }
        let outcome = match (self.mode?, self.model.determine_winner()?) {
            (PlayerMode::Single, winner) => {
                let player = self.model.players().first()?;
                Outcome::SoloScore {
                    name: player.name().to_string(),
                    score: winner.score(),
                }
            }
            (PlayerMode::Dual, WinnerResult::Decisive(player)) => Outcome::Winner {
                name: player.name().to_string(),
                score: player.score(),
            },
            (PlayerMode::Dual, WinnerResult::Tie { score }) => Outcome::Draw { score },
        };
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_starts_in_intro() {
        let session = Session::new(Settings::default()).unwrap();
        assert_eq!(session.phase(), GamePhase::Intro);
        assert!(session.mode().is_none());
        assert!(!session.names_complete());
        assert!(!session.times_up());
        assert!(!session.reset_prompt_open());
        assert!(session.current_markers().is_empty());
        assert!(session.outcome().is_none());
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let settings = Settings {
            max_marker_diameter: 0.0,
            ..Default::default()
        };
        assert!(Session::new(settings).is_err());
    }

    #[test]
    fn test_rejects_zero_time_limit() {
        let settings = Settings {
            time_limit_secs: 0,
            ..Default::default()
        };
        assert!(Session::new(settings).is_err());
    }

    #[test]
    fn test_model_uses_configured_time_limit() {
        let settings = Settings {
            time_limit_secs: 10,
            ..Default::default()
        };
        let session = Session::new(settings).unwrap();
        assert_eq!(session.model().time_limit_secs(), 10);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(PlayerMode::Single.player_count(), 1);
        assert_eq!(PlayerMode::Dual.player_count(), 2);
        assert_eq!(PlayerMode::Dual.as_str(), "Dual-Player Mode");
    }
}
