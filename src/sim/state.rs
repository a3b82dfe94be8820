//! Game phases and the game model
//!
//! The model owns the roster, the current phase and whose turn it is. Phase
//! changes go through a closed `(phase, event)` transition table that is only
//! reachable via [`GameModel::confirm_names`], [`GameModel::start_round`] and
//! [`GameModel::finish_turn`], so every phase change carries its own guard.

use std::cmp::Ordering;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::consts::*;
use crate::error::TransitionError;

/// Coarse game phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Choosing single/dual mode and entering names
    #[default]
    Intro,
    /// Waiting for the current player to press start
    PlayingStale,
    /// Current player's countdown is running
    PlayingActive,
    /// Every player has played; results are shown
    Final,
}

/// Events that move the game between phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhaseEvent {
    /// All names entered and confirmed
    NamesConfirmed,
    /// Current player pressed start
    RoundStarted,
    /// Current player's time ran out and they moved on
    TurnFinished,
}

/// Result of advancing the turn index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAdvance {
    /// Turn moved to the next player
    Advanced,
    /// The last player just finished; turn index unchanged
    AllPlayersDone,
}

/// Winner of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinnerResult<'a> {
    Decisive(&'a Player),
    /// The highest score is shared
    Tie { score: u32 },
}

impl WinnerResult<'_> {
    pub fn score(&self) -> u32 {
        match self {
            WinnerResult::Decisive(player) => player.score(),
            WinnerResult::Tie { score } => *score,
        }
    }
}

/// Complete game data: roster, phase and turn
///
/// Serializable for inspection only; a model is always built through
/// [`GameModel::new`] so its invariants hold.
#[derive(Debug, Clone, Serialize)]
pub struct GameModel {
    /// Countdown length handed to every player's timer
    time_limit_secs: NonZeroU32,
    /// Turn order = insertion order; fixed once built
    players: Vec<Player>,
    phase: GamePhase,
    /// Index of the player whose turn it is
    turn: usize,
}

impl Default for GameModel {
    fn default() -> Self {
        Self::new(NonZeroU32::new(TIME_LIMIT_SECS).unwrap_or(NonZeroU32::MIN))
    }
}

impl GameModel {
    pub fn new(time_limit_secs: NonZeroU32) -> Self {
        Self {
            time_limit_secs,
            players: Vec::new(),
            phase: GamePhase::Intro,
            turn: 0,
        }
    }

    /// Discard everything and start over in `Intro`
    pub fn reset(&mut self) {
        *self = Self::new(self.time_limit_secs);
        log::info!("Game reset");
    }

    /// Build the roster with keys `0..count`. Allowed once per game.
    pub fn add_players(&mut self, count: usize) -> Result<(), TransitionError> {
        if !self.players.is_empty() {
            return Err(TransitionError::RosterAlreadyBuilt);
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(TransitionError::InvalidPlayerCount(count));
        }
        self.players = (0..count)
            .map(|key| Player::new(key, self.time_limit_secs.get()))
            .collect();
        log::info!("Roster built with {} player(s)", count);
        Ok(())
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn roster_len(&self) -> usize {
        self.players.len()
    }

    pub fn player(&self, key: usize) -> Result<&Player, TransitionError> {
        self.players
            .get(key)
            .ok_or(TransitionError::UnknownPlayer(key))
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_secs.get()
    }

    /// Player whose turn it is (only while playing)
    pub fn current_player(&self) -> Option<&Player> {
        match self.phase {
            GamePhase::PlayingStale | GamePhase::PlayingActive => self.players.get(self.turn),
            GamePhase::Intro | GamePhase::Final => None,
        }
    }

    fn current_player_mut(&mut self) -> Option<&mut Player> {
        match self.phase {
            GamePhase::PlayingStale | GamePhase::PlayingActive => self.players.get_mut(self.turn),
            GamePhase::Intro | GamePhase::Final => None,
        }
    }

    /// Move the turn to the next player, if there is one
    pub fn next_turn(&mut self) -> Result<TurnAdvance, TransitionError> {
        if self.players.is_empty() {
            return Err(TransitionError::EmptyRoster);
        }
        if self.turn + 1 < self.players.len() {
            self.turn += 1;
            Ok(TurnAdvance::Advanced)
        } else {
            Ok(TurnAdvance::AllPlayersDone)
        }
    }

    /// Apply a phase event, returning the new phase. Callers check the
    /// event's own preconditions first.
    fn apply(&mut self, event: PhaseEvent) -> Result<GamePhase, TransitionError> {
        let next = match (self.phase, event) {
            (GamePhase::Intro, PhaseEvent::NamesConfirmed) => {
                if self.players.is_empty() {
                    return Err(TransitionError::EmptyRoster);
                }
                GamePhase::PlayingStale
            }
            (GamePhase::PlayingStale, PhaseEvent::RoundStarted) => GamePhase::PlayingActive,
            (GamePhase::PlayingActive, PhaseEvent::TurnFinished) => match self.next_turn()? {
                TurnAdvance::Advanced => GamePhase::PlayingStale,
                TurnAdvance::AllPlayersDone => GamePhase::Final,
            },
            (phase, event) => return Err(TransitionError::IllegalTransition { phase, event }),
        };
        log::info!("Phase {:?} -> {:?} (turn {})", self.phase, next, self.turn);
        self.phase = next;
        Ok(next)
    }

    /// Name every player and leave `Intro`.
    ///
    /// `names` must have one non-empty entry per player, in key order.
    pub fn confirm_names<S: AsRef<str>>(&mut self, names: &[S]) -> Result<(), TransitionError> {
        if self.phase != GamePhase::Intro {
            return Err(TransitionError::IllegalTransition {
                phase: self.phase,
                event: PhaseEvent::NamesConfirmed,
            });
        }
        if self.players.is_empty() {
            return Err(TransitionError::EmptyRoster);
        }
        if names.len() != self.players.len() || names.iter().any(|n| n.as_ref().is_empty()) {
            return Err(TransitionError::NamesIncomplete);
        }
        for (player, name) in self.players.iter_mut().zip(names) {
            player.set_name(name.as_ref());
        }
        self.apply(PhaseEvent::NamesConfirmed)?;
        Ok(())
    }

    /// Start the current player's countdown at `now_ms`
    pub fn start_round(&mut self, now_ms: u64) -> Result<(), TransitionError> {
        self.apply(PhaseEvent::RoundStarted)?;
        if let Some(player) = self.current_player_mut() {
            player.timer.start(now_ms);
        }
        Ok(())
    }

    /// Refresh the running countdown. Returns true once the turn's time is up.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.phase != GamePhase::PlayingActive {
            return false;
        }
        match self.current_player_mut() {
            Some(player) => {
                player.timer.tick(now_ms);
                player.timer.has_ended()
            }
            None => false,
        }
    }

    /// Whether the active player's countdown has run out
    pub fn time_is_up(&self) -> bool {
        self.phase == GamePhase::PlayingActive
            && self.current_player().is_some_and(|p| p.timer.has_ended())
    }

    /// Credit the active player with one point. Returns their new score.
    pub fn score_current(&mut self) -> Result<u32, TransitionError> {
        if self.phase != GamePhase::PlayingActive {
            return Err(TransitionError::NotPlaying(self.phase));
        }
        let player = self
            .current_player_mut()
            .ok_or(TransitionError::EmptyRoster)?;
        if player.timer.has_ended() {
            return Err(TransitionError::TimeUp);
        }
        player.score_up();
        log::debug!("Player {} scored ({})", player.key(), player.score());
        Ok(player.score())
    }

    /// Close the active turn once its time is up
    pub fn finish_turn(&mut self) -> Result<GamePhase, TransitionError> {
        if self.phase == GamePhase::PlayingActive && !self.time_is_up() {
            return Err(TransitionError::TimeRemaining);
        }
        self.apply(PhaseEvent::TurnFinished)
    }

    /// Highest scorer, or a tie when the top score is shared.
    ///
    /// Scans in roster order; a later strictly higher score always overrides
    /// an earlier tie. `None` only for an empty roster.
    pub fn determine_winner(&self) -> Option<WinnerResult<'_>> {
        let (first, rest) = self.players.split_first()?;
        let mut best = WinnerResult::Decisive(first);
        for player in rest {
            best = match best.score().cmp(&player.score()) {
                Ordering::Greater => best,
                Ordering::Less => WinnerResult::Decisive(player),
                Ordering::Equal => WinnerResult::Tie {
                    score: player.score(),
                },
            };
        }
        Some(best)
    }
}
