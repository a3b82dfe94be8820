//! A player in the roster

use serde::{Deserialize, Serialize};

use super::timer::CountdownTimer;

/// One roster entry: identity, score and the player's own countdown.
///
/// Players compare equal by `key` alone; names need not be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Zero-based position in the roster (also the turn order)
    key: usize,
    name: String,
    score: u32,
    pub timer: CountdownTimer,
}

impl Player {
    pub fn new(key: usize, time_limit_secs: u32) -> Self {
        Self {
            key,
            name: String::new(),
            score: 0,
            timer: CountdownTimer::new(time_limit_secs),
        }
    }

    pub fn key(&self) -> usize {
        self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// One more point. Pins at `u32::MAX`, far beyond what any countdown
    /// allows, rather than overflowing.
    pub fn score_up(&mut self) {
        self.score = self.score.saturating_add(1);
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Player {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(1, 3);
        assert_eq!(player.key(), 1);
        assert_eq!(player.name(), "");
        assert_eq!(player.score(), 0);
        assert_eq!(player.timer.duration_secs(), 3);
        assert_eq!(player.timer.remaining_secs(), 3);
    }

    #[test]
    fn test_identity_is_by_key() {
        let mut a = Player::new(0, 3);
        let mut b = Player::new(0, 3);
        a.set_name("Ada");
        b.set_name("Grace");
        b.score_up();
        assert_eq!(a, b);

        let mut c = Player::new(1, 3);
        c.set_name("Ada");
        assert_ne!(a, c);
    }

    #[test]
    fn test_score_up_at_max_does_not_overflow() {
        let mut player = Player::new(0, 3);
        player.score = u32::MAX;
        player.score_up();
        assert_eq!(player.score(), u32::MAX);
    }

    proptest! {
        #[test]
        fn prop_score_counts_presses(presses in 0u32..5_000) {
            let mut player = Player::new(0, 3);
            let mut last = player.score();
            for _ in 0..presses {
                player.score_up();
                prop_assert!(player.score() > last);
                last = player.score();
            }
            prop_assert_eq!(player.score(), presses);
        }
    }
}
