//! Scoring markers
//!
//! Every successful press leaves a marker somewhere on the board. Placement,
//! size and colour come from a seeded RNG so a replay with the same seed and
//! the same presses draws the same picture.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::settings::Settings;

/// A single circle drawn for one point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    /// Centre, in board coordinates
    pub pos: Vec2,
    pub diameter: f32,
    /// RGB
    pub color: [u8; 3],
}

/// Per-player marker lists plus the generator that fills them
#[derive(Debug, Clone)]
pub struct MarkerBoard {
    rng: Pcg32,
    size: Vec2,
    max_diameter: f32,
    /// Indexed by player key
    lists: Vec<Vec<Marker>>,
}

impl MarkerBoard {
    pub fn new(settings: &Settings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            size: Vec2::new(settings.board_width, settings.board_height),
            max_diameter: settings.max_marker_diameter,
            lists: Vec::new(),
        }
    }

    /// Make room for `players` empty lists, dropping any old markers
    pub fn reset(&mut self, players: usize) {
        self.lists = vec![Vec::new(); players];
    }

    /// Scatter a new marker for `player` and return it
    pub fn spawn(&mut self, player: usize) -> Option<Marker> {
        let list = self.lists.get_mut(player)?;
        let marker = Marker {
            pos: Vec2::new(
                self.rng.random_range(0.0..self.size.x),
                self.rng.random_range(0.0..self.size.y),
            ),
            diameter: self.rng.random_range(0.0..self.max_diameter),
            color: self.rng.random(),
        };
        list.push(marker);
        Some(marker)
    }

    pub fn markers(&self, player: usize) -> &[Marker] {
        self.lists.get(player).map(Vec::as_slice).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(seed: u64) -> Settings {
        Settings {
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn test_markers_stay_on_board() {
        let settings = settings(7);
        let mut board = MarkerBoard::new(&settings);
        board.reset(1);
        for _ in 0..500 {
            let m = board.spawn(0).unwrap();
            assert!(m.pos.x >= 0.0 && m.pos.x < settings.board_width);
            assert!(m.pos.y >= 0.0 && m.pos.y < settings.board_height);
            assert!(m.diameter >= 0.0 && m.diameter < settings.max_marker_diameter);
        }
        assert_eq!(board.markers(0).len(), 500);
    }

    #[test]
    fn test_same_seed_same_markers() {
        let mut a = MarkerBoard::new(&settings(99));
        let mut b = MarkerBoard::new(&settings(99));
        a.reset(2);
        b.reset(2);
        for i in 0..20 {
            assert_eq!(a.spawn(i % 2), b.spawn(i % 2));
        }
        assert_eq!(a.markers(1), b.markers(1));
    }

    #[test]
    fn test_lists_are_per_player() {
        let mut board = MarkerBoard::new(&settings(1));
        board.reset(2);
        board.spawn(1);
        board.spawn(1);
        assert!(board.markers(0).is_empty());
        assert_eq!(board.markers(1).len(), 2);
    }

    #[test]
    fn test_unknown_player() {
        let mut board = MarkerBoard::new(&settings(1));
        board.reset(1);
        assert!(board.spawn(3).is_none());
        assert!(board.markers(3).is_empty());
    }

    #[test]
    fn test_reset_clears_markers() {
        let mut board = MarkerBoard::new(&settings(1));
        board.reset(1);
        board.spawn(0);
        board.reset(2);
        assert!(board.markers(0).is_empty());
        assert!(board.markers(1).is_empty());
    }
}
