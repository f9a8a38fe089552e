//! Session configuration.

use crate::room::RoomId;
use crate::trail::DEFAULT_TRAIL_WINDOW;

/// Id of the lobby every session starts in unless told otherwise.
pub const DEFAULT_START_ROOM: &str = "223";

/// Largest accepted trail window.
pub const MAX_TRAIL_WINDOW: usize = 32;

/// Configuration for a labyrinth session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabyrinthConfig {
    /// The room a session starts in and returns to on restart.
    pub start_room: RoomId,
    /// How many rooms the compact trail shows.
    pub trail_window: usize,
    /// RNG seed for random walks.
    pub seed: u64,
}

impl Default for LabyrinthConfig {
    fn default() -> Self {
        Self {
            start_room: RoomId::from_digits(DEFAULT_START_ROOM.to_string()),
            trail_window: DEFAULT_TRAIL_WINDOW,
            seed: 42,
        }
    }
}

impl LabyrinthConfig {
    /// Set the start room.
    pub fn with_start(mut self, start: RoomId) -> Self {
        self.start_room = start;
        self
    }

    /// Set the trail window (clamped to 1-32).
    pub fn with_trail_window(mut self, window: usize) -> Self {
        self.trail_window = window.clamp(1, MAX_TRAIL_WINDOW);
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
