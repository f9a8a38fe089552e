//! Per-session explorer state: opened doors and room levels.

use std::collections::{BTreeSet, HashMap};

use labyrinth_core::RoomId;

/// What the explorer has done so far in this run of the labyrinth.
///
/// Door marks and levels survive going back; both are forgotten on restart.
#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    /// 0-based indices of opened doors, per room.
    opened: HashMap<RoomId, BTreeSet<usize>>,
    /// Level number assigned to each room on first entry.
    levels: HashMap<RoomId, u32>,
}

impl ExplorerState {
    /// Create a fresh state with `start` entered as level 1.
    pub fn new(start: &RoomId) -> Self {
        let mut state = Self::default();
        state.enter(start);
        state
    }

    /// Record entering `room`, returning its level and whether it is new.
    pub fn enter(&mut self, room: &RoomId) -> (u32, bool) {
        if let Some(&level) = self.levels.get(room) {
            return (level, false);
        }
        let level = self.levels.len() as u32 + 1;
        self.levels.insert(room.clone(), level);
        (level, true)
    }

    /// The level of `room`, if it was ever entered.
    pub fn level_of(&self, room: &RoomId) -> Option<u32> {
        self.levels.get(room).copied()
    }

    /// Number of distinct rooms entered.
    pub fn rooms_seen(&self) -> usize {
        self.levels.len()
    }

    /// Mark door `index` of `room` as opened.
    pub fn mark_opened(&mut self, room: &RoomId, index: usize) {
        self.opened.entry(room.clone()).or_default().insert(index);
    }

    /// Whether door `index` of `room` was opened.
    pub fn is_opened(&self, room: &RoomId, index: usize) -> bool {
        self.opened
            .get(room)
            .is_some_and(|doors| doors.contains(&index))
    }

    /// Opened flags for the first `count` doors of `room`.
    pub fn opened_flags(&self, room: &RoomId, count: usize) -> Vec<bool> {
        (0..count).map(|i| self.is_opened(room, i)).collect()
    }

    /// Forget everything and re-enter `start` as level 1.
    pub fn reset(&mut self, start: &RoomId) {
        self.opened.clear();
        self.levels.clear();
        self.enter(start);
    }
}
