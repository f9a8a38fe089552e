//! The room-graph navigator: current position plus breadcrumb history.

use std::borrow::Cow;
use std::sync::Arc;

use crate::catalog::RoomCatalog;
use crate::error::{NavError, NavResult};
use crate::room::{Room, RoomId};

/// Walks the labyrinth graph for a single session.
///
/// The history is never empty and the current room is always its last
/// element. The catalog is shared and read-only; every session owns its own
/// navigator.
#[derive(Debug, Clone)]
pub struct Navigator {
    catalog: Arc<RoomCatalog>,
    history: Vec<RoomId>,
}

impl Navigator {
    /// Start a session in `start`.
    pub fn new(catalog: Arc<RoomCatalog>, start: RoomId) -> Self {
        Self {
            catalog,
            history: vec![start],
        }
    }

    /// The catalog this navigator resolves rooms against.
    pub fn catalog(&self) -> &RoomCatalog {
        &self.catalog
    }

    /// Resolve `id` to a room: the authored entry, or a procedural one.
    pub fn resolve_room(&self, id: &RoomId) -> Cow<'_, Room> {
        self.catalog.resolve(id)
    }

    /// The id of the room the session is in.
    pub fn current_id(&self) -> &RoomId {
        // `history` is non-empty by construction and every mutation keeps it so.
        &self.history[self.history.len() - 1]
    }

    /// The room the session is in.
    pub fn current_room(&self) -> Cow<'_, Room> {
        self.resolve_room(self.current_id())
    }

    /// The room at the bottom of the history.
    pub fn start_id(&self) -> &RoomId {
        &self.history[0]
    }

    /// The room visited just before the current one, if any.
    pub fn previous_id(&self) -> Option<&RoomId> {
        self.history.iter().rev().nth(1)
    }

    /// Whether the history holds only the start room.
    pub fn is_at_root(&self) -> bool {
        self.history.len() <= 1
    }

    /// Move through a door to `target`.
    ///
    /// The target is not checked against the current room's doors; callers
    /// should only pass ids taken from [`Navigator::current_room`].
    pub fn take_door(&mut self, target: RoomId) {
        tracing::debug!(from = %self.current_id(), to = %target, "taking door");
        self.history.push(target);
    }

    /// Move to `target` only if the current room has a door leading there.
    pub fn take_door_checked(&mut self, target: RoomId) -> NavResult<()> {
        if self.current_room().door_to(&target).is_none() {
            tracing::warn!(from = %self.current_id(), to = %target, "rejected door move");
            return Err(NavError::InvalidDoor {
                from: self.current_id().clone(),
                target,
            });
        }
        self.take_door(target);
        Ok(())
    }

    /// Step back to the previous room and return its id.
    ///
    /// At the start room this fails with [`NavError::AtRoot`] and leaves the
    /// state untouched.
    pub fn go_back(&mut self) -> NavResult<&RoomId> {
        if self.is_at_root() {
            return Err(NavError::AtRoot);
        }
        let left = self.history.pop();
        tracing::debug!(left = ?left, to = %self.current_id(), "went back");
        Ok(self.current_id())
    }

    /// Discard all history and stand in `start`.
    pub fn restart(&mut self, start: RoomId) {
        tracing::debug!(start = %start, depth = self.history.len(), "restarting");
        self.history.clear();
        self.history.push(start);
    }

    /// The visited ids, oldest first, including revisits.
    pub fn breadcrumb_path(&self) -> &[RoomId] {
        &self.history
    }
}
