use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};

/// The most doors a single room may declare (and the most that are rendered).
pub const MAX_DOORS: usize = 5;

/// Identifier of a labyrinth room: a non-empty string of decimal digits.
///
/// The digits carry no meaning beyond what the procedural fallback derives
/// from them. Construction is the only place the format is checked, so every
/// `RoomId` in circulation can be resolved to a room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

impl RoomId {
    /// Validate and wrap a room identifier.
    pub fn new(id: impl Into<String>) -> NavResult<Self> {
        let id = id.into();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NavError::MalformedRoomId(id));
        }
        Ok(Self(id))
    }

    /// Wrap a string already known to consist of decimal digits only.
    pub(crate) fn from_digits(digits: String) -> Self {
        debug_assert!(!digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()));
        Self(digits)
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier decomposed into its digit values, most significant first.
    pub fn digits(&self) -> Vec<u32> {
        self.0.bytes().map(|b| u32::from(b - b'0')).collect()
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl FromStr for RoomId {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.trim())
    }
}

impl TryFrom<String> for RoomId {
    type Error = NavError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

impl AsRef<str> for RoomId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A directed, labelled edge from the room that declares it to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Door {
    /// Short text shown on the door.
    pub label: String,
    /// The room this door leads into.
    pub target: RoomId,
    /// Flavor text.
    #[serde(default)]
    pub note: String,
}

impl Door {
    /// Create a door with an empty note.
    pub fn new(label: impl Into<String>, target: RoomId) -> Self {
        Self {
            label: label.into(),
            target,
            note: String::new(),
        }
    }

    /// Attach flavor text to this door.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }
}

/// A node of the labyrinth graph with its ordered outgoing doors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// The room's identifier.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Outgoing doors in display order.
    pub doors: Vec<Door>,
}

impl Room {
    /// Create a room without doors.
    pub fn new(id: RoomId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            doors: Vec::new(),
        }
    }

    /// Append a door, keeping declaration order.
    pub fn with_door(mut self, door: Door) -> Self {
        self.doors.push(door);
        self
    }

    /// The doors a renderer should show, in order, capped at [`MAX_DOORS`].
    pub fn visible_doors(&self) -> &[Door] {
        &self.doors[..self.doors.len().min(MAX_DOORS)]
    }

    /// Find the door leading to `target`, if this room has one.
    pub fn door_to(&self, target: &RoomId) -> Option<&Door> {
        self.doors.iter().find(|d| &d.target == target)
    }

    /// Targets of all doors, in order.
    pub fn targets(&self) -> impl Iterator<Item = &RoomId> {
        self.doors.iter().map(|d| &d.target)
    }
}
