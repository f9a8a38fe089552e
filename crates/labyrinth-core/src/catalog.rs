//! The immutable, hand-authored part of the labyrinth.
//!
//! A [`RoomCatalog`] is built once at startup, validated, and then only ever
//! read. Door targets that are missing from the catalog are not errors: the
//! navigator synthesizes those rooms on demand.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};
use crate::fallback::synthesize_room;
use crate::room::{Door, MAX_DOORS, Room, RoomId};

/// Serialized form of a catalog: a flat list of rooms.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    rooms: Vec<Room>,
}

/// Mapping from room id to authored room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    rooms: BTreeMap<RoomId, Room>,
}

impl RoomCatalog {
    /// Build a catalog from rooms, rejecting duplicates and rooms whose door
    /// count falls outside `1..=MAX_DOORS`.
    pub fn new(rooms: impl IntoIterator<Item = Room>) -> NavResult<Self> {
        let mut map = BTreeMap::new();
        for room in rooms {
            if room.doors.is_empty() {
                return Err(NavError::NoDoors(room.id));
            }
            if room.doors.len() > MAX_DOORS {
                return Err(NavError::TooManyDoors {
                    count: room.doors.len(),
                    id: room.id,
                    max: MAX_DOORS,
                });
            }
            match map.entry(room.id.clone()) {
                Entry::Occupied(_) => return Err(NavError::DuplicateRoom(room.id)),
                Entry::Vacant(slot) => {
                    slot.insert(room);
                }
            }
        }
        Ok(Self { rooms: map })
    }

    /// The built-in Prime Labyrinth map.
    pub fn prime_labyrinth() -> Self {
        let rooms = authored_rooms()
            .into_iter()
            .map(|room| (room.id.clone(), room))
            .collect();
        Self { rooms }
    }

    /// Parse a catalog from its JSON representation.
    pub fn from_json(json: &str) -> NavResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.rooms)
    }

    /// Read and parse a JSON catalog file.
    pub fn from_path(path: &Path) -> NavResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), rooms = catalog.len(), "loaded room catalog");
        Ok(catalog)
    }

    /// Serialize the catalog as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> NavResult<String> {
        let file = CatalogFile {
            rooms: self.rooms.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Look up an authored room.
    pub fn get(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Resolve any room id: the authored room when there is one, otherwise the
    /// procedural room synthesized from the id.
    pub fn resolve(&self, id: &RoomId) -> Cow<'_, Room> {
        match self.rooms.get(id) {
            Some(room) => Cow::Borrowed(room),
            None => Cow::Owned(synthesize_room(id)),
        }
    }

    /// Whether `id` is an authored room.
    pub fn contains(&self, id: &RoomId) -> bool {
        self.rooms.contains_key(id)
    }

    /// All authored rooms, ordered by id.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of authored rooms.
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Whether the catalog has no rooms at all.
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Authored rooms that have at least one door leading into `id`.
    ///
    /// Procedural rooms are never listed: they cannot be enumerated.
    pub fn incoming(&self, id: &RoomId) -> Vec<&Room> {
        self.rooms
            .values()
            .filter(|room| room.door_to(id).is_some())
            .collect()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::prime_labyrinth()
    }
}

fn rid(id: &str) -> RoomId {
    RoomId::from_digits(id.to_string())
}

fn door(label: &str, target: &str, note: &str) -> Door {
    Door::new(label, rid(target)).with_note(note)
}

/// The hand-placed rooms of the Prime Labyrinth.
fn authored_rooms() -> Vec<Room> {
    vec![
        Room::new(rid("223"), "The Lobby (2,2,3)")
            .with_door(door("Left arch", "335", "Two identical pillars flank the opening."))
            .with_door(door("Amber door", "355", "Warm light leaks under the frame."))
            .with_door(door("Narrow slit", "227", "A draft hums through the gap.")),
        Room::new(rid("335"), "The Twin Gate (3,3,5)")
            .with_door(door("Mirror door", "557", "Your reflection arrives a moment late."))
            .with_door(door("Lantern hatch", "337", "Someone left a lantern burning.")),
        Room::new(rid("355"), "Amber Hall (3,5,5)")
            .with_door(door("Gilded door", "557", "The handle is warm to the touch."))
            .with_door(door("Quiet door", "499", "No sound passes through it.")),
        Room::new(rid("227"), "The Long Corridor (2,2,7)")
            .with_door(door("Far end", "442", "The corridor slopes gently downward."))
            .with_door(door("Side passage", "499", "Chalk marks count to seven.")),
        Room::new(rid("337"), "Lantern Room (3,3,7)")
            .with_door(door("Stairwell", "377", "Steps spiral up into the dark."))
            .with_door(door("Lobby return", "223", "You can hear the lobby clock.")),
        Room::new(rid("557"), "Hall of Mirrors (5,5,7)")
            .with_door(door("Silver door", "577", "Cold air smells of rain."))
            .with_door(door("Cracked mirror", "779", "The glass gives way like water."))
            .with_door(door("Back to the gate", "335", "The twin pillars again.")),
        Room::new(rid("499"), "Silent Square (4,9,9)")
            .with_door(door("Stone arch", "442", "Moss muffles every step."))
            .with_door(door("Iron gate", "577", "It swings open without a sound.")),
        Room::new(rid("442"), "The Broken Stair (4,4,2)")
            .with_door(door("Climb out", "223", "The stair ends at the lobby floor.")),
        Room::new(rid("577"), "The Observatory (5,7,7)")
            .with_door(door("Telescope door", "779", "Brass gears tick behind the panel."))
            .with_door(door("Amber stair", "355", "The glow of the amber hall below.")),
    ]
}
