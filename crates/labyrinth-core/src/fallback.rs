//! Procedural rooms for identifiers the catalog does not know.
//!
//! Every synthesized room is a pure function of its id: resolving the same
//! id twice yields the same name and the same ordered doors. The expansion is
//! hash-like and makes no promise about collisions or cycles (some ids even
//! get a door back to themselves).

use crate::room::{Door, MAX_DOORS, Room, RoomId};

/// Flavor text carried by every synthesized door.
pub const ECHO_NOTE: &str = "A procedural echo of the labyrinth.";

/// Build the procedural room for `id`.
pub fn synthesize_room(id: &RoomId) -> Room {
    let digits = id.digits();
    let base = match digits.iter().sum::<u32>() {
        0 => 1,
        sum => sum,
    };
    let door_count = (base % 4 + 1).clamp(1, MAX_DOORS as u32);

    // Missing and zero digits both fall back to the defaults.
    let second = digit_or(&digits, 1, 2);
    let third = digit_or(&digits, 2, 3);

    let doors = (0..door_count)
        .map(|i| {
            let target = RoomId::from_digits(format!(
                "{}{}{}",
                (base + i + 2) % 9,
                second + i,
                third + i
            ));
            Door::new(format!("Echo {} → {}", i + 1, target), target).with_note(ECHO_NOTE)
        })
        .collect();

    Room {
        id: id.clone(),
        name: format!("Uncharted Node ({id})"),
        doors,
    }
}

fn digit_or(digits: &[u32], index: usize, default: u32) -> u32 {
    match digits.get(index) {
        Some(&d) if d != 0 => d,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> RoomId {
        RoomId::new(s).unwrap()
    }

    fn targets(room: &Room) -> Vec<&str> {
        room.targets().map(RoomId::as_str).collect()
    }

    #[test]
    fn three_digit_expansion() {
        let room = synthesize_room(&id("223"));
        assert_eq!(room.name, "Uncharted Node (223)");
        // base 7 -> 4 doors
        assert_eq!(targets(&room), vec!["023", "134", "245", "356"]);
        assert_eq!(room.doors[0].label, "Echo 1 → 023");
        assert_eq!(room.doors[3].label, "Echo 4 → 356");
        assert!(room.doors.iter().all(|d| d.note == ECHO_NOTE));
    }

    #[test]
    fn short_id_uses_defaults() {
        let room = synthesize_room(&id("9"));
        assert_eq!(targets(&room), vec!["223", "334"]);
    }

    #[test]
    fn all_zero_id_treated_as_base_one() {
        let room = synthesize_room(&id("000"));
        assert_eq!(room.name, "Uncharted Node (000)");
        assert_eq!(targets(&room), vec!["323", "434"]);
    }

    #[test]
    fn zero_digits_fall_back_like_missing_ones() {
        let with_zeros = synthesize_room(&id("100"));
        let short = synthesize_room(&id("1"));
        assert_eq!(targets(&with_zeros), targets(&short));
    }

    #[test]
    fn components_are_concatenated_without_padding() {
        let room = synthesize_room(&id("779"));
        // base 23 -> 4 doors, the first of which loops back
        assert_eq!(targets(&room), vec!["779", "8810", "0911", "11012"]);
    }

    #[test]
    fn synthesis_is_deterministic() {
        for raw in ["1", "42", "999", "31415926", "0000000"] {
            assert_eq!(synthesize_room(&id(raw)), synthesize_room(&id(raw)));
        }
    }
}
