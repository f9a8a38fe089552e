//! Door resolution and command suggestions with fuzzy matching.

use labyrinth_core::Room;
use strsim::jaro_winkler;

use super::command::{
    BACK_VERBS, GO_VERBS, HELP_VERBS, LOOK_VERBS, PATH_VERBS, QUIT_VERBS, RESTART_VERBS,
    STORY_VERBS, TURN_VERBS,
};

/// Minimum similarity score for fuzzy matching (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Resolve a `go` target to the 0-based index of one of the room's visible doors.
///
/// Tries, in order: the target room id, the exact door label
/// (case-insensitive), then the closest fuzzy label match.
pub fn resolve_door(room: &Room, input: &str) -> Option<usize> {
    let doors = room.visible_doors();
    let input = input.trim();

    if let Some(index) = doors.iter().position(|d| d.target.as_str() == input) {
        return Some(index);
    }

    if let Some(index) = doors
        .iter()
        .position(|d| d.label.eq_ignore_ascii_case(input))
    {
        return Some(index);
    }

    let input_lower = input.to_lowercase();
    doors
        .iter()
        .enumerate()
        .map(|(index, door)| (index, jaro_winkler(&input_lower, &door.label.to_lowercase())))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index)
}

/// Suggest the command word closest to an unknown verb.
pub fn suggest_command(input: &str) -> Option<&'static str> {
    let verb = input.split_whitespace().next()?.to_lowercase();
    // One-letter shortcuts would match almost anything.
    if verb.chars().count() < 2 {
        return None;
    }

    [
        GO_VERBS,
        BACK_VERBS,
        RESTART_VERBS,
        TURN_VERBS,
        LOOK_VERBS,
        PATH_VERBS,
        STORY_VERBS,
        HELP_VERBS,
        QUIT_VERBS,
    ]
    .iter()
    .flat_map(|verbs| verbs.iter().copied())
    .filter(|candidate| candidate.len() > 1)
    .map(|candidate| (candidate, jaro_winkler(&verb, candidate)))
    .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
    .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
    .map(|(candidate, _)| candidate)
}
