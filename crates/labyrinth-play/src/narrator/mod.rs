//! Narrator: turns session state into the text a player reads.

mod templates;

pub use templates::{
    ascii_doors, choice_block, choice_prompt, frames, level_banner, room_summary,
};

use labyrinth_core::{Room, RoomSignature};

const RULE_WIDTH: usize = 40;

/// Everything needed to describe the room a player stands in.
#[derive(Debug, Clone)]
pub struct RoomView<'a> {
    /// The room itself.
    pub room: &'a Room,
    /// Opened flag for each visible door.
    pub opened: Vec<bool>,
    /// Level number of the room.
    pub level: u32,
    /// Whether this is the first time the room was entered.
    pub first_visit: bool,
    /// Compact breadcrumb trail.
    pub trail: String,
}

impl RoomView<'_> {
    /// 1-based numbers of the doors not yet opened.
    pub fn closed_numbers(&self) -> Vec<usize> {
        self.opened
            .iter()
            .enumerate()
            .filter(|(_, open)| !**open)
            .map(|(i, _)| i + 1)
            .collect()
    }
}

/// Render the full room description.
pub fn describe_room(view: &RoomView<'_>) -> String {
    let doors = view.room.visible_doors();
    let open = view.opened.iter().filter(|o| **o).count();
    let closed = view.closed_numbers();

    let mut lines = vec![
        "=".repeat(RULE_WIDTH),
        level_banner(view.level, view.first_visit),
        "-".repeat(RULE_WIDTH),
        format!("{}  [{}]", view.room.name, view.room.id),
        format!("Trail: {}", view.trail),
        room_summary(doors.len(), open, doors.len() - open),
    ];

    if !doors.is_empty() {
        lines.push(String::new());
        lines.push("Doors:".to_string());
        for (i, door) in doors.iter().enumerate() {
            let mark = if view.opened.get(i).copied().unwrap_or(false) {
                " *"
            } else {
                ""
            };
            lines.push(format!("  [{}] {} → {}{mark}", i + 1, door.label, door.target));
            if !door.note.is_empty() {
                lines.push(format!("      {}", door.note));
            }
        }
        lines.push(String::new());
        lines.extend(ascii_doors(&view.opened));
    }

    lines.extend(choice_block(doors.len(), &closed));
    lines.push(String::new());
    lines.push("Info: R to reverse, S to start again, T to turnaround, Q to quit".to_string());
    lines.push(choice_prompt(&closed));
    lines.join("\n")
}

/// Render the storyboard cues of a room from its digit signature.
pub fn storyboard(room: &Room) -> String {
    let sig = RoomSignature::of(&room.id);
    let board = sig.storyboard();
    [
        format!("Scene: {}  [{}]", room.name, room.id),
        format!(
            "Signature: total {}, spread {}, mod9 {}, apex {}, parity {}",
            sig.total, sig.spread, sig.mod9, sig.apex, sig.parity_code
        ),
        format!("Mood: {}", board.mood),
        format!("Setting: {}, {}", board.room_scale, board.lighting),
        format!("Camera: {}", board.camera),
    ]
    .join("\n")
}

/// Help text for the play loop.
pub fn help_text() -> &'static str {
    "**Commands**\n\
     <number> - take the door with that number\n\
     go <room id | door label> - take a door by its target or label\n\
     back (or r) - step back to the previous room\n\
     restart (or s) - return to the lobby and forget this run\n\
     turn (or t) - look behind you for the entrance and hidden doors\n\
     look (or l) - describe the room again\n\
     path (or p) - show the breadcrumb trail\n\
     story (or sig) - read the room's signature as a storyboard\n\
     help (or ?) - show this help\n\
     quit (or q) - leave the labyrinth"
}
