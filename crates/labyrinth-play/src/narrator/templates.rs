//! Text templates: the elevator voice of the labyrinth.

/// Describe a room's door counts.
pub fn room_summary(total: usize, open: usize, closed: usize) -> String {
    match total {
        0 => "This room has no doors. Dead end.".to_string(),
        1 => format!("This room has 1 door: {open} open, {closed} closed."),
        _ => format!("This room has {total} doors: {open} open, {closed} closed."),
    }
}

/// A row of ASCII door frames; opened doors show `*`, closed ones their number.
pub fn ascii_doors(opened: &[bool]) -> Vec<String> {
    if opened.is_empty() {
        return vec!["No doors ahead.".to_string()];
    }

    let labels: Vec<String> = opened
        .iter()
        .enumerate()
        .map(|(i, &open)| {
            if open {
                "*".to_string()
            } else {
                (i + 1).to_string()
            }
        })
        .collect();
    frames(&labels)
}

/// Three lines of `┌───┐ │ x │ └───┘` frames around the given labels.
pub fn frames<S: AsRef<str>>(labels: &[S]) -> Vec<String> {
    let top = vec!["┌───┐"; labels.len()].join(" ");
    let mid = labels
        .iter()
        .map(|l| format!("│{:^3}│", l.as_ref()))
        .collect::<Vec<_>>()
        .join(" ");
    let bottom = vec!["└───┘"; labels.len()].join(" ");
    vec![top, mid, bottom]
}

/// Describe which doors are still available, numbered from 1.
pub fn choice_block(total: usize, closed: &[usize]) -> Vec<String> {
    if total == 0 {
        return vec!["There are no doors to take from here.".to_string()];
    }

    match closed {
        [] => vec!["All doors in this room have already been opened.".to_string()],
        [only] => vec![
            "There is only one way forward from here.".to_string(),
            format!("Please take door {only}."),
        ],
        [init @ .., last] => {
            let names = init
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            vec![
                format!(
                    "There are {} closed doors remaining: {names} and {last}.",
                    closed.len()
                ),
                "You may type any of these numbers to choose a door.".to_string(),
            ]
        }
    }
}

/// The header line announcing the level of the room just entered.
pub fn level_banner(level: u32, first_visit: bool) -> String {
    if first_visit {
        format!("Level {level}  |  NEW HIGH SCORE  |  welcome to level {level}")
    } else {
        format!("Level {level}  |  welcome back to level {level}")
    }
}

/// The prompt listing closed door numbers, e.g. `..(1)(3)?`.
pub fn choice_prompt(closed: &[usize]) -> String {
    if closed.is_empty() {
        return "..(none)?".to_string();
    }
    let tokens: String = closed.iter().map(|n| format!("({n})")).collect();
    format!("..{tokens}?")
}
