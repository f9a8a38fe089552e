//! Command parsing for player input.

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Take the door with this 1-based number.
    Door {
        /// Door number as shown on screen.
        number: usize,
    },
    /// Take the door matching a room id or door label.
    Go {
        /// Room id or door label.
        target: String,
    },
    /// Step back to the previous room.
    Back,
    /// Reset to the start room.
    Restart,
    /// Look behind you: the entrance and any hidden doors in.
    Turn,
    /// Describe the current room again.
    Look,
    /// Show the breadcrumb trail.
    Path,
    /// Describe the room's digit signature as a storyboard.
    Story,
    /// Show help.
    Help,
    /// Leave the labyrinth.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
pub(crate) const GO_VERBS: &[&str] = &["go", "enter", "open", "take", "door"];
pub(crate) const BACK_VERBS: &[&str] = &["back", "b", "r", "reverse", "return"];
pub(crate) const RESTART_VERBS: &[&str] = &["restart", "s", "start", "reset"];
pub(crate) const TURN_VERBS: &[&str] = &["turn", "t", "turnaround"];
pub(crate) const LOOK_VERBS: &[&str] = &["look", "l"];
pub(crate) const PATH_VERBS: &[&str] = &["path", "p", "trail", "breadcrumbs"];
pub(crate) const STORY_VERBS: &[&str] = &["story", "sig", "signature"];
pub(crate) const HELP_VERBS: &[&str] = &["help", "h", "?", "commands"];
pub(crate) const QUIT_VERBS: &[&str] = &["quit", "q", "exit", "bye"];

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look;
    }

    // `usize::from_str` accepts a leading `+`; door numbers are bare digits.
    if input.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(number) = input.parse::<usize>() {
            return Command::Door { number };
        }
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    if GO_VERBS.contains(&verb.as_str()) {
        return parse_go(rest);
    }
    if !rest.is_empty() {
        return Command::Unknown {
            input: input.to_string(),
        };
    }

    let verb = verb.as_str();
    if BACK_VERBS.contains(&verb) {
        Command::Back
    } else if RESTART_VERBS.contains(&verb) {
        Command::Restart
    } else if TURN_VERBS.contains(&verb) {
        Command::Turn
    } else if LOOK_VERBS.contains(&verb) {
        Command::Look
    } else if PATH_VERBS.contains(&verb) {
        Command::Path
    } else if STORY_VERBS.contains(&verb) {
        Command::Story
    } else if HELP_VERBS.contains(&verb) {
        Command::Help
    } else if QUIT_VERBS.contains(&verb) {
        Command::Quit
    } else {
        Command::Unknown {
            input: input.to_string(),
        }
    }
}

fn parse_go(rest: &[&str]) -> Command {
    // Skip "door" / "to" / "through" fillers
    let target_words: Vec<&str> = rest
        .iter()
        .copied()
        .skip_while(|w| {
            w.eq_ignore_ascii_case("door")
                || w.eq_ignore_ascii_case("to")
                || w.eq_ignore_ascii_case("through")
        })
        .collect();

    if target_words.is_empty() {
        return Command::Unknown {
            input: "go where?".to_string(),
        };
    }

    Command::Go {
        target: target_words.join(" "),
    }
}
