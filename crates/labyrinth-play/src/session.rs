//! Interactive play session management.

use std::sync::Arc;

use labyrinth_core::{LabyrinthConfig, Navigator, RoomCatalog, format_trail};

use crate::error::{PlayError, PlayResult};
use crate::explorer::ExplorerState;
use crate::narrator::{RoomView, describe_room, frames, help_text, storyboard};
use crate::parser::{Command, parse_command, resolve_door, suggest_command};

/// An interactive walk through the labyrinth.
pub struct PlaySession {
    navigator: Navigator,
    explorer: ExplorerState,
    config: LabyrinthConfig,
    /// Level of the current room and whether it was new when entered.
    arrival: (u32, bool),
    finished: bool,
}

impl PlaySession {
    /// Start a session in the configured start room.
    pub fn new(catalog: Arc<RoomCatalog>, config: LabyrinthConfig) -> Self {
        let navigator = Navigator::new(catalog, config.start_room.clone());
        let explorer = ExplorerState::new(&config.start_room);
        Self {
            navigator,
            explorer,
            config,
            arrival: (1, true),
            finished: false,
        }
    }

    /// The underlying navigator.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Door marks and levels.
    pub fn explorer(&self) -> &ExplorerState {
        &self.explorer
    }

    /// Whether the player asked to quit.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Process a player command and return a response.
    pub fn process(&mut self, input: &str) -> PlayResult<String> {
        let command = parse_command(input);
        self.execute(command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> PlayResult<String> {
        match command {
            Command::Door { number } => self.do_door(number),
            Command::Go { target } => self.do_go(&target),
            Command::Back => self.do_back(),
            Command::Restart => Ok(self.do_restart()),
            Command::Turn => Ok(self.do_turn()),
            Command::Look => Ok(self.look()),
            Command::Path => Ok(self.do_path()),
            Command::Story => Ok(storyboard(&self.navigator.current_room())),
            Command::Help => Ok(help_text().to_string()),
            Command::Quit => {
                self.finished = true;
                Ok("Goodnight, wanderer.".to_string())
            }
            Command::Unknown { input } => Err(PlayError::UnknownCommand {
                suggestion: suggest_command(&input),
                input,
            }),
        }
    }

    /// Describe the current room.
    pub fn look(&self) -> String {
        let current = self.navigator.current_id();
        let room = self.navigator.current_room();
        let (level, first_visit) = self.arrival;
        let view = RoomView {
            room: &room,
            opened: self
                .explorer
                .opened_flags(current, room.visible_doors().len()),
            level,
            first_visit,
            trail: format_trail(self.navigator.breadcrumb_path(), self.config.trail_window),
        };
        describe_room(&view)
    }

    fn do_door(&mut self, number: usize) -> PlayResult<String> {
        let available = self.navigator.current_room().visible_doors().len();
        if number == 0 || number > available {
            return Err(PlayError::NoSuchDoor { number, available });
        }
        self.open_door(number - 1);
        Ok(self.look())
    }

    fn do_go(&mut self, target: &str) -> PlayResult<String> {
        let index = resolve_door(&self.navigator.current_room(), target)
            .ok_or_else(|| PlayError::NoDoorMatching(target.to_string()))?;
        self.open_door(index);
        Ok(self.look())
    }

    fn open_door(&mut self, index: usize) {
        let current = self.navigator.current_id().clone();
        let target = self.navigator.current_room().visible_doors()[index]
            .target
            .clone();
        self.explorer.mark_opened(&current, index);
        self.arrival = self.explorer.enter(&target);
        self.navigator.take_door(target);
    }

    fn do_back(&mut self) -> PlayResult<String> {
        let back_to = self.navigator.go_back()?.clone();
        self.arrival = self.explorer.enter(&back_to);
        tracing::debug!(room = %back_to, "player reversed");
        Ok(format!("You step back into {back_to}.\n\n{}", self.look()))
    }

    fn do_restart(&mut self) -> String {
        let start = self.config.start_room.clone();
        self.navigator.restart(start.clone());
        self.explorer.reset(&start);
        self.arrival = (1, true);
        format!(
            "Elevator voice: resetting the Labyrinth. Returning to the lobby.\n\n{}",
            self.look()
        )
    }

    fn do_turn(&self) -> String {
        let Some(entrance) = self.navigator.previous_id() else {
            return "You are at the lobby. There is no door in yet.".to_string();
        };
        let current = self.navigator.current_id();

        let mut entry = format!("Door IN [1] {entrance}");
        if let Some(level) = self.explorer.level_of(entrance) {
            entry.push_str(&format!(" (level {level})"));
        }
        let mut lines = vec!["You turn around.".to_string(), String::new(), entry];

        let hidden: Vec<_> = self
            .navigator
            .catalog()
            .incoming(current)
            .into_iter()
            .filter(|room| &room.id != entrance)
            .collect();

        if hidden.is_empty() {
            lines.push("No hidden doors lead into this room.".to_string());
            return lines.join("\n");
        }

        lines.push(format!("Backroom scan: {} hidden doors found.", hidden.len()));
        lines.push(String::new());
        lines.push("Hidden Doors:".to_string());
        for (i, room) in hidden.iter().enumerate() {
            lines.push(format!(" [{}] {} ({})", i + 2, room.id, room.name));
        }

        let mut icons = vec!["IN"];
        icons.extend(hidden.iter().map(|_| "?"));
        lines.push(String::new());
        lines.extend(frames(&icons));
        lines.join("\n")
    }

    fn do_path(&self) -> String {
        let path = self.navigator.breadcrumb_path();
        format!(
            "Trail: {}\n{} rooms deep, {} distinct rooms seen.",
            format_trail(path, self.config.trail_window),
            path.len(),
            self.explorer.rooms_seen()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labyrinth_core::{NavError, RoomId};

    fn session() -> PlaySession {
        PlaySession::new(
            Arc::new(RoomCatalog::prime_labyrinth()),
            LabyrinthConfig::default(),
        )
    }

    fn trail(session: &PlaySession) -> Vec<&str> {
        session
            .navigator()
            .breadcrumb_path()
            .iter()
            .map(RoomId::as_str)
            .collect()
    }

    #[test]
    fn look_describes_lobby() {
        let session = session();
        let output = session.look();
        assert!(output.contains("The Lobby (2,2,3)"));
        assert!(output.contains("NEW HIGH SCORE  |  welcome to level 1"));
        assert!(output.contains("..(1)(2)(3)?"));
    }

    #[test]
    fn door_number_moves_and_marks() {
        let mut session = session();
        let output = session.process("1").unwrap();
        assert!(output.contains("The Twin Gate (3,3,5)"));
        assert!(output.contains("welcome to level 2"));
        assert_eq!(trail(&session), vec!["223", "335"]);
        assert!(session.explorer().is_opened(&RoomId::new("223").unwrap(), 0));

        let output = session.process("back").unwrap();
        assert!(output.contains("You step back into 223."));
        assert!(output.contains("welcome back to level 1"));
        assert!(output.contains("[1] Left arch → 335 *"));
        assert!(output.contains("..(2)(3)?"));
    }

    #[test]
    fn go_by_id_and_label() {
        let mut session = session();
        session.process("go 227").unwrap();
        let output = session.process("go far end").unwrap();
        assert!(output.contains("The Broken Stair (4,4,2)"));
        assert_eq!(trail(&session), vec!["223", "227", "442"]);
    }

    #[test]
    fn back_at_lobby_is_a_notice() {
        let mut session = session();
        let err = session.process("r").unwrap_err();
        assert!(matches!(err, PlayError::Nav(NavError::AtRoot)));
        assert_eq!(trail(&session), vec!["223"]);
    }

    #[test]
    fn missing_doors_are_rejected() {
        let mut session = session();
        assert!(matches!(
            session.process("4").unwrap_err(),
            PlayError::NoSuchDoor {
                number: 4,
                available: 3
            }
        ));
        assert!(matches!(
            session.process("0").unwrap_err(),
            PlayError::NoSuchDoor { number: 0, .. }
        ));
        assert!(matches!(
            session.process("go 442").unwrap_err(),
            PlayError::NoDoorMatching(_)
        ));
        assert_eq!(trail(&session), vec!["223"]);
    }

    #[test]
    fn restart_forgets_the_run() {
        let mut session = session();
        session.process("1").unwrap();
        session.process("1").unwrap();
        let output = session.process("s").unwrap();
        assert!(output.starts_with("Elevator voice"));
        assert!(output.contains("welcome to level 1"));
        assert_eq!(trail(&session), vec!["223"]);
        assert_eq!(session.explorer().rooms_seen(), 1);
        assert!(!session.explorer().is_opened(&RoomId::new("223").unwrap(), 0));
    }

    #[test]
    fn turn_reveals_hidden_doors() {
        let mut session = session();
        assert!(session.process("t").unwrap().contains("no door in yet"));

        session.process("go 227").unwrap();
        session.process("go 442").unwrap();
        let output = session.process("turn").unwrap();
        assert!(output.contains("Door IN [1] 227 (level 2)"));
        assert!(output.contains("Backroom scan: 1 hidden doors found."));
        assert!(output.contains(" [2] 499 (Silent Square (4,9,9))"));
        assert!(output.contains("│IN │ │ ? │"));
    }

    #[test]
    fn turn_excludes_the_entrance() {
        let mut session = session();
        session.process("1").unwrap();
        let output = session.process("turn").unwrap();
        assert!(output.contains("Door IN [1] 223"));
        assert!(output.contains(" [2] 557 (Hall of Mirrors (5,5,7))"));
        assert!(!output.contains(" [2] 223"));
    }

    #[test]
    fn turn_without_hidden_doors() {
        let mut session = session();
        session.process("3").unwrap();
        // Only the lobby leads into the corridor.
        let output = session.process("turn").unwrap();
        assert!(output.contains("Door IN [1] 223"));
        assert!(output.contains("No hidden doors lead into this room."));
    }

    #[test]
    fn uncharted_rooms_are_playable() {
        let mut session = session();
        session.process("1").unwrap();
        session.process("1").unwrap();
        let output = session.process("go 779").unwrap();
        assert!(output.contains("Uncharted Node (779)"));
        assert!(output.contains("Echo 1 → 779"));
        let output = session.process("turn").unwrap();
        assert!(output.contains("Door IN [1] 557"));
        assert!(output.contains("577"));
    }

    #[test]
    fn turn_shows_entrance_level_after_back() {
        let mut session = session();
        session.process("1").unwrap();
        session.process("1").unwrap();
        session.process("back").unwrap();
        session.process("go 557").unwrap();
        let output = session.process("t").unwrap();
        assert!(output.contains("Door IN [1] 335 (level 2)"));
    }

    #[test]
    fn story_describes_current_room() {
        let mut session = session();
        let output = session.process("story").unwrap();
        assert!(output.contains("Scene: The Lobby (2,2,3)  [223]"));
        assert!(output.contains("parity 001"));

        session.process("1").unwrap();
        let output = session.process("sig").unwrap();
        // 3,3,5: total 11, all odd
        assert!(output.contains("total 11, spread 2, mod9 2, apex 4, parity 111"));
        assert!(output.contains("Mood: hopeful"));
        assert!(output.contains("hard contrast, deep shadows"));
    }

    #[test]
    fn path_shows_trail() {
        let mut session = session();
        session.process("1").unwrap();
        let output = session.process("path").unwrap();
        assert!(output.contains("Trail: 223/335"));
        assert!(output.contains("2 rooms deep, 2 distinct rooms seen."));
    }

    #[test]
    fn unknown_command_suggests() {
        let mut session = session();
        let err = session.process("restrat").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown command: restrat (did you mean 'restart'?)"
        );
    }

    #[test]
    fn quit_finishes() {
        let mut session = session();
        assert!(!session.is_finished());
        assert_eq!(session.process("q").unwrap(), "Goodnight, wanderer.");
        assert!(session.is_finished());
    }
}
