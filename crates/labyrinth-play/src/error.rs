//! Error types for play sessions.

use labyrinth_core::NavError;
use thiserror::Error;

/// Result type for play operations.
pub type PlayResult<T> = Result<T, PlayError>;

/// Errors that can occur while playing.
///
/// None of these end a session; the play loop reports them and carries on.
#[derive(Debug, Error)]
pub enum PlayError {
    /// Navigation failed (e.g. going back from the lobby).
    #[error(transparent)]
    Nav(#[from] NavError),

    /// The door number is not shown in this room.
    #[error("there is no door {number} here (choose 1-{available})")]
    NoSuchDoor {
        /// The requested door number.
        number: usize,
        /// How many doors the room shows.
        available: usize,
    },

    /// No door matched the given room id or label.
    #[error("no door here leads to \"{0}\"")]
    NoDoorMatching(String),

    /// Invalid command input.
    #[error("unknown command: {input}{}", hint(.suggestion))]
    UnknownCommand {
        /// What the player typed.
        input: String,
        /// The closest known command, if any.
        suggestion: Option<&'static str>,
    },
}

fn hint(suggestion: &Option<&'static str>) -> String {
    suggestion
        .map(|s| format!(" (did you mean '{s}'?)"))
        .unwrap_or_default()
}
