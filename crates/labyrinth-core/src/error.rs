use crate::room::RoomId;

/// Alias for `Result<T, NavError>`.
pub type NavResult<T> = Result<T, NavError>;

/// Errors that can occur when building a catalog or navigating the labyrinth.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// `go_back` was called while the history holds only the start room.
    #[error("already at the start room; there is no way back")]
    AtRoot,

    /// A room identifier contained something other than decimal digits.
    #[error("malformed room id: \"{0}\" (expected decimal digits only)")]
    MalformedRoomId(String),

    /// A checked door move named a target the current room has no door to.
    #[error("room {from} has no door to {target}")]
    InvalidDoor {
        /// The room the move was attempted from.
        from: RoomId,
        /// The requested target room.
        target: RoomId,
    },

    /// Two catalog entries share the same room id.
    #[error("duplicate room in catalog: {0}")]
    DuplicateRoom(RoomId),

    /// A catalog room declares no doors, which would make it a dead end.
    #[error("room {0} has no doors")]
    NoDoors(RoomId),

    /// A catalog room declares more doors than can be rendered.
    #[error("room {id} has {count} doors (at most {max} allowed)")]
    TooManyDoors {
        /// The offending room.
        id: RoomId,
        /// How many doors it declares.
        count: usize,
        /// The allowed maximum.
        max: usize,
    },

    /// The catalog source could not be read.
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog source is not valid catalog JSON.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
