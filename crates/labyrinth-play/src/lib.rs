//! Interactive play sessions for the Prime Labyrinth.
//!
//! Wraps the core navigator in a text-adventure loop: door numbers and
//! short commands are parsed, moves are narrated by the elevator voice, and
//! each run remembers which doors were opened and which level every room is.

/// Error types for play sessions.
pub mod error;
/// Door marks and room levels.
pub mod explorer;
/// Narration templates.
pub mod narrator;
/// Command parsing and door resolution.
pub mod parser;
/// Play session management.
pub mod session;

pub use error::{PlayError, PlayResult};
pub use explorer::ExplorerState;
pub use parser::{Command, parse_command};
pub use session::PlaySession;
