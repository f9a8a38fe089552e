//! Command parsing and door resolution.

mod command;
mod resolver;

pub use command::{Command, parse_command};
pub use resolver::{resolve_door, suggest_command};
