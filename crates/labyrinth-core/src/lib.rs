//! Core types for the Prime Labyrinth: rooms, doors, and the room-graph navigator.
//!
//! The labyrinth is a directed graph. A small hand-authored [`RoomCatalog`]
//! places the first rooms; every other room id resolves to a procedural room
//! derived from its digits. A [`Navigator`] walks that graph for one session,
//! keeping a breadcrumb history that supports going back and restarting.

/// The immutable authored room map.
pub mod catalog;
/// Builder-style session configuration.
pub mod config;
/// Error types used throughout the crate.
pub mod error;
/// Deterministic procedural rooms for uncharted ids.
pub mod fallback;
/// The breadcrumb-keeping room-graph navigator.
pub mod navigator;
/// Room identifiers, doors, and rooms.
pub mod room;
/// Digit signatures and storyboard cues.
pub mod signature;
/// Compact breadcrumb rendering.
pub mod trail;
/// Automatic walks and exploration.
pub mod walk;

/// Re-export catalog type.
pub use catalog::RoomCatalog;
/// Re-export configuration.
pub use config::LabyrinthConfig;
/// Re-export error types.
pub use error::{NavError, NavResult};
/// Re-export navigator.
pub use navigator::Navigator;
/// Re-export room model types.
pub use room::{Door, MAX_DOORS, Room, RoomId};
/// Re-export signature types.
pub use signature::{RoomSignature, Storyboard};
/// Re-export trail formatting.
pub use trail::format_trail;
