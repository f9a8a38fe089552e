//! Subcommand implementations and shared catalog loading.

pub mod explore;
pub mod export;
pub mod play;
pub mod rooms;
pub mod show;
pub mod walk;

use std::path::Path;
use std::sync::Arc;

use labyrinth_core::{RoomCatalog, RoomId};

/// Load the catalog from a JSON file, or fall back to the built-in map.
pub fn load_catalog(path: Option<&Path>) -> Result<Arc<RoomCatalog>, String> {
    let catalog = match path {
        Some(path) => {
            RoomCatalog::from_path(path).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => RoomCatalog::prime_labyrinth(),
    };
    tracing::debug!(rooms = catalog.len(), "catalog loaded");
    Ok(Arc::new(catalog))
}

/// Parse a room id given on the command line.
pub fn parse_room_id(raw: &str) -> Result<RoomId, String> {
    raw.parse::<RoomId>().map_err(|e| e.to_string())
}
