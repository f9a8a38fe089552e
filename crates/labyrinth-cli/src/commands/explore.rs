//! `labyrinth explore`: bounded depth-first exploration.

use std::path::Path;

use colored::Colorize;
use comfy_table::Table;

use labyrinth_core::walk::{ExploreLimits, ExploreStatus, explore};

pub fn run(
    catalog: Option<&Path>,
    start: &str,
    depth: usize,
    max_rooms: usize,
    json: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let start = super::parse_room_id(start)?;
    let limits = ExploreLimits {
        max_depth: depth,
        max_rooms,
    };

    let summary = explore(&catalog, start.clone(), limits);

    if json {
        let out = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    println!("{} from {start} (depth {depth})", "Exploration".bold());
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Rooms reached".to_string(), summary.rooms.to_string()]);
    table.add_row(vec![
        "Doors tried".to_string(),
        summary.doors_tried.to_string(),
    ]);
    table.add_row(vec![
        "Deepest level".to_string(),
        summary.max_depth.to_string(),
    ]);
    table.add_row(vec![
        "Uncharted rooms".to_string(),
        summary.uncharted.to_string(),
    ]);
    println!("{table}");

    if summary.status == ExploreStatus::RoomLimit {
        println!(
            "  {}",
            format!("stopped early at the {max_rooms}-room limit").yellow()
        );
    }
    Ok(())
}
