//! `labyrinth rooms`: table of the authored rooms.

use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

pub fn run(catalog: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Doors", "Leads to"]);

    for room in catalog.rooms() {
        let targets: Vec<&str> = room.targets().map(|t| t.as_str()).collect();
        table.add_row(vec![
            room.id.to_string(),
            room.name.clone(),
            room.doors.len().to_string(),
            targets.join(", "),
        ]);
    }

    println!("{table}");
    println!(
        "  {} authored rooms; every other id is {}",
        catalog.len(),
        "procedural".dimmed()
    );
    Ok(())
}
