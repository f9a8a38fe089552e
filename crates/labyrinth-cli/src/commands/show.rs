//! `labyrinth show`: one room, its doors and where it is reached from.

use std::path::Path;

use colored::Colorize;
use labyrinth_play::narrator::storyboard;

pub fn run(catalog: Option<&Path>, id: &str, story: bool) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let id = super::parse_room_id(id)?;
    let room = catalog.resolve(&id);

    let kind = if catalog.contains(&id) {
        "authored".green()
    } else {
        "uncharted".yellow()
    };
    println!("{}  [{}]  {kind}", room.name.bold(), room.id);
    println!();

    println!("  {}", "Doors".bold());
    for (i, door) in room.visible_doors().iter().enumerate() {
        println!("  [{}] {} → {}", i + 1, door.label, door.target);
        if !door.note.is_empty() {
            println!("      {}", door.note.dimmed());
        }
    }

    let incoming = catalog.incoming(&id);
    if !incoming.is_empty() {
        println!();
        println!("  {}", "Reached from".bold());
        for source in incoming {
            println!("  {} ({})", source.id, source.name);
        }
    }

    if story {
        println!();
        println!("  {}", "Storyboard".bold());
        for line in storyboard(&room).lines() {
            println!("  {line}");
        }
    }
    Ok(())
}
