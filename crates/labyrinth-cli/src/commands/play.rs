//! `labyrinth play`: the interactive stdin loop.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use labyrinth_core::LabyrinthConfig;
use labyrinth_play::PlaySession;

pub fn run(catalog: Option<&Path>, start: &str, trail: usize) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let config = LabyrinthConfig::default()
        .with_start(super::parse_room_id(start)?)
        .with_trail_window(trail);

    let mut session = PlaySession::new(catalog, config);

    println!("{}", "The Prime Labyrinth".bold());
    println!("{}", "Type 'help' for commands, 'quit' to leave.".dimmed());
    println!();
    println!("{}\n", session.look());

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        match session.process(line.trim()) {
            Ok(output) => println!("{output}\n"),
            Err(e) => println!("{}\n", e.to_string().yellow()),
        }

        if session.is_finished() {
            break;
        }
    }

    Ok(())
}
