//! `labyrinth walk`: leftmost or random walks.

use std::path::Path;

use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use labyrinth_core::walk::{StopReason, Walk, leftmost_walk, random_walk};

use crate::Strategy;

pub fn run(
    catalog: Option<&Path>,
    strategy: Strategy,
    start: &str,
    steps: usize,
    seed: u64,
    json: bool,
) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let start = super::parse_room_id(start)?;

    let walk = match strategy {
        Strategy::Leftmost => leftmost_walk(&catalog, start, steps),
        Strategy::Random => {
            let mut rng = StdRng::seed_from_u64(seed);
            random_walk(&catalog, start, steps, &mut rng)
        }
    };

    if json {
        let out = serde_json::to_string_pretty(&walk).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    print_walk(&catalog, &walk);
    Ok(())
}

fn print_walk(catalog: &labyrinth_core::RoomCatalog, walk: &Walk) {
    println!("{}", "Walk".bold());
    for (i, id) in walk.path.iter().enumerate() {
        let room = catalog.resolve(id);
        println!("  {i:>3}  {id:<8} {}", room.name.dimmed());
    }
    println!();

    let reason = match &walk.stop {
        StopReason::MaxSteps => "step budget used up".to_string(),
        StopReason::Revisit(id) => format!("loop closed at {id}"),
        StopReason::DeadEnd => "dead end".to_string(),
    };
    println!("  {} steps, stopped: {reason}", walk.steps());
}
