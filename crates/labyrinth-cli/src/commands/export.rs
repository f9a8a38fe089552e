//! `labyrinth export`: write the active catalog as JSON.

use std::path::Path;

pub fn run(catalog: Option<&Path>, output: Option<&Path>) -> Result<(), String> {
    let catalog = super::load_catalog(catalog)?;
    let json = catalog.to_json_pretty().map_err(|e| e.to_string())?;

    match output {
        Some(path) => {
            std::fs::write(path, &json)
                .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
            println!("  Exported {} rooms to {}", catalog.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
