use std::path::Path;

use anyhow::{Context, Result};
use hearth_rs::entities::ApplianceKind;
use hearth_rs::io::export::export_inventory;
use hearth_rs::io::import::import_inventory;
use log::{LevelFilter, info};
use tally::io;

const ROSTER_PATH: &str = "assets/apartment.json";

fn main() -> Result<()> {
    io::init_logger(LevelFilter::Info)?;

    let roster = io::read_roster(Path::new(ROSTER_PATH))?;
    let mut inventory =
        import_inventory(&roster).context("roster contains an invalid appliance")?;
    info!("loaded {} appliances from {ROSTER_PATH}", inventory.len());

    println!("--- Current state ---");
    for (_, appliance) in inventory.iter() {
        println!("{appliance}");
    }

    // plug in everything except the hair dryers
    for key in inventory.all() {
        let appliance = inventory.appliance_mut(key)?;
        if !matches!(appliance.kind(), ApplianceKind::HairDryer { .. }) {
            appliance.plug_in();
        }
    }

    let total = inventory.total_active_power();
    println!("\nTotal power consumed by plugged-in appliances: {total}W");

    println!("\n--- Sorted by power (ascending) ---");
    for key in inventory.sort_by_power_ascending() {
        println!("{}", inventory.appliance(key)?);
    }

    for (min_level, max_level) in [(0.5, 4.0), (5.0, 10.0), (6.0, 7.0)] {
        println!("\n--- Appliances with EMR level in [{min_level} - {max_level}] ---");
        for key in inventory.find_by_emission_range(min_level, max_level)? {
            println!("{}", inventory.appliance(key)?);
        }
    }

    // an inverted range is rejected before the inventory is consulted
    if let Err(e) = inventory.find_by_emission_range(5.0, 0.1) {
        println!("\nRejected query: {e}");
    }

    println!("\n--- Final state ---");
    println!("{}", serde_json::to_string_pretty(&export_inventory(&inventory))?);

    Ok(())
}
