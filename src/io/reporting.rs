// src/io/reporting.rs

use std::error::Error;
use std::path::Path;

use serde::Serialize;

use crate::simulation::engine::SimulationResult;

/// One row of the exported inventory trace.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryRecord {
    pub tick: u64,
    pub inventory: u64,
}

/// Writes a run's inventory history to a CSV file, one row per tick.
///
/// # Arguments
/// * `file_path` - The path to save the file (e.g., "results/run_1.csv").
/// * `result` - The reduced result from the simulation driver.
pub fn write_inventory_log(file_path: &str, result: &SimulationResult) -> Result<(), Box<dyn Error>> {
    let path = Path::new(file_path);
    let mut wtr = csv::Writer::from_path(path)?;

    for (tick, &inventory) in result.inventory_history.iter().enumerate() {
        wtr.serialize(InventoryRecord {
            tick: tick as u64,
            inventory,
        })?;
    }

    // Flush the buffer to ensure all data is written
    wtr.flush()?;

    println!(
        "Successfully exported {} rows to '{}'",
        result.inventory_history.len(),
        file_path
    );
    Ok(())
}
