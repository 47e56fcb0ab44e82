// src/process/monitor.rs

use crate::model::state::SharedState;
use crate::process::traits::Process;
use crate::simulation::clock::Tick;

/// Records the inventory level once per tick and charges holding cost.
///
/// Pure observer: it never mutates inventory, so the history entry for a
/// tick is whatever stock the demand settlement left behind (the monitor
/// is registered after the demand generator and therefore runs second on
/// every tick).
pub struct InventoryMonitor {
    holding_cost_per_unit: f64,
}

impl InventoryMonitor {
    pub fn new(holding_cost_per_unit: f64) -> Self {
        Self {
            holding_cost_per_unit,
        }
    }
}

impl Process for InventoryMonitor {
    fn label(&self) -> &'static str {
        "inventory-monitor"
    }

    fn resume(&mut self, _now: Tick, state: &mut SharedState) -> Tick {
        state.observe_inventory(self.holding_cost_per_unit);
        1
    }
}
