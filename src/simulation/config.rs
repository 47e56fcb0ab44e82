// src/simulation/config.rs

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Immutable parameters for one simulation run.
///
/// The boundary layer deserializes a request straight into this struct;
/// every field is optional on the wire and falls back to the values below.
/// `seed` is not part of the request schema: callers that need
/// reproducible runs (tests, regression comparisons) set it explicitly,
/// otherwise each run draws fresh entropy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Scenario name as the frontend sends it. Unknown names run neutral.
    pub scenario_type: String,
    /// Run horizon in ticks (simulated days).
    pub duration: u64,
    /// Mean of the daily demand distribution.
    pub demand_mean: f64,
    /// Std-dev of the daily demand distribution. Zero is valid and yields
    /// the mean exactly.
    pub demand_std: f64,
    /// Stock on hand at tick 0. Signed to mirror the wire type so a
    /// negative request is rejected by validation, not by deserialization.
    pub initial_inventory: i64,
    /// Cost accrued per unit held, per tick.
    pub holding_cost_per_unit: f64,
    /// Cost accrued per unit of unmet demand.
    pub stockout_cost_per_unit: f64,
    /// Inventory level below which a replenishment order is placed.
    pub reorder_point: u64,
    /// Units delivered per replenishment order.
    pub reorder_qty: u64,
    /// Ticks between placing and receiving an order.
    pub lead_time: u64,
    /// Master RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            scenario_type: "Baseline".to_string(),
            duration: 30,
            demand_mean: 10.0,
            demand_std: 2.0,
            initial_inventory: 100,
            holding_cost_per_unit: 0.5,
            stockout_cost_per_unit: 5.0,
            reorder_point: 50,
            reorder_qty: 100,
            lead_time: 3,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Reject configurations the engine cannot run.
    ///
    /// Checked before any process is constructed, so a bad request never
    /// starts a run. Stochastic edge cases (zero demand, zero lead time)
    /// are valid inputs and pass.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.duration == 0 {
            return Err(SimulationError::NonPositiveDuration);
        }
        if self.initial_inventory < 0 {
            return Err(SimulationError::NegativeInitialInventory(
                self.initial_inventory,
            ));
        }
        // Written as a negated >= so NaN fails too.
        if !(self.demand_std >= 0.0) {
            return Err(SimulationError::InvalidDemandStd(self.demand_std));
        }
        if self.reorder_qty == 0 {
            return Err(SimulationError::ZeroReorderQty);
        }
        Ok(())
    }
}
