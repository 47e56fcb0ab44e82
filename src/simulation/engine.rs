// src/simulation/engine.rs

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::SimulationError;
use crate::model::state::SharedState;
use crate::process::demand::DemandGenerator;
use crate::process::monitor::InventoryMonitor;
use crate::process::replenishment::ReplenishmentProcess;
use crate::process::traits::Process;
use crate::scenario::Scenario;
use crate::simulation::clock::SimulationClock;
use crate::simulation::config::SimulationConfig;

/// Final reduced metrics for one run, as the boundary layer returns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Percentage of demanded units fulfilled from stock, 0 to 100.
    pub service_level: f64,
    /// Holding plus stockout cost accrued over the whole run.
    pub total_cost: f64,
    /// The configured lead time. Realized per-order lead times (including
    /// disruption delays) are not tracked.
    pub avg_lead_time: f64,
    /// Inventory level at every tick, oldest first.
    pub inventory_history: Vec<u64>,
    /// Total unmet demand in units.
    pub stockouts: u64,
}

/// One simulation run: a clock, a state instance and the three domain
/// processes, owned together and discarded at the end.
///
/// Registration order is fixed (demand, monitor, replenishment) and is
/// also the within-tick execution order, so a seeded run is bit-for-bit
/// reproducible. Concurrent runs share nothing.
pub struct SupplyChainSimulation {
    clock: SimulationClock,
    state: SharedState,
    processes: Vec<Box<dyn Process>>,
    scenario: Scenario,
    lead_time: u64,
    seed: u64,
}

impl SupplyChainSimulation {
    /// Validate `config` and assemble a run, with every process scheduled
    /// for tick 0. Fails fast on a bad configuration; no process runs.
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        config.validate()?;

        let scenario = Scenario::parse(&config.scenario_type);
        let seed = config.seed.unwrap_or_else(rand::random);

        // All entropy derives from the master seed; each stochastic
        // process gets its own ChaCha stream so one process's draw count
        // cannot shift another's sequence.
        let mut demand_rng = ChaCha8Rng::seed_from_u64(seed);
        demand_rng.set_stream(0);
        let mut disruption_rng = ChaCha8Rng::seed_from_u64(seed);
        disruption_rng.set_stream(1);

        let demand = DemandGenerator::new(
            config.demand_mean,
            config.demand_std,
            scenario,
            config.stockout_cost_per_unit,
            demand_rng,
        )?;
        let monitor = InventoryMonitor::new(config.holding_cost_per_unit);
        let replenishment = ReplenishmentProcess::new(
            config.reorder_point,
            config.reorder_qty,
            config.lead_time,
            scenario.disruption_probability(),
            scenario.disruption_delay(),
            disruption_rng,
        );

        let processes: Vec<Box<dyn Process>> =
            vec![Box::new(demand), Box::new(monitor), Box::new(replenishment)];

        let mut clock = SimulationClock::new(config.duration);
        for pid in 0..processes.len() {
            clock.schedule(pid, 0);
        }

        Ok(Self {
            clock,
            state: SharedState::new(config.initial_inventory as u64, config.duration),
            processes,
            scenario,
            lead_time: config.lead_time,
            seed,
        })
    }

    /// Drive the clock to the horizon and reduce the final state.
    pub fn run(mut self) -> Result<SimulationResult, SimulationError> {
        info!(
            scenario = %self.scenario,
            duration = self.clock.horizon(),
            seed = self.seed,
            "starting simulation run"
        );

        while let Some((tick, pid)) = self.clock.next_due() {
            let delay = self.processes[pid].resume(tick, &mut self.state);
            self.clock.schedule(pid, delay);
            self.state.check_conservation(tick)?;
        }

        self.reduce()
    }

    fn reduce(self) -> Result<SimulationResult, SimulationError> {
        let duration = self.clock.horizon();
        let state = self.state;

        if state.inventory_history.len() as u64 != duration {
            return Err(SimulationError::invariant(
                duration,
                format!(
                    "inventory history has {} entries for a {}-tick run",
                    state.inventory_history.len(),
                    duration
                ),
            ));
        }

        let service_level = if state.total_demand > 0 {
            state.fulfilled_demand as f64 / state.total_demand as f64 * 100.0
        } else {
            100.0
        };

        let result = SimulationResult {
            service_level: round2(service_level),
            total_cost: round2(state.cumulative_cost),
            avg_lead_time: self.lead_time as f64,
            inventory_history: state.inventory_history,
            stockouts: state.stockout_units,
        };

        info!(
            service_level = result.service_level,
            total_cost = result.total_cost,
            stockouts = result.stockouts,
            "simulation run complete"
        );
        Ok(result)
    }
}

/// Validate, run and reduce in one call.
pub fn run(config: SimulationConfig) -> Result<SimulationResult, SimulationError> {
    SupplyChainSimulation::new(config)?.run()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_never_starts_a_run() {
        let config = SimulationConfig {
            duration: 0,
            ..Default::default()
        };
        assert_eq!(
            SupplyChainSimulation::new(config).err(),
            Some(SimulationError::NonPositiveDuration)
        );
    }

    #[test]
    fn unknown_scenario_runs_as_baseline() {
        let config = SimulationConfig {
            scenario_type: "Port Congestion (Rotterdam)".to_string(),
            duration: 5,
            demand_std: 0.0,
            seed: Some(1),
            ..Default::default()
        };
        let result = run(config).unwrap();
        assert_eq!(result.inventory_history, vec![90, 80, 70, 60, 50]);
    }

    #[test]
    fn rounding_is_two_decimals() {
        assert_eq!(round2(99.994999), 99.99);
        assert_eq!(round2(42.126), 42.13);
        assert_eq!(round2(0.0), 0.0);
    }
}
