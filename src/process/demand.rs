// src/process/demand.rs

use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::trace;

use crate::error::SimulationError;
use crate::model::state::SharedState;
use crate::process::traits::Process;
use crate::scenario::Scenario;
use crate::simulation::clock::Tick;

/// Draws one day of customer demand per tick and settles it against stock.
///
/// The draw is `max(0, round(Normal(mean, std)))`; nothing is retried or
/// truncated beyond the zero floor. During a demand-spike window the
/// elevated distribution is sampled instead. The RNG is process-local so
/// a fixed seed reproduces the exact demand sequence regardless of what
/// the replenishment process consumes.
pub struct DemandGenerator {
    scenario: Scenario,
    base: Normal<f64>,
    elevated: Normal<f64>,
    stockout_cost_per_unit: f64,
    rng: ChaCha8Rng,
}

impl DemandGenerator {
    pub fn new(
        mean: f64,
        std_dev: f64,
        scenario: Scenario,
        stockout_cost_per_unit: f64,
        rng: ChaCha8Rng,
    ) -> Result<Self, SimulationError> {
        let base =
            Normal::new(mean, std_dev).map_err(|_| SimulationError::InvalidDemandStd(std_dev))?;
        let elevated = Normal::new(mean * scenario.peak_multiplier(), std_dev)
            .map_err(|_| SimulationError::InvalidDemandStd(std_dev))?;
        Ok(Self {
            scenario,
            base,
            elevated,
            stockout_cost_per_unit,
            rng,
        })
    }

    fn draw(&mut self, now: Tick) -> u64 {
        let dist = if self.scenario.spike_active(now) {
            &self.elevated
        } else {
            &self.base
        };
        let sampled = dist.sample(&mut self.rng);
        sampled.round().max(0.0) as u64
    }
}

impl Process for DemandGenerator {
    fn label(&self) -> &'static str {
        "demand-generator"
    }

    fn resume(&mut self, now: Tick, state: &mut SharedState) -> Tick {
        let units = self.draw(now);
        let shortage = state.fulfill(units, self.stockout_cost_per_unit);
        trace!(
            tick = now,
            demand = units,
            shortage,
            inventory = state.inventory,
            "daily demand settled"
        );
        1
    }
}
