// src/scenario.rs

use std::fmt;

use crate::simulation::clock::Tick;

/// First tick (inclusive) of the elevated-demand window.
const SPIKE_WINDOW_START: Tick = 10;
/// Last tick (inclusive) of the elevated-demand window.
const SPIKE_WINDOW_END: Tick = 20;
/// Demand mean multiplier applied inside the spike window.
const SPIKE_MULTIPLIER: f64 = 1.2;
/// Chance that a supplier-failure order is delayed at its expected
/// delivery tick.
const DISRUPTION_PROBABILITY: f64 = 0.3;
/// Extra transit ticks added when the disruption fires.
const DISRUPTION_DELAY: Tick = 2;

/// A named disruption scenario altering demand or supply behaviour for a
/// single run.
///
/// The control-tower frontend offers a fixed scenario list; names outside
/// it fall back to `Baseline`, which injects no modifiers. "Port
/// Congestion (Rotterdam)" is on the list but has no engine-side effect,
/// so it parses to `Baseline` too.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Baseline,
    DemandSpike,
    SupplierFailure,
}

impl Scenario {
    pub fn parse(name: &str) -> Self {
        match name {
            "Demand Spike (+20%)" => Self::DemandSpike,
            "Supplier Failure (Node n1)" => Self::SupplierFailure,
            _ => Self::Baseline,
        }
    }

    /// Demand-mean multiplier in effect at `tick`.
    pub fn demand_multiplier(&self, tick: Tick) -> f64 {
        match self {
            Self::DemandSpike if (SPIKE_WINDOW_START..=SPIKE_WINDOW_END).contains(&tick) => {
                SPIKE_MULTIPLIER
            }
            _ => 1.0,
        }
    }

    /// True while the elevated-demand window is active for this scenario.
    pub fn spike_active(&self, tick: Tick) -> bool {
        self.demand_multiplier(tick) != 1.0
    }

    /// Multiplier applied inside the spike window, independent of tick.
    pub fn peak_multiplier(&self) -> f64 {
        match self {
            Self::DemandSpike => SPIKE_MULTIPLIER,
            _ => 1.0,
        }
    }

    /// Probability that a replenishment order is held up at delivery time.
    pub fn disruption_probability(&self) -> f64 {
        match self {
            Self::SupplierFailure => DISRUPTION_PROBABILITY,
            _ => 0.0,
        }
    }

    /// Transit ticks added when the disruption check fires.
    pub fn disruption_delay(&self) -> Tick {
        DISRUPTION_DELAY
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Baseline => "Baseline",
            Self::DemandSpike => "Demand Spike (+20%)",
            Self::SupplierFailure => "Supplier Failure (Node n1)",
        };
        write!(f, "{}", name)
    }
}
