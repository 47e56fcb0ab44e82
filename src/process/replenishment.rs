// src/process/replenishment.rs

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::model::state::SharedState;
use crate::process::traits::Process;
use crate::simulation::clock::Tick;

/// Where the replenishment loop is between two resumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OrderPhase {
    /// No order outstanding; re-check the reorder point every tick.
    Idle,
    /// An order is in transit; next wake is the expected delivery tick.
    InTransit,
    /// The disruption check fired; next wake is the delayed delivery.
    Delayed,
}

/// Watches the reorder point and keeps at most one order in flight.
///
/// While idle it re-checks stock every tick. Dropping below the reorder
/// point places an order that arrives after `lead_time` ticks. Under a
/// supplier-failure scenario, the disruption is discovered at the expected
/// delivery tick and pushes the delivery out further; the check runs at
/// most once per order cycle. A second order is never placed while one is
/// in transit, an intentional simplification of this policy.
pub struct ReplenishmentProcess {
    reorder_point: u64,
    reorder_qty: u64,
    lead_time: Tick,
    disruption_probability: f64,
    disruption_delay: Tick,
    phase: OrderPhase,
    rng: ChaCha8Rng,
}

impl ReplenishmentProcess {
    pub fn new(
        reorder_point: u64,
        reorder_qty: u64,
        lead_time: Tick,
        disruption_probability: f64,
        disruption_delay: Tick,
        rng: ChaCha8Rng,
    ) -> Self {
        Self {
            reorder_point,
            reorder_qty,
            lead_time,
            disruption_probability,
            disruption_delay,
            phase: OrderPhase::Idle,
            rng,
        }
    }

    /// Reorder check shared by the idle tick and the instant right after a
    /// delivery (the loop re-checks without yielding once goods land).
    fn check_reorder(&mut self, now: Tick, state: &SharedState) -> Tick {
        if state.inventory < self.reorder_point {
            debug!(
                tick = now,
                inventory = state.inventory,
                reorder_point = self.reorder_point,
                qty = self.reorder_qty,
                "placing replenishment order"
            );
            self.phase = OrderPhase::InTransit;
            self.lead_time
        } else {
            self.phase = OrderPhase::Idle;
            1
        }
    }

    fn deliver(&mut self, now: Tick, state: &mut SharedState) -> Tick {
        state.receive_shipment(self.reorder_qty);
        debug!(
            tick = now,
            qty = self.reorder_qty,
            inventory = state.inventory,
            "replenishment order delivered"
        );
        self.check_reorder(now, state)
    }
}

impl Process for ReplenishmentProcess {
    fn label(&self) -> &'static str {
        "replenishment"
    }

    fn resume(&mut self, now: Tick, state: &mut SharedState) -> Tick {
        match self.phase {
            OrderPhase::Idle => self.check_reorder(now, state),
            OrderPhase::InTransit => {
                if self.disruption_probability > 0.0
                    && self.rng.gen_bool(self.disruption_probability)
                {
                    debug!(
                        tick = now,
                        delay = self.disruption_delay,
                        "supplier disruption discovered at delivery time"
                    );
                    self.phase = OrderPhase::Delayed;
                    self.disruption_delay
                } else {
                    self.deliver(now, state)
                }
            }
            OrderPhase::Delayed => self.deliver(now, state),
        }
    }
}
