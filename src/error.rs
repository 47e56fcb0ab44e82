// src/error.rs

use thiserror::Error;

/// Errors surfaced by a simulation run.
///
/// Configuration variants are reported before any process executes; the
/// boundary layer maps them to a rejected request. `InvariantViolation`
/// means a core bookkeeping rule broke mid-run and the run was aborted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    /// The run horizon must cover at least one tick.
    #[error("duration must be positive")]
    NonPositiveDuration,

    /// Starting stock cannot be negative.
    #[error("initial inventory must be non-negative, got {0}")]
    NegativeInitialInventory(i64),

    /// A normal distribution needs a non-negative standard deviation.
    #[error("demand std-dev must be non-negative, got {0}")]
    InvalidDemandStd(f64),

    /// A zero reorder quantity would leave an order cycle unable to ever
    /// lift inventory back above the reorder point.
    #[error("reorder quantity must be positive")]
    ZeroReorderQty,

    /// A core invariant was observed broken. Not recoverable.
    #[error("invariant violation at tick {tick}: {detail}")]
    InvariantViolation { tick: u64, detail: String },
}

impl SimulationError {
    pub(crate) fn invariant(tick: u64, detail: impl Into<String>) -> Self {
        Self::InvariantViolation {
            tick,
            detail: detail.into(),
        }
    }

    /// True for errors that reject the configuration before the run starts.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Self::InvariantViolation { .. })
    }
}
