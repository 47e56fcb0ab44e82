// src/process/traits.rs

use crate::model::state::SharedState;
use crate::simulation::clock::Tick;

/// An independently schedulable unit of simulation logic.
///
/// A process is an infinite loop unrolled into resumptions: each `resume`
/// call runs the logic between two suspension points and returns how many
/// ticks to sleep before the next one (0 means run again at the current
/// tick). The clock is the only thing that calls `resume`, one process at
/// a time, so everything a resumption does to `SharedState` is atomic as
/// far as the other processes can observe.
///
/// Processes never coordinate with each other directly and never
/// terminate; the run ends when the clock reaches its horizon, whatever
/// state each process is suspended in.
pub trait Process {
    /// Stable name used in log events.
    fn label(&self) -> &'static str;

    /// Run until the next suspension point; return the suspend delay.
    fn resume(&mut self, now: Tick, state: &mut SharedState) -> Tick;
}
