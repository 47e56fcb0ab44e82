//! Stochastic digital-twin simulator for a single-echelon supply chain.
//!
//! The engine models daily demand, inventory depletion and periodic
//! replenishment under configurable disruption scenarios, and reduces a
//! run into service-level and cost metrics.
//!
//! Three cooperating processes (demand generator, inventory monitor,
//! replenishment) share one mutable state instance and are resumed by a
//! central clock from a wake-time priority queue. Scheduling is
//! single-threaded and cooperative: exactly one process executes at a
//! time, and processes due at the same tick run in registration order, so
//! a run with a fixed seed is bit-for-bit reproducible.
//!
//! ```no_run
//! use chain_twin::{SimulationConfig, SupplyChainSimulation};
//!
//! let config = SimulationConfig {
//!     scenario_type: "Demand Spike (+20%)".to_string(),
//!     duration: 30,
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let result = SupplyChainSimulation::new(config)?.run()?;
//! println!("service level: {:.2}%", result.service_level);
//! # Ok::<(), chain_twin::SimulationError>(())
//! ```

pub mod error;
pub mod io;
pub mod model;
pub mod process;
pub mod scenario;
pub mod simulation;

pub use error::SimulationError;
pub use scenario::Scenario;
pub use simulation::clock::{ProcessId, SimulationClock, Tick};
pub use simulation::config::SimulationConfig;
pub use simulation::engine::{run, SimulationResult, SupplyChainSimulation};
