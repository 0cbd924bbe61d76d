//! Fixed-step simulation of the two-population Lanchester attrition model.
//!
//! Provides:
//! - Lanchester derivative model (aimed-fire square law)
//! - Fixed-step RK4 integrator over a pluggable `TransientModel`
//! - Simulation runner with an early-termination cutoff policy

pub mod error;
pub mod integrator;
pub mod lanchester;
pub mod model;
pub mod sim;

pub use error::{SimError, SimResult};
pub use integrator::{Integrator, RK4};
pub use lanchester::{Coefficients, ForceState, LanchesterModel, derivative};
pub use model::TransientModel;
pub use sim::{
    CUTOFF_FRACTION, CutoffPolicy, DEFAULT_END_TIME, Depleted, RunOutcome, Sample,
    SimulationConfig, SimulationResult, run_simulation,
};
