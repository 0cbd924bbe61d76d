//! lc-core: shared foundation for the Lanchester simulator.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - faction (side identifiers shared by the model, scenarios and reports)
//! - error (shared error types)

pub mod error;
pub mod faction;
pub mod numeric;

pub use error::{CoreError, CoreResult};
pub use faction::Faction;
pub use numeric::*;
