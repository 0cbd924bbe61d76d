//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while setting up a simulation run.
///
/// Integration itself never fails: non-finite values propagate into the
/// output instead of being reported here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid configuration: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Invalid configuration: {0}")]
    InvalidValue(#[from] lc_core::CoreError),
}

pub type SimResult<T> = Result<T, SimError>;
