//! Error types for the lc-app service layer.

use std::path::PathBuf;

use crate::form::FormErrors;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(#[from] lc_project::ScenarioError),

    #[error("Scenario validation failed: {0}")]
    Validation(#[from] lc_project::ValidationError),

    #[error("Simulation error: {0}")]
    Simulation(#[from] lc_sim::SimError),

    #[error("Invalid input: {0}")]
    Form(#[from] FormErrors),

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
