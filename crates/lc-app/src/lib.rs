//! Shared application service layer for the Lanchester simulator.
//!
//! This crate provides a unified interface for both CLI and GUI frontends:
//! scenario input parsing, simulation execution, step reports and export.

pub mod description;
pub mod error;
pub mod export;
pub mod form;
pub mod report;
pub mod run_service;

// Re-export key types for convenience
pub use description::MODEL_DESCRIPTION;
pub use error::{AppError, AppResult};
pub use export::{ExportFormat, to_csv, to_json};
pub use form::{FieldError, FormErrors, FormField, ScenarioForm, ScenarioOverrides};
pub use report::{StepEntry, outcome_text, step_log, summary_text, table_rows};
pub use run_service::{RunReport, RunSummary, resolve_scenario, run_scenario};
