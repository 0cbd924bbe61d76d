//! Run execution service.

use std::path::Path;
use std::time::Instant;

use lc_core::Faction;
use lc_project::{Scenario, presets, validate_scenario};
use lc_sim::{RunOutcome, SimulationResult, run_simulation};

use crate::error::{AppError, AppResult};

/// Concise summary of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub sample_count: usize,
    pub steps_taken: usize,
    pub step_size: f64,
    pub final_time: f64,
    pub final_a: f64,
    pub final_b: f64,
    pub losses_a: f64,
    pub losses_b: f64,
    pub outcome: RunOutcome,
    pub wall_time_s: f64,
}

impl RunSummary {
    pub fn final_strength(&self, side: Faction) -> f64 {
        match side {
            Faction::A => self.final_a,
            Faction::B => self.final_b,
        }
    }

    pub fn losses(&self, side: Faction) -> f64 {
        match side {
            Faction::A => self.losses_a,
            Faction::B => self.losses_b,
        }
    }
}

/// Everything a frontend needs to render one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub scenario: Scenario,
    pub result: SimulationResult,
    pub summary: RunSummary,
}

/// Validate and run a scenario.
pub fn run_scenario(scenario: &Scenario) -> AppResult<RunReport> {
    validate_scenario(scenario)?;

    let start = Instant::now();
    let result = run_simulation(&scenario.to_config())?;
    let wall_time_s = start.elapsed().as_secs_f64();

    let summary = summarize(scenario, &result, wall_time_s)?;
    tracing::info!(
        scenario = %scenario.name,
        samples = summary.sample_count,
        outcome = ?summary.outcome,
        wall_time_s,
        "run finished"
    );

    Ok(RunReport {
        scenario: scenario.clone(),
        result,
        summary,
    })
}

/// Build a summary from a result.
pub fn summarize(
    scenario: &Scenario,
    result: &SimulationResult,
    wall_time_s: f64,
) -> AppResult<RunSummary> {
    let last = result
        .last()
        .ok_or_else(|| AppError::InvalidInput("No samples in run".to_string()))?;
    let initial = scenario.initial_state();

    Ok(RunSummary {
        sample_count: result.len(),
        steps_taken: result.steps_taken(),
        step_size: result.step_size(),
        final_time: last.t,
        final_a: last.a,
        final_b: last.b,
        losses_a: initial.a - last.a,
        losses_b: initial.b - last.b,
        outcome: result.outcome(),
        wall_time_s,
    })
}

/// Pick the base scenario for a run: a file, a named preset, or the
/// test-conditions preset when neither is given.
pub fn resolve_scenario(path: Option<&Path>, preset: Option<&str>) -> AppResult<Scenario> {
    match (path, preset) {
        (Some(_), Some(_)) => Err(AppError::InvalidInput(
            "give either a scenario file or a preset, not both".to_string(),
        )),
        (Some(path), None) => {
            tracing::debug!(path = %path.display(), "loading scenario");
            Ok(lc_project::load(path)?)
        }
        (None, Some(name)) => {
            presets::by_name(name).ok_or_else(|| AppError::UnknownPreset(name.to_string()))
        }
        (None, None) => Ok(presets::test_conditions()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_test_conditions() {
        let report = run_scenario(&presets::test_conditions()).unwrap();
        let s = &report.summary;
        assert_eq!(s.sample_count, 1001);
        assert_eq!(s.steps_taken, 1000);
        assert_eq!(s.final_time, 800.0);
        assert_eq!(s.final_a, s.final_b);
        assert!((s.losses_a - (100.0 - s.final_a)).abs() < 1e-12);
        assert_eq!(s.outcome, RunOutcome::Completed);
        assert_eq!(s.final_strength(Faction::B), s.final_b);
        assert_eq!(s.losses(Faction::A), s.losses_a);
    }

    #[test]
    fn invalid_scenario_is_rejected_before_running() {
        let mut scenario = presets::test_conditions();
        scenario.integration.steps = 0;
        assert!(matches!(
            run_scenario(&scenario),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn resolve_defaults_to_test_conditions() {
        assert_eq!(
            resolve_scenario(None, None).unwrap(),
            presets::test_conditions()
        );
        assert_eq!(
            resolve_scenario(None, Some("test")).unwrap(),
            presets::test_conditions()
        );
        assert!(matches!(
            resolve_scenario(None, Some("unknown")),
            Err(AppError::UnknownPreset(_))
        ));
        assert!(matches!(
            resolve_scenario(Some(Path::new("x.yaml")), Some("test")),
            Err(AppError::InvalidInput(_))
        ));
    }
}
