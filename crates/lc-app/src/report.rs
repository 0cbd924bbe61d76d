//! Text rendering of run results.

use std::fmt::Write;

use lc_core::Faction;
use lc_project::Scenario;
use lc_sim::{Depleted, RunOutcome, SimulationResult};

use crate::run_service::RunReport;

/// One completed integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepEntry {
    pub step: usize,
    pub time: f64,
    pub a: f64,
    pub b: f64,
}

/// Rows for every completed step; the initial state is not a step.
pub fn table_rows(result: &SimulationResult) -> Vec<StepEntry> {
    result
        .iter()
        .enumerate()
        .skip(1)
        .map(|(step, s)| StepEntry {
            step,
            time: s.t,
            a: s.a,
            b: s.b,
        })
        .collect()
}

/// Per-step log, one block per completed step.
///
/// ```text
/// Step 1:
///     Time: 0.80 min
///     Tanks: 99.20
///     Infantry: 99.20
/// ```
pub fn step_log(result: &SimulationResult, labels: [&str; 2], time_unit: &str) -> String {
    let mut out = String::new();
    for row in table_rows(result) {
        let _ = writeln!(out, "Step {}:", row.step);
        let _ = writeln!(out, "    Time: {:.2} {}", row.time, time_unit);
        let _ = writeln!(out, "    {}: {:.2}", labels[0], row.a);
        let _ = writeln!(out, "    {}: {:.2}", labels[1], row.b);
        out.push('\n');
    }
    out
}

/// One-line description of how the run ended.
pub fn outcome_text(scenario: &Scenario, outcome: RunOutcome) -> String {
    match outcome {
        RunOutcome::Completed => "completed all steps".to_string(),
        RunOutcome::CutOff { step, depleted } => {
            let sides = match depleted {
                Depleted::Both => format!(
                    "{} and {}",
                    scenario.label(Faction::A),
                    scenario.label(Faction::B)
                ),
                Depleted::A => scenario.label(Faction::A).to_string(),
                Depleted::B => scenario.label(Faction::B).to_string(),
            };
            format!(
                "cut off after step {step}: {sides} at or below {:.0}% of initial strength",
                scenario.cutoff.fraction * 100.0
            )
        }
    }
}

/// Multi-line summary for terminal output.
pub fn summary_text(report: &RunReport) -> String {
    let scenario = &report.scenario;
    let s = &report.summary;
    let unit = &scenario.display.time_unit;

    let mut out = String::new();
    let _ = writeln!(out, "Scenario: {}", scenario.name);
    let _ = writeln!(out, "  Outcome: {}", outcome_text(scenario, s.outcome));
    let _ = writeln!(
        out,
        "  Samples: {} (h = {:.4} {unit})",
        s.sample_count, s.step_size
    );
    let _ = writeln!(out, "  Final time: {:.2} {unit}", s.final_time);
    for side in Faction::ALL {
        let _ = writeln!(
            out,
            "  {}: {:.2} remaining, {:.2} lost",
            scenario.label(side),
            s.final_strength(side),
            s.losses(side)
        );
    }
    out
}
