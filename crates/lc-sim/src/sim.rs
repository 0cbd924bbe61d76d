//! Simulation runner and result recording.

use lc_core::{Faction, ensure_fraction, ensure_positive};

use crate::error::{SimError, SimResult};
use crate::integrator::{Integrator, RK4};
use crate::lanchester::{Coefficients, ForceState, LanchesterModel};
use crate::model::TransientModel;

/// Nominal length of an engagement in model time units.
pub const DEFAULT_END_TIME: f64 = 800.0;

/// Fraction of the starting strength at which the cutoff policy stops a run.
pub const CUTOFF_FRACTION: f64 = 0.30;

/// Upper bound on up-front sample allocation; longer runs grow on demand.
const MAX_PREALLOC: usize = 1 << 20;

/// Early-termination rule.
///
/// When enabled, a run stops right after the first sample in which either
/// side is at or below `fraction` of its own starting strength.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CutoffPolicy {
    pub enabled: bool,
    pub fraction: f64,
}

impl Default for CutoffPolicy {
    fn default() -> Self {
        Self {
            enabled: false,
            fraction: CUTOFF_FRACTION,
        }
    }
}

impl CutoffPolicy {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Self::default()
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// Which sides, if any, have crossed the threshold.
    pub fn check(&self, initial: &ForceState, current: &ForceState) -> Option<Depleted> {
        if !self.enabled {
            return None;
        }
        let a = current.a <= self.fraction * initial.a;
        let b = current.b <= self.fraction * initial.b;
        match (a, b) {
            (true, true) => Some(Depleted::Both),
            (true, false) => Some(Depleted::A),
            (false, true) => Some(Depleted::B),
            (false, false) => None,
        }
    }
}

/// Sides that crossed the cutoff threshold on the final step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Depleted {
    A,
    B,
    Both,
}

impl Depleted {
    pub fn includes(self, side: Faction) -> bool {
        matches!(
            (self, side),
            (Depleted::Both, _) | (Depleted::A, Faction::A) | (Depleted::B, Faction::B)
        )
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum RunOutcome {
    /// All configured steps were integrated.
    Completed,
    /// The cutoff policy stopped the run after `step` steps.
    CutOff { step: usize, depleted: Depleted },
}

/// Inputs for one run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub initial: ForceState,
    pub coefficients: Coefficients,
    /// Number of integration steps (must be positive)
    pub step_count: usize,
    /// End of the time grid, starting from t = 0
    pub end_time: f64,
    pub cutoff: CutoffPolicy,
}

impl SimulationConfig {
    /// Config with the default end time and the cutoff disabled.
    pub fn new(initial: ForceState, coefficients: Coefficients, step_count: usize) -> Self {
        Self {
            initial,
            coefficients,
            step_count,
            end_time: DEFAULT_END_TIME,
            cutoff: CutoffPolicy::default(),
        }
    }

    pub fn with_end_time(mut self, end_time: f64) -> Self {
        self.end_time = end_time;
        self
    }

    pub fn with_cutoff(mut self, cutoff: CutoffPolicy) -> Self {
        self.cutoff = cutoff;
        self
    }

    /// Check the grid parameters and return the step size.
    ///
    /// Populations and coefficients are not checked.
    pub fn validate(&self) -> SimResult<f64> {
        if self.step_count == 0 {
            return Err(SimError::InvalidConfig {
                what: "step_count must be positive",
            });
        }
        ensure_positive(self.end_time, "end_time")?;
        let h = ensure_positive(self.end_time / self.step_count as f64, "step size")?;
        if self.cutoff.enabled {
            ensure_fraction(self.cutoff.fraction, "cutoff fraction")?;
        }
        Ok(h)
    }

    /// Time of grid point `i`; the last point is exactly `end_time`.
    fn grid_time(&self, i: usize, h: f64) -> f64 {
        if i == self.step_count {
            self.end_time
        } else {
            i as f64 * h
        }
    }
}

/// One output record.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    pub t: f64,
    pub a: f64,
    pub b: f64,
}

impl Sample {
    fn new(t: f64, state: &ForceState) -> Self {
        Self {
            t,
            a: state.a,
            b: state.b,
        }
    }

    pub fn state(&self) -> ForceState {
        ForceState::new(self.a, self.b)
    }

    pub fn get(&self, side: Faction) -> f64 {
        self.state().get(side)
    }
}

/// Samples of a completed run, starting with the initial state at t = 0.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationResult {
    step_size: f64,
    outcome: RunOutcome,
    samples: Vec<Sample>,
}

impl SimulationResult {
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<Sample> {
        self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    pub fn outcome(&self) -> RunOutcome {
        self.outcome
    }

    pub fn was_cut_off(&self) -> bool {
        matches!(self.outcome, RunOutcome::CutOff { .. })
    }

    /// Number of integration steps performed.
    pub fn steps_taken(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    pub fn times(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.t).collect()
    }

    /// Strength of one side at every sample.
    pub fn series(&self, side: Faction) -> Vec<f64> {
        self.samples.iter().map(|s| s.get(side)).collect()
    }
}

impl<'a> IntoIterator for &'a SimulationResult {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Run the attrition model over the configured grid using fixed-step RK4.
pub fn run_simulation(config: &SimulationConfig) -> SimResult<SimulationResult> {
    let h = config.validate()?;

    tracing::debug!(
        step_count = config.step_count,
        end_time = config.end_time,
        step_size = h,
        cutoff = config.cutoff.enabled,
        "starting attrition run"
    );

    let model = LanchesterModel::new(config.coefficients, config.initial);
    let integrator = RK4;

    let mut x = model.initial_state();
    let mut samples = Vec::with_capacity(config.step_count.saturating_add(1).min(MAX_PREALLOC));
    samples.push(Sample::new(0.0, &x));

    let mut outcome = RunOutcome::Completed;
    for i in 0..config.step_count {
        x = integrator.step(&model, config.grid_time(i, h), &x, h);
        samples.push(Sample::new(config.grid_time(i + 1, h), &x));

        if let Some(depleted) = config.cutoff.check(&config.initial, &x) {
            let step = i + 1;
            tracing::debug!(step, ?depleted, a = x.a, b = x.b, "cutoff reached");
            outcome = RunOutcome::CutOff { step, depleted };
            break;
        }
    }

    Ok(SimulationResult {
        step_size: h,
        outcome,
        samples,
    })
}
