//! Lanchester aimed-fire attrition model.
//!
//! Each side's effective force is its population times a per-unit firepower
//! factor; each side loses strength in proportion to the opposing force:
//!
//! ```text
//! F_a = k_a * N_a          F_b = k_b * N_b
//! dN_a/dt = -alpha * F_b   dN_b/dt = -beta * F_a
//! ```

use lc_core::Faction;

use crate::model::TransientModel;

/// Current strengths of both populations.
///
/// Values are never clamped; negative strengths are valid model output.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForceState {
    pub a: f64,
    pub b: f64,
}

impl ForceState {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Strength of one side.
    pub fn get(&self, side: Faction) -> f64 {
        match side {
            Faction::A => self.a,
            Faction::B => self.b,
        }
    }
}

/// Model coefficients, fixed for one run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coefficients {
    /// Attrition rate of side A per unit of B's effective force (alpha).
    pub attrition_a: f64,
    /// Attrition rate of side B per unit of A's effective force (beta).
    pub attrition_b: f64,
    /// Per-unit firepower of side A (k_t).
    pub firepower_a: f64,
    /// Per-unit firepower of side B (k_i).
    pub firepower_b: f64,
}

impl Coefficients {
    pub fn new(attrition_a: f64, attrition_b: f64, firepower_a: f64, firepower_b: f64) -> Self {
        Self {
            attrition_a,
            attrition_b,
            firepower_a,
            firepower_b,
        }
    }

    /// Effective force of each side for the given strengths.
    pub fn effective_force(&self, state: &ForceState) -> ForceState {
        ForceState {
            a: self.firepower_a * state.a,
            b: self.firepower_b * state.b,
        }
    }
}

/// Rate of change of both strengths. Time-independent.
pub fn derivative(state: &ForceState, coefficients: &Coefficients) -> ForceState {
    let force = coefficients.effective_force(state);
    ForceState {
        a: -coefficients.attrition_a * force.b,
        b: -coefficients.attrition_b * force.a,
    }
}

/// The attrition model bound to its coefficients and starting strengths.
#[derive(Clone, Debug)]
pub struct LanchesterModel {
    pub coefficients: Coefficients,
    pub initial: ForceState,
}

impl LanchesterModel {
    pub fn new(coefficients: Coefficients, initial: ForceState) -> Self {
        Self {
            coefficients,
            initial,
        }
    }
}

impl TransientModel for LanchesterModel {
    type State = ForceState;

    fn initial_state(&self) -> Self::State {
        self.initial
    }

    fn rhs(&self, _t: f64, x: &Self::State) -> Self::State {
        derivative(x, &self.coefficients)
    }

    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State {
        ForceState {
            a: a.a + b.a,
            b: a.b + b.b,
        }
    }

    fn scale(&self, a: &Self::State, scale: f64) -> Self::State {
        ForceState {
            a: a.a * scale,
            b: a.b * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivative_matches_hand_computation() {
        let coeffs = Coefficients::new(0.02, 0.05, 2.0, 3.0);
        let rate = derivative(&ForceState::new(100.0, 40.0), &coeffs);
        // F_a = 200, F_b = 120
        assert!((rate.a - (-0.02 * 120.0)).abs() < 1e-12);
        assert!((rate.b - (-0.05 * 200.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_attrition_freezes_that_side() {
        let coeffs = Coefficients::new(0.0, 0.01, 1.0, 1.0);
        let rate = derivative(&ForceState::new(100.0, 100.0), &coeffs);
        assert_eq!(rate.a, 0.0);
        assert!(rate.b < 0.0);
    }

    #[test]
    fn negative_strengths_are_accepted() {
        let coeffs = Coefficients::new(0.01, 0.01, 1.0, 1.0);
        let rate = derivative(&ForceState::new(-10.0, 5.0), &coeffs);
        assert!(rate.b > 0.0, "negative opposing force drives growth");
        assert!(rate.a < 0.0);
    }

    #[test]
    fn rhs_ignores_time() {
        let model = LanchesterModel::new(
            Coefficients::new(0.01, 0.03, 1.5, 0.5),
            ForceState::new(80.0, 120.0),
        );
        let x = model.initial_state();
        assert_eq!(model.rhs(0.0, &x), model.rhs(1234.5, &x));
    }

    #[test]
    fn state_arithmetic_is_component_wise() {
        let model = LanchesterModel::new(
            Coefficients::new(0.0, 0.0, 0.0, 0.0),
            ForceState::new(0.0, 0.0),
        );
        let sum = model.add(&ForceState::new(1.0, 2.0), &ForceState::new(10.0, 20.0));
        assert_eq!(sum, ForceState::new(11.0, 22.0));
        assert_eq!(model.scale(&sum, 0.5), ForceState::new(5.5, 11.0));
    }

    #[test]
    fn get_selects_side() {
        let s = ForceState::new(3.0, 7.0);
        assert_eq!(s.get(Faction::A), 3.0);
        assert_eq!(s.get(Faction::B), 7.0);
    }
}
