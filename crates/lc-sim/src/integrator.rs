//! Fixed-step time integrators.

use crate::model::TransientModel;

/// Trait for time integrators.
pub trait Integrator {
    /// Advance state by one time step using the transient model.
    fn step<M: TransientModel>(&self, model: &M, t: f64, x: &M::State, dt: f64) -> M::State;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug, Default)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<M: TransientModel>(&self, model: &M, t: f64, x: &M::State, dt: f64) -> M::State {
        let k1 = model.scale(&model.rhs(t, x), dt);

        let x2 = model.add(x, &model.scale(&k1, 0.5));
        let k2 = model.scale(&model.rhs(t + 0.5 * dt, &x2), dt);

        let x3 = model.add(x, &model.scale(&k2, 0.5));
        let k3 = model.scale(&model.rhs(t + 0.5 * dt, &x3), dt);

        let x4 = model.add(x, &k3);
        let k4 = model.scale(&model.rhs(t + dt, &x4), dt);

        // x_new = x + (k1 + 2*k2 + 2*k3 + k4) / 6
        let k_sum = model.add(
            &model.add(&k1, &model.scale(&k2, 2.0)),
            &model.add(&model.scale(&k3, 2.0), &k4),
        );

        model.add(x, &model.scale(&k_sum, 1.0 / 6.0))
    }
}
