//! Nonlinear coordinate oscillation
//!
//! The classic irregularity map: a sign-preserving, origin-fixing warp that
//! locally stretches and compresses each coordinate. Intended for problems
//! whose optimum is at the origin, which the map keeps in place.

use ndarray::{Array1, Zip};

use crate::problem::Problem;
use crate::transform::Transform;

fn oscillate(v: f64) -> f64 {
    if v == 0.0 {
        return 0.0;
    }
    let xx = v.abs().ln();
    let (c1, c2) = if v > 0.0 { (10.0, 7.9) } else { (5.5, 3.1) };
    v.signum() * (xx + 0.049 * ((c1 * xx).sin() + (c2 * xx).sin())).exp()
}

struct OscillateVariables {
    warped: Array1<f64>,
}

impl OscillateVariables {
    fn apply(&mut self, x: &Array1<f64>) {
        Zip::from(&mut self.warped)
            .and(x)
            .for_each(|w, &xi| *w = oscillate(xi));
    }
}

impl Transform for OscillateVariables {
    fn evaluate_objective(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_into(&self.warped, y);
    }

    fn evaluate_constraints(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_constraints_into(&self.warped, y);
    }
}

/// Apply the oscillation map to the variables of `inner`
pub fn oscillate_variables(inner: Problem) -> Problem {
    let dim = inner.number_of_variables();
    Problem::wrap(
        inner,
        OscillateVariables {
            warped: Array1::zeros(dim),
        },
    )
}
