//! Asymmetry map: positive half-axes stretched progressively per coordinate
//!
//! Negative coordinates pass through unchanged, positive ones are raised to
//! a power that grows with the coordinate index and the value itself. The
//! origin stays fixed, so the map is intended for problems whose optimum is
//! at the origin.

use ndarray::Array1;

use crate::problem::Problem;
use crate::transform::Transform;

struct AsymmetrizeVariables {
    beta: f64,
    warped: Array1<f64>,
}

impl AsymmetrizeVariables {
    fn apply(&mut self, x: &Array1<f64>) {
        let n = x.len();
        for (i, (&xi, w)) in x.iter().zip(self.warped.iter_mut()).enumerate() {
            if xi > 0.0 {
                let ratio = if n > 1 { i as f64 / (n - 1) as f64 } else { 0.0 };
                *w = xi.powf(1.0 + self.beta * ratio * xi.sqrt());
            } else {
                *w = xi;
            }
        }
    }
}

impl Transform for AsymmetrizeVariables {
    fn evaluate_objective(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_into(&self.warped, y);
    }

    fn evaluate_constraints(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_constraints_into(&self.warped, y);
    }
}

/// Apply the asymmetry map with strength `beta` to the variables of `inner`
pub fn asymmetrize_variables(inner: Problem, beta: f64) -> Problem {
    let dim = inner.number_of_variables();
    Problem::wrap(
        inner,
        AsymmetrizeVariables {
            beta,
            warped: Array1::zeros(dim),
        },
    )
}
