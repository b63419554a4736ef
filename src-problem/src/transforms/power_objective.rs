//! Objective power: raise the returned objective value to a fixed exponent

use ndarray::Array1;

use crate::problem::Problem;
use crate::transform::Transform;

struct PowerObjective {
    exponent: f64,
}

impl Transform for PowerObjective {
    fn evaluate_objective(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        inner.evaluate_into(x, y);
        y[0] = y[0].powf(self.exponent);
    }
}

/// Raise the objective value of the single-objective `inner` to `exponent`
///
/// Meant for non-negative objectives; the stored best value is transformed
/// along with the output.
pub fn power_objective(inner: Problem, exponent: f64) -> Problem {
    assert_eq!(
        inner.number_of_objectives(),
        1,
        "objective power needs a single-objective problem"
    );
    let mut outer = Problem::wrap(inner, PowerObjective { exponent });
    if let Some(best) = outer.best_value.as_mut() {
        best[0] = best[0].powf(exponent);
    }
    outer
}
