//! Objective shift: add a constant to the returned objective value

use ndarray::Array1;

use crate::problem::Problem;
use crate::transform::Transform;

struct ShiftObjective {
    offset: f64,
}

impl Transform for ShiftObjective {
    fn evaluate_objective(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        inner.evaluate_into(x, y);
        y[0] += self.offset;
    }
}

/// Add `offset` to the objective value of the single-objective `inner`
pub fn shift_objective(inner: Problem, offset: f64) -> Problem {
    assert_eq!(
        inner.number_of_objectives(),
        1,
        "objective shift needs a single-objective problem"
    );
    let mut outer = Problem::wrap(inner, ShiftObjective { offset });
    if let Some(best) = outer.best_value.as_mut() {
        best[0] += offset;
    }
    outer
}
