//! Variable shift: evaluate the inner problem at `x - offset`

use ndarray::{Array1, Zip};

use crate::problem::Problem;
use crate::transform::Transform;

struct ShiftVariables {
    offset: Array1<f64>,
    shifted: Array1<f64>,
}

impl ShiftVariables {
    fn apply(&mut self, x: &Array1<f64>) {
        Zip::from(&mut self.shifted)
            .and(x)
            .and(&self.offset)
            .for_each(|s, &xi, &oi| *s = xi - oi);
    }
}

impl Transform for ShiftVariables {
    fn evaluate_objective(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_into(&self.shifted, y);
    }

    fn evaluate_constraints(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_constraints_into(&self.shifted, y);
    }
}

/// Shift the variables of `inner` by `offset`
///
/// The optimum moves by `offset`; the stored best parameter and initial
/// solution move with it. Bounds move only when `shift_bounds` is set.
pub fn shift_variables(inner: Problem, offset: Array1<f64>, shift_bounds: bool) -> Problem {
    assert_eq!(
        offset.len(),
        inner.number_of_variables(),
        "wrong offset dimension"
    );
    let dim = offset.len();
    let best = inner.best_parameter.as_ref().map(|b| b + &offset);
    let x0 = inner.initial_solution.as_ref().map(|s| s + &offset);
    let lower = inner.lower_bounds.as_ref().map(|b| b + &offset);
    let upper = inner.upper_bounds.as_ref().map(|b| b + &offset);

    let transform = ShiftVariables {
        offset,
        shifted: Array1::zeros(dim),
    };
    let mut outer = Problem::wrap(inner, transform);
    outer.best_parameter = best;
    outer.initial_solution = x0;
    if shift_bounds {
        outer.lower_bounds = lower;
        outer.upper_bounds = upper;
    }
    outer
}
