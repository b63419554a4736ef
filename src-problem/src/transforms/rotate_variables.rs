//! Variable rotation: evaluate the inner problem at `R * x`

use ndarray::linalg::general_mat_vec_mul;
use ndarray::{Array1, Array2};

use crate::problem::Problem;
use crate::transform::Transform;

struct RotateVariables {
    matrix: Array2<f64>,
    rotated: Array1<f64>,
}

impl RotateVariables {
    fn apply(&mut self, x: &Array1<f64>) {
        general_mat_vec_mul(1.0, &self.matrix, x, 0.0, &mut self.rotated);
    }
}

impl Transform for RotateVariables {
    fn evaluate_objective(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_into(&self.rotated, y);
    }

    fn evaluate_constraints(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_constraints_into(&self.rotated, y);
    }
}

/// Rotate the variables of `inner` by the orthogonal matrix `matrix`
///
/// The optimum moves to `Rᵀ·best`, which is where the stored best parameter
/// goes. The caller is responsible for passing an orthogonal matrix; suite
/// constructors build one by Gram-Schmidt from a seeded generator.
pub fn rotate_variables(inner: Problem, matrix: Array2<f64>) -> Problem {
    let dim = inner.number_of_variables();
    assert_eq!(matrix.shape(), [dim, dim], "wrong rotation shape");
    let best = inner.best_parameter.as_ref().map(|b| matrix.t().dot(b));

    let transform = RotateVariables {
        matrix,
        rotated: Array1::zeros(dim),
    };
    let mut outer = Problem::wrap(inner, transform);
    outer.best_parameter = best;
    outer
}
