//! Variable scaling: evaluate the inner problem at `factors * x`

use ndarray::{Array1, Zip};

use crate::problem::Problem;
use crate::transform::Transform;

struct ScaleVariables {
    factors: Array1<f64>,
    scaled: Array1<f64>,
}

impl ScaleVariables {
    fn apply(&mut self, x: &Array1<f64>) {
        Zip::from(&mut self.scaled)
            .and(x)
            .and(&self.factors)
            .for_each(|s, &xi, &fi| *s = fi * xi);
    }
}

impl Transform for ScaleVariables {
    fn evaluate_objective(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_into(&self.scaled, y);
    }

    fn evaluate_constraints(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        self.apply(x);
        inner.evaluate_constraints_into(&self.scaled, y);
    }
}

/// Scale the variables of `inner` elementwise by `factors`
///
/// Factors must be nonzero; the stored best parameter is divided by them.
pub fn scale_variables(inner: Problem, factors: Array1<f64>) -> Problem {
    assert_eq!(
        factors.len(),
        inner.number_of_variables(),
        "wrong factors dimension"
    );
    assert!(factors.iter().all(|&f| f != 0.0), "zero scaling factor");
    let dim = factors.len();
    let best = inner.best_parameter.as_ref().map(|b| b / &factors);

    let transform = ScaleVariables {
        factors,
        scaled: Array1::zeros(dim),
    };
    let mut outer = Problem::wrap(inner, transform);
    outer.best_parameter = best;
    outer
}
