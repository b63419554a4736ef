//! Linear inequality constraints `a_i . x <= 0`.
//!
//! The constrained suite stacks a constraints-only problem under each
//! objective. The gradient set is built around a feasible direction:
//! the first gradient is the negated direction itself, every further
//! gradient is a Gaussian draw flipped into the half-space that keeps
//! the direction feasible. The origin therefore always lies on the
//! boundary of the feasible region, with the feasible ray pointing
//! along the direction of increasing objective values.

use ndarray::Array1;
use rand::rngs::StdRng;

use optbench_problem::{Evaluator, Problem};

use crate::instances::gaussian_vector;

struct LinearConstraints {
    gradients: Vec<Array1<f64>>,
}

impl Evaluator for LinearConstraints {
    fn evaluate_objective(&mut self, _x: &Array1<f64>, _y: &mut [f64]) {
        // Constraints-only problem, there is no objective to write.
    }

    fn evaluate_constraints(&mut self, x: &Array1<f64>, y: &mut [f64]) {
        for (value, gradient) in y.iter_mut().zip(&self.gradients) {
            *value = gradient.dot(x);
        }
    }
}

/// Gradient set for `count` constraints around the feasible direction.
pub(crate) fn constraint_gradients(
    rng: &mut StdRng,
    feasible_direction: &Array1<f64>,
    count: usize,
    scale: f64,
) -> Vec<Array1<f64>> {
    assert!(count > 0, "a constrained problem needs at least one constraint");
    let mut gradients = Vec::with_capacity(count);
    gradients.push(feasible_direction.mapv(|v| -v * scale));
    for _ in 1..count {
        let mut gradient = gaussian_vector(rng, feasible_direction.len());
        if gradient.dot(feasible_direction) > 0.0 {
            gradient.mapv_inplace(|v| -v);
        }
        let norm = gradient.dot(&gradient).sqrt();
        assert!(norm > 1e-12, "degenerate Gaussian sample for a constraint gradient");
        gradients.push(gradient.mapv(|v| v * scale / norm));
    }
    gradients
}

/// Constraints-only problem with zero objectives, ready for stacking.
pub(crate) fn constraints_problem(dimension: usize, gradients: Vec<Array1<f64>>) -> Problem {
    let count = gradients.len();
    let mut problem = Problem::new(dimension, 0, count, Box::new(LinearConstraints { gradients }));
    problem.set_id(format!("linear_c{count:02}_d{dimension:02}"));
    problem.set_name(format!("{count} linear constraints in {dimension}D"));
    problem.set_problem_type("linear");
    problem
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::instance_rng;
    use ndarray::arr1;

    #[test]
    fn test_feasible_ray_satisfies_all_constraints() {
        let mut rng = instance_rng(4, 6, 2);
        let direction = arr1(&[1.0, -0.5, 0.25, 2.0, -1.0, 0.75]);
        let gradients = constraint_gradients(&mut rng, &direction, 7, 10.0);
        assert_eq!(gradients.len(), 7);
        for gradient in &gradients {
            assert!(gradient.dot(&direction) <= 0.0);
        }
    }

    #[test]
    fn test_origin_is_on_the_boundary() {
        let mut rng = instance_rng(4, 3, 1);
        let direction = arr1(&[1.0, 1.0, 1.0]);
        let gradients = constraint_gradients(&mut rng, &direction, 4, 10.0);
        let mut problem = constraints_problem(3, gradients);
        let mut values = [f64::NAN; 4];
        problem.evaluate_constraints_into(&arr1(&[0.0, 0.0, 0.0]), &mut values);
        assert!(values.iter().all(|v| v.abs() < 1e-12));
    }

    #[test]
    fn test_constraints_problem_shape() {
        let mut rng = instance_rng(1, 2, 1);
        let gradients = constraint_gradients(&mut rng, &arr1(&[1.0, 0.0]), 3, 10.0);
        let problem = constraints_problem(2, gradients);
        assert_eq!(problem.number_of_objectives(), 0);
        assert_eq!(problem.number_of_constraints(), 3);
        assert!(!problem.has_bounds());
    }
}
