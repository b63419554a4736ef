use ndarray::{Array1, Array2};
use optbench_problem::{
    Problem, power_objective, rotate_variables, scale_variables, shift_objective,
    shift_variables,
};

fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|v| v * v).sum()
}

fn sphere_problem(dim: usize) -> Problem {
    let mut p = Problem::from_function(dim, sphere);
    p.set_id(format!("sphere_d{dim:02}"));
    p.set_name("sphere function");
    p.set_uniform_bounds(-5.0, 5.0);
    p.set_best_parameter(Array1::zeros(dim));
    p.evaluate_best_parameter();
    p
}

#[test]
fn test_shift_moves_the_optimum() {
    let offset = Array1::from_vec(vec![1.0, -2.0]);
    let mut shifted = shift_variables(sphere_problem(2), offset.clone(), false);

    assert_eq!(shifted.best_parameter().unwrap(), &offset);
    // Bounds were not asked to move
    assert_eq!(shifted.lower_bounds()[0], -5.0);

    let at_new_best = shifted.evaluate(&offset);
    assert!(at_new_best[0].abs() < 1e-12);
    let at_origin = shifted.evaluate(&Array1::zeros(2));
    assert_eq!(at_origin[0], sphere(&offset));
}

#[test]
fn test_shift_can_move_bounds() {
    let offset = Array1::from_vec(vec![1.0, 1.0]);
    let shifted = shift_variables(sphere_problem(2), offset, true);
    assert_eq!(shifted.lower_bounds()[0], -4.0);
    assert_eq!(shifted.upper_bounds()[0], 6.0);
}

#[test]
fn test_power_composes_with_the_inner_objective() {
    let mut powered = power_objective(sphere_problem(3), 0.9);
    for raw in [
        vec![0.5, -1.5, 2.0],
        vec![3.0, 3.0, 3.0],
        vec![0.0, 0.1, 0.0],
    ] {
        let x = Array1::from_vec(raw);
        let y = powered.evaluate(&x);
        assert!((y[0] - sphere(&x).powf(0.9)).abs() < 1e-12);
    }
    assert_eq!(powered.best_value().unwrap()[0], 0.0);
}

#[test]
fn test_two_layer_chain() {
    // f(x) = sphere(x - offset) + 42, built inner-to-outer
    let offset = Array1::from_vec(vec![2.0, 0.5]);
    let shifted = shift_variables(sphere_problem(2), offset.clone(), false);
    let mut chained = shift_objective(shifted, 42.0);

    let y = chained.evaluate(&offset);
    assert!((y[0] - 42.0).abs() < 1e-12);
    assert_eq!(chained.best_value().unwrap()[0], 42.0);

    // The stored optimum re-evaluates to the stored value
    let best = chained.best_parameter().unwrap().clone();
    let again = chained.evaluate(&best);
    assert!((again[0] - chained.best_value().unwrap()[0]).abs() < 1e-12);
}

#[test]
fn test_rotation_relocates_the_best_parameter() {
    let mut inner = Problem::from_function(2, sphere);
    inner.set_uniform_bounds(-5.0, 5.0);
    inner.set_best_parameter(Array1::from_vec(vec![1.0, 2.0]));
    inner.set_best_value(Array1::from_vec(vec![5.0]));

    // A coordinate swap is orthogonal and easy to reason about
    let swap = Array2::from_shape_vec((2, 2), vec![0.0, 1.0, 1.0, 0.0]).unwrap();
    let mut rotated = rotate_variables(inner, swap);

    assert_eq!(
        rotated.best_parameter().unwrap(),
        &Array1::from_vec(vec![2.0, 1.0])
    );
    let y = rotated.evaluate(&Array1::from_vec(vec![2.0, 1.0]));
    assert_eq!(y[0], 5.0);
}

#[test]
fn test_scaling_relocates_the_best_parameter() {
    let mut inner = Problem::from_function(2, sphere);
    inner.set_best_parameter(Array1::from_vec(vec![4.0, 9.0]));
    let scaled = scale_variables(inner, Array1::from_vec(vec![2.0, 3.0]));
    assert_eq!(
        scaled.best_parameter().unwrap(),
        &Array1::from_vec(vec![2.0, 3.0])
    );
}

#[test]
fn test_constraints_follow_the_coordinate_map() {
    use optbench_problem::Evaluator;

    struct HalfPlane;
    impl Evaluator for HalfPlane {
        fn evaluate_objective(&mut self, x: &Array1<f64>, y: &mut [f64]) {
            y[0] = sphere(x);
        }
        fn evaluate_constraints(&mut self, x: &Array1<f64>, y: &mut [f64]) {
            y[0] = x[0];
        }
    }

    let inner = Problem::new(2, 1, 1, Box::new(HalfPlane));
    let offset = Array1::from_vec(vec![3.0, 0.0]);
    let mut shifted = shift_variables(inner, offset, false);

    let g = shifted.evaluate_constraints(&Array1::from_vec(vec![1.0, 0.0]));
    assert_eq!(g[0], -2.0);
}

#[test]
fn test_each_layer_counts_its_own_evaluations() {
    let mut outer = shift_objective(sphere_problem(2), 1.0);
    assert_eq!(outer.evaluations(), 0);
    outer.evaluate(&Array1::zeros(2));
    outer.evaluate(&Array1::zeros(2));
    assert_eq!(outer.evaluations(), 2);
}
