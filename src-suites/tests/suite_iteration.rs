//! End-to-end checks of the suite iteration order and lifecycle.

use ndarray::Array1;
use optbench_problem::{NullObserver, Observer, Problem};
use optbench_suites::Suite;

fn collect_ids(suite: &mut Suite) -> Vec<String> {
    let mut observer = NullObserver;
    let mut ids = Vec::new();
    while let Some(problem) = suite.next_problem(&mut observer) {
        ids.push(problem.id().to_string());
    }
    ids
}

#[test]
fn test_toy_suite_yields_every_combination() {
    let mut suite = Suite::with_defaults("toy").unwrap();
    assert_eq!(suite.number_of_problems(), 30);

    let ids = collect_ids(&mut suite);
    assert_eq!(ids.len(), 30);
    assert_eq!(ids[0], "sphere_d02");
    assert_eq!(ids[1], "ellipsoid_d02");
    assert_eq!(ids[6], "sphere_d03");
    assert_eq!(ids[29], "discus_d20");

    let mut unique = ids.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 30, "every problem appears exactly once");
}

#[test]
fn test_instance_axis_moves_fastest() {
    let mut suite = Suite::new(
        "blackbox",
        "instances: 3-4",
        "function_ids: 2,5 dimension_ids: 3",
    )
    .unwrap();
    let ids = collect_ids(&mut suite);
    assert_eq!(
        ids,
        vec![
            "blackbox_f002_i03_d05",
            "blackbox_f002_i04_d05",
            "blackbox_f005_i03_d05",
            "blackbox_f005_i04_d05",
        ]
    );
}

#[test]
fn test_filtered_axes_iterate_in_order() {
    let mut suite = Suite::new("toy", "", "function_ids: 1,3 dimension_ids: 1-2").unwrap();
    let mut observer = NullObserver;

    let mut ids = Vec::new();
    while let Some(problem) = suite.next_problem(&mut observer) {
        assert_eq!(problem.evaluations(), 0);
        ids.push(problem.id().to_string());
    }
    assert_eq!(
        ids,
        vec!["sphere_d02", "rastrigin_d02", "sphere_d03", "rastrigin_d03"]
    );
    assert!(suite.next_problem(&mut observer).is_none());
}

#[test]
fn test_exhaustion_is_terminal() {
    let mut suite = Suite::new("toy", "", "function_ids: 1 dimension_ids: 1").unwrap();
    let mut observer = NullObserver;
    assert!(suite.next_problem(&mut observer).is_some());
    assert!(suite.next_problem(&mut observer).is_none());
    assert!(suite.next_problem(&mut observer).is_none());
}

#[test]
fn test_number_of_problems_matches_iteration() {
    let mut suite =
        Suite::new("blackbox-constrained", "instances: 1-2", "dimensions: 2,5").unwrap();
    let expected = suite.number_of_problems();
    assert_eq!(expected, 18 * 2 * 2);
    assert_eq!(collect_ids(&mut suite).len(), expected);
}

#[test]
fn test_problems_are_rebuilt_deterministically() {
    let mut first_pass =
        Suite::new("blackbox", "instances: 2", "function_ids: 9 dimensions: 5").unwrap();
    let mut second_pass =
        Suite::new("blackbox", "instances: 2", "function_ids: 9 dimensions: 5").unwrap();
    let mut observer = NullObserver;
    let x = Array1::from_vec(vec![1.0, -2.0, 0.5, 3.0, -0.25]);

    let first = first_pass.next_problem(&mut observer).unwrap().evaluate(&x);
    let second = second_pass.next_problem(&mut observer).unwrap().evaluate(&x);
    assert_eq!(first, second);
}

#[test]
fn test_make_problem_matches_the_iterated_problem() {
    let mut suite = Suite::new("blackbox", "instances: 5", "function_ids: 3 dimensions: 3").unwrap();
    let mut direct = suite.make_problem(3, 3, 5);
    let x = Array1::from_vec(vec![0.5, 1.5, -2.5]);
    let expected = direct.evaluate(&x);

    let mut observer = NullObserver;
    let iterated = suite.next_problem(&mut observer).unwrap();
    assert_eq!(iterated.id(), direct.id());
    assert_eq!(iterated.evaluate(&x), expected);
}

#[test]
fn test_problems_pass_through_the_observer() {
    struct TagObserver;

    impl Observer for TagObserver {
        fn name(&self) -> &str {
            "tag"
        }
        fn attach(&mut self, mut problem: Problem) -> Problem {
            let tagged = format!("{}__tagged", problem.id());
            problem.set_id(tagged);
            problem
        }
    }

    let mut suite = Suite::new("toy", "", "function_ids: 2 dimension_ids: 2").unwrap();
    let mut observer = TagObserver;
    let problem = suite.next_problem(&mut observer).unwrap();
    assert_eq!(problem.id(), "ellipsoid_d03__tagged");
}

#[test]
fn test_biobj_suite_iterates_stacked_problems() {
    let mut suite =
        Suite::new("blackbox-biobj", "instances: 1", "function_ids: 1-3 dimension_ids: 1").unwrap();
    let mut observer = NullObserver;
    let mut seen = 0;
    while let Some(problem) = suite.next_problem(&mut observer) {
        assert_eq!(problem.number_of_objectives(), 2);
        let y = problem.evaluate(&Array1::zeros(2));
        assert!(y.iter().all(|v| v.is_finite()));
        seen += 1;
    }
    assert_eq!(seen, 3);
}
