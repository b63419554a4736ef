//! The bi-objective suite: stacked pairs of blackbox problems.
//!
//! Each function is a fixed pair of blackbox functions sharing the
//! `[-5, 5]` region of interest. Instance `i` stacks component
//! instances `2i - 1` and `2i`, so the two objectives never share
//! their optimum location.

use optbench_problem::Problem;

use super::blackbox::blackbox_problem;
use super::ProblemFamily;

pub struct BlackboxBiobjFamily;

const DIMENSIONS: [usize; 5] = [2, 3, 5, 10, 20];

/// Component pairs, by blackbox function number. The schwefel function
/// is absent: its region of interest disagrees with everything else.
const PAIRS: [(usize, usize); 10] = [
    (1, 2),
    (1, 4),
    (1, 9),
    (2, 6),
    (3, 5),
    (4, 10),
    (5, 9),
    (6, 8),
    (8, 10),
    (9, 10),
];

impl ProblemFamily for BlackboxBiobjFamily {
    fn name(&self) -> &'static str {
        "blackbox-biobj"
    }

    fn dimensions(&self) -> &[usize] {
        &DIMENSIONS
    }

    fn number_of_functions(&self) -> usize {
        PAIRS.len()
    }

    fn default_instances(&self) -> &'static str {
        "instances: 1-5"
    }

    fn problem(&self, function: usize, dimension: usize, instance: usize) -> Problem {
        let (first_function, second_function) = match PAIRS.get(function - 1) {
            Some(pair) => *pair,
            None => panic!("the blackbox-biobj suite has no function {function}"),
        };
        let first = blackbox_problem(first_function, dimension, 2 * instance - 1);
        let second = blackbox_problem(second_function, dimension, 2 * instance);
        let combined_type = format!("{}_{}", first.problem_type(), second.problem_type());

        let mut problem = match Problem::stack(first, second) {
            Ok(p) => p,
            Err(e) => panic!("stacking blackbox components failed: {e}"),
        };
        problem.set_id(format!(
            "blackbox-biobj_f{function:03}_i{instance:02}_d{dimension:02}"
        ));
        problem.set_name(format!(
            "blackbox-biobj suite problem f{function} instance {instance} in {dimension}D"
        ));
        problem.set_problem_type(combined_type);
        problem
    }
}
