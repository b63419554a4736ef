//! The experiment loop: one suite, one observer, one optimizer
//!
//! [`benchmark`] walks the suite problem by problem, hands each problem to a
//! caller-supplied optimizer, and collects one [`ProblemResult`] per problem;
//! the observer flushes its recordings once the walk ends. [`run_benchmark`]
//! is the CLI-facing wrapper that picks one of the bundled optimizers, gives
//! it an evaluation budget proportional to the problem dimension, and wraps
//! the rows in a [`BenchmarkSummary`] that can be written out as JSON.

use std::fs::File;
use std::str::FromStr;

use serde::Serialize;

use optbench_optim::{differential_evolution, random_search, DeConfig, Report};
use optbench_problem::Problem;
use optbench_suites::Suite;

use crate::cli::Args;
use crate::error::BenchError;
use crate::observers;

/// Optimizer selection for [`run_benchmark`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptimizerKind {
    RandomSearch,
    DifferentialEvolution,
}

impl FromStr for OptimizerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random-search" | "random_search" | "random" => Ok(OptimizerKind::RandomSearch),
            "de" | "differential-evolution" | "differential_evolution" => {
                Ok(OptimizerKind::DifferentialEvolution)
            }
            _ => Err(format!("Unknown optimizer: {}", s)),
        }
    }
}

/// Outcome of one problem of the run
#[derive(Debug, Clone, Serialize)]
pub struct ProblemResult {
    pub id: String,
    pub dimension: usize,
    /// Objective evaluations the optimizer spent on this problem
    pub evaluations: u64,
    /// Best objective value observed, absent for multi-objective problems
    pub best_observed: Option<f64>,
    /// Whether the known optimum was reached up to the final target precision
    pub target_hit: bool,
}

impl ProblemResult {
    fn from_problem(problem: &Problem) -> Self {
        ProblemResult {
            id: problem.id().to_string(),
            dimension: problem.number_of_variables(),
            evaluations: problem.evaluations(),
            best_observed: (problem.number_of_objectives() == 1)
                .then(|| problem.best_observed_value()),
            target_hit: problem.final_target_hit(),
        }
    }
}

/// Outcome of a whole benchmark run
#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkSummary {
    pub suite: String,
    pub observer: String,
    pub optimizer: String,
    pub budget_multiplier: u64,
    pub seed: u64,
    /// RFC 3339 timestamp taken when the run ended
    pub timestamp: String,
    pub problems_run: usize,
    pub targets_hit: usize,
    pub problems: Vec<ProblemResult>,
}

/// Run `optimizer` on every problem of the named suite
///
/// Builds the suite and the observer, walks every problem, hands each one to
/// `optimizer`, and returns one [`ProblemResult`] per problem in suite order.
/// The observer is flushed once the walk ends.
pub fn benchmark<F>(
    suite_name: &str,
    suite_instance: &str,
    suite_options: &str,
    observer_name: &str,
    observer_options: &str,
    mut optimizer: F,
) -> Result<Vec<ProblemResult>, BenchError>
where
    F: FnMut(&mut Problem),
{
    let mut observer = observers::observer_by_name(observer_name, observer_options)?;
    let mut suite = Suite::new(suite_name, suite_instance, suite_options)?;

    let mut problems: Vec<ProblemResult> = Vec::new();
    while let Some(problem) = suite.next_problem(observer.as_mut()) {
        optimizer(problem);
        problems.push(ProblemResult::from_problem(problem));
    }
    observer.finish()?;
    Ok(problems)
}

/// Run the experiment described by `args`
///
/// Resolves one of the bundled optimizers by name, runs it through
/// [`benchmark`] with an evaluation budget of `budget_multiplier * dimension`
/// per problem, and returns the run summary. When `args.summary` names a
/// file, the summary is also written there as pretty-printed JSON.
pub fn run_benchmark(args: &Args) -> Result<BenchmarkSummary, BenchError> {
    let optimizer: OptimizerKind = args
        .optimizer
        .parse()
        .map_err(|_| BenchError::UnknownOptimizer(args.optimizer.clone()))?;

    let problems = benchmark(
        &args.suite,
        &args.suite_instance,
        &args.suite_options,
        &args.observer,
        &args.observer_options,
        |problem| {
            let budget = args.budget_multiplier.max(1) * problem.number_of_variables() as u64;
            let report = optimize(optimizer, problem, budget, args.seed);
            if args.verbose {
                eprintln!(
                    "{}: best {:.6e} after {} evaluations ({})",
                    problem.id(),
                    report.fun,
                    problem.evaluations(),
                    report.message
                );
            }
        },
    )?;

    let targets_hit = problems.iter().filter(|p| p.target_hit).count();
    let summary = BenchmarkSummary {
        suite: args.suite.clone(),
        observer: if args.observer.is_empty() {
            "none".to_string()
        } else {
            args.observer.clone()
        },
        optimizer: args.optimizer.clone(),
        budget_multiplier: args.budget_multiplier,
        seed: args.seed,
        timestamp: chrono::Utc::now().to_rfc3339(),
        problems_run: problems.len(),
        targets_hit,
        problems,
    };

    if let Some(path) = &args.summary {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, &summary)?;
    }
    Ok(summary)
}

/// Dispatch one problem to the selected optimizer
///
/// Differential evolution is single-objective; multi-objective problems fall
/// back to random search under the same budget.
fn optimize(kind: OptimizerKind, problem: &mut Problem, budget: u64, seed: u64) -> Report {
    match kind {
        OptimizerKind::RandomSearch => random_search(problem, budget, seed),
        OptimizerKind::DifferentialEvolution if problem.number_of_objectives() == 1 => {
            let config = DeConfig {
                max_evaluations: budget,
                seed: Some(seed),
                x0: Some(problem.initial_solution()),
                ..DeConfig::default()
            };
            differential_evolution(problem, &config)
        }
        OptimizerKind::DifferentialEvolution => random_search(problem, budget, seed),
    }
}
