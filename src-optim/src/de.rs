//! Differential evolution over a benchmark problem
//!
//! A compact DE with the classic rand/1 and best/1 mutation schemes,
//! binomial or exponential crossover, optional dithering of the mutation
//! factor and deferred selection. Constrained problems are handled with a
//! quadratic penalty on the violation; the evaluation budget is enforced
//! through the problem's own counter, so whatever the problem counts is
//! what the budget limits.

use ndarray::{Array1, Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::str::FromStr;

use optbench_problem::Problem;

use crate::{argmin, Report};

/// Mutation scheme and crossover, as one name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Rand1Bin,
    Rand1Exp,
    Best1Bin,
    Best1Exp,
}

impl Strategy {
    pub fn crossover(self) -> Crossover {
        match self {
            Strategy::Rand1Bin | Strategy::Best1Bin => Crossover::Binomial,
            Strategy::Rand1Exp | Strategy::Best1Exp => Crossover::Exponential,
        }
    }
}

impl FromStr for Strategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rand1bin" | "rand1" => Ok(Strategy::Rand1Bin),
            "rand1exp" => Ok(Strategy::Rand1Exp),
            "best1bin" | "best1" => Ok(Strategy::Best1Bin),
            "best1exp" => Ok(Strategy::Best1Exp),
            _ => Err(format!("unknown strategy: {s}")),
        }
    }
}

/// Crossover type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossover {
    Binomial,
    Exponential,
}

/// Mutation factor: fixed, or dithered per trial
#[derive(Debug, Clone, Copy)]
pub enum Mutation {
    Factor(f64),
    Range { min: f64, max: f64 },
}

impl Mutation {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Mutation::Factor(f) => f,
            Mutation::Range { min, max } => rng.random_range(min..max),
        }
    }
}

/// Population initialization scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Init {
    LatinHypercube,
    Random,
}

/// Differential evolution configuration
#[derive(Debug, Clone)]
pub struct DeConfig {
    /// Maximum number of generations
    pub maxiter: usize,
    /// Population members per problem variable
    pub popsize: usize,
    /// Relative convergence tolerance on the energy spread
    pub tol: f64,
    /// Absolute convergence tolerance on the energy spread
    pub atol: f64,
    pub mutation: Mutation,
    /// Crossover probability CR in [0, 1]
    pub recombination: f64,
    pub strategy: Strategy,
    pub init: Init,
    pub seed: Option<u64>,
    /// Optional starting point, replaces one population member
    pub x0: Option<Array1<f64>>,
    /// Evaluation budget; 0 means unlimited
    pub max_evaluations: u64,
    /// Weight of the quadratic constraint violation penalty
    pub penalty_weight: f64,
    /// Print progress per generation
    pub disp: bool,
}

impl Default for DeConfig {
    fn default() -> Self {
        DeConfig {
            maxiter: 1000,
            popsize: 15,
            tol: 1e-8,
            atol: 0.0,
            mutation: Mutation::Range { min: 0.5, max: 1.0 },
            recombination: 0.7,
            strategy: Strategy::Rand1Bin,
            init: Init::LatinHypercube,
            seed: None,
            x0: None,
            max_evaluations: 0,
            penalty_weight: 1e6,
            disp: false,
        }
    }
}

/// Minimize `problem` with differential evolution.
///
/// After every generation the incumbent best is passed to problems that
/// accept recommendations. The reported `fun` is the penalized energy of
/// the best member, which equals the raw objective whenever no constraint
/// is violated.
pub fn differential_evolution(problem: &mut Problem, config: &DeConfig) -> Report {
    assert_eq!(
        problem.number_of_objectives(),
        1,
        "differential evolution is single-objective"
    );
    assert!(
        (0.0..=1.0).contains(&config.recombination),
        "recombination must be in [0, 1]"
    );

    let n = problem.number_of_variables();
    let lower = problem.lower_bounds().clone();
    let upper = problem.upper_bounds().clone();
    let npop = (config.popsize * n).max(5);
    let budget = if config.max_evaluations == 0 {
        u64::MAX
    } else {
        config.max_evaluations
    };
    let start = problem.evaluations();

    let mut rng: StdRng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => {
            let mut thread_rng = rand::rng();
            StdRng::from_rng(&mut thread_rng)
        }
    };

    if config.disp {
        eprintln!(
            "DE init: {} variables, population={}, maxiter={}, strategy={:?}",
            n, npop, config.maxiter, config.strategy
        );
    }

    let mut population = match config.init {
        Init::LatinHypercube => init_latin_hypercube(npop, &lower, &upper, &mut rng),
        Init::Random => init_random(npop, &lower, &upper, &mut rng),
    };
    if let Some(x0) = &config.x0 {
        assert_eq!(x0.len(), n, "wrong x0 dimension");
        let mut seeded = x0.clone();
        clip(&mut seeded, &lower, &upper);
        population.row_mut(0).assign(&seeded);
    }

    let mut objective = [0.0];
    let mut constraints = vec![0.0; problem.number_of_constraints()];

    let mut energies = vec![f64::INFINITY; npop];
    for i in 0..npop {
        if problem.evaluations() - start >= budget {
            break;
        }
        let member = population.row(i).to_owned();
        energies[i] = energy(
            problem,
            &member,
            &mut objective,
            &mut constraints,
            config.penalty_weight,
        );
    }

    let (first_best, mut best_energy) = argmin(&energies);
    let mut best_x = population.row(first_best).to_owned();

    let mut nit = 0;
    let mut success = false;
    let mut message = String::from("maximum number of generations reached");

    'generations: for generation in 1..=config.maxiter {
        nit = generation;

        // All trials are built against the frozen current population
        let mut trials: Vec<Array1<f64>> = Vec::with_capacity(npop);
        for i in 0..npop {
            let f = config.mutation.sample(&mut rng);
            let mutant = match config.strategy {
                Strategy::Rand1Bin | Strategy::Rand1Exp => {
                    let p = distinct_indices(&mut rng, npop, i, 3);
                    &population.row(p[0]) + &((&population.row(p[1]) - &population.row(p[2])) * f)
                }
                Strategy::Best1Bin | Strategy::Best1Exp => {
                    let p = distinct_indices(&mut rng, npop, i, 2);
                    &best_x + &((&population.row(p[0]) - &population.row(p[1])) * f)
                }
            };
            let target = population.row(i);
            let mut trial = match config.strategy.crossover() {
                Crossover::Binomial => {
                    binomial_crossover(&target, &mutant, config.recombination, &mut rng)
                }
                Crossover::Exponential => {
                    exponential_crossover(&target, &mutant, config.recombination, &mut rng)
                }
            };
            clip(&mut trial, &lower, &upper);
            trials.push(trial);
        }

        let mut out_of_budget = false;
        for (i, trial) in trials.into_iter().enumerate() {
            if problem.evaluations() - start >= budget {
                out_of_budget = true;
                break;
            }
            let e = energy(
                problem,
                &trial,
                &mut objective,
                &mut constraints,
                config.penalty_weight,
            );
            if e < energies[i] {
                energies[i] = e;
                population.row_mut(i).assign(&trial);
            }
        }

        let (index, value) = argmin(&energies);
        best_energy = value;
        best_x = population.row(index).to_owned();

        if problem.accepts_recommendations() {
            problem.recommend_solution(&best_x);
        }
        if config.disp {
            eprintln!("DE generation {generation}: best={best_energy:.6e}");
        }

        if out_of_budget {
            message = "evaluation budget exhausted".into();
            break 'generations;
        }
        if converged(&energies, config.tol, config.atol) {
            success = true;
            message = "population converged".into();
            break 'generations;
        }
    }

    Report {
        x: best_x,
        fun: best_energy,
        success,
        message,
        nit,
        nfev: problem.evaluations() - start,
    }
}

/// Penalized objective of one candidate
fn energy(
    problem: &mut Problem,
    x: &Array1<f64>,
    objective: &mut [f64],
    constraints: &mut [f64],
    penalty_weight: f64,
) -> f64 {
    problem.evaluate_into(x, objective);
    let mut value = objective[0];
    if !constraints.is_empty() {
        problem.evaluate_constraints_into(x, constraints);
        for g in constraints.iter() {
            let violation = g.max(0.0);
            value += penalty_weight * violation * violation;
        }
    }
    value
}

fn converged(energies: &[f64], tol: f64, atol: f64) -> bool {
    if energies.iter().any(|e| !e.is_finite()) {
        return false;
    }
    let mean = energies.iter().sum::<f64>() / energies.len() as f64;
    let variance =
        energies.iter().map(|e| (e - mean).powi(2)).sum::<f64>() / energies.len() as f64;
    variance.sqrt() <= atol + tol * mean.abs()
}

/// `count` random population indices, all distinct and none equal to `exclude`
fn distinct_indices(rng: &mut StdRng, npop: usize, exclude: usize, count: usize) -> Vec<usize> {
    debug_assert!(npop > count, "population too small for distinct picks");
    let mut picked = Vec::with_capacity(count);
    while picked.len() < count {
        let candidate = rng.random_range(0..npop);
        if candidate != exclude && !picked.contains(&candidate) {
            picked.push(candidate);
        }
    }
    picked
}

fn binomial_crossover(
    target: &ArrayView1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut StdRng,
) -> Array1<f64> {
    let n = target.len();
    let mut trial = target.to_owned();
    let forced = rng.random_range(0..n);
    for j in 0..n {
        if j == forced || rng.random::<f64>() < cr {
            trial[j] = mutant[j];
        }
    }
    trial
}

fn exponential_crossover(
    target: &ArrayView1<f64>,
    mutant: &Array1<f64>,
    cr: f64,
    rng: &mut StdRng,
) -> Array1<f64> {
    let n = target.len();
    let mut trial = target.to_owned();
    let mut j = rng.random_range(0..n);
    for _ in 0..n {
        trial[j] = mutant[j];
        j = (j + 1) % n;
        if rng.random::<f64>() >= cr {
            break;
        }
    }
    trial
}

fn clip(x: &mut Array1<f64>, lower: &Array1<f64>, upper: &Array1<f64>) {
    for j in 0..x.len() {
        x[j] = x[j].clamp(lower[j], upper[j]);
    }
}

fn init_random(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut StdRng,
) -> Array2<f64> {
    let n = lower.len();
    Array2::from_shape_fn((npop, n), |(_, j)| rng.random_range(lower[j]..upper[j]))
}

fn init_latin_hypercube(
    npop: usize,
    lower: &Array1<f64>,
    upper: &Array1<f64>,
    rng: &mut StdRng,
) -> Array2<f64> {
    let n = lower.len();
    let mut population = Array2::zeros((npop, n));
    let mut order: Vec<usize> = (0..npop).collect();
    for j in 0..n {
        order.shuffle(rng);
        let span = upper[j] - lower[j];
        for i in 0..npop {
            let u: f64 = rng.random();
            population[[i, j]] = lower[j] + span * ((order[i] as f64 + u) / npop as f64);
        }
    }
    population
}
