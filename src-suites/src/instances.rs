//! Deterministic per-instance parametrization.
//!
//! Every problem instance derives its optimum location, optimal value,
//! rotation matrices and constraint gradients from a seeded generator,
//! so rebuilding the same (function, dimension, instance) triple always
//! yields the same problem.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Generator for one (function, dimension, instance) triple.
pub(crate) fn instance_rng(function: usize, dimension: usize, instance: usize) -> StdRng {
    let seed = function as u64 + 10_000 * instance as u64 + 1_000_000_007 * dimension as u64;
    StdRng::seed_from_u64(seed)
}

/// Uniform optimum shift with every coordinate in `[-radius, radius]`.
pub(crate) fn random_offset(rng: &mut StdRng, dimension: usize, radius: f64) -> Array1<f64> {
    Array1::from_iter((0..dimension).map(|_| rng.random_range(-radius..radius)))
}

/// Optimal objective value, uniform in `[-100, 100]` rounded to two decimals.
pub(crate) fn random_target(rng: &mut StdRng) -> f64 {
    (rng.random_range::<f64, _>(-100.0..100.0) * 100.0).round() / 100.0
}

/// Vector of independent standard normal draws.
pub(crate) fn gaussian_vector(rng: &mut StdRng, dimension: usize) -> Array1<f64> {
    Array1::from_iter((0..dimension).map(|_| rng.sample::<f64, _>(StandardNormal)))
}

/// Random rotation matrix, built by Gram-Schmidt orthonormalization of a
/// Gaussian matrix. The rows form an orthonormal basis.
pub(crate) fn random_rotation(rng: &mut StdRng, dimension: usize) -> Array2<f64> {
    let mut matrix = Array2::zeros((dimension, dimension));
    for i in 0..dimension {
        for j in 0..dimension {
            matrix[[i, j]] = rng.sample::<f64, _>(StandardNormal);
        }
    }
    for i in 0..dimension {
        for k in 0..i {
            let dot = matrix.row(i).dot(&matrix.row(k));
            let projection = matrix.row(k).to_owned() * dot;
            let mut row = matrix.row_mut(i);
            row -= &projection;
        }
        let norm = matrix.row(i).dot(&matrix.row(i)).sqrt();
        assert!(norm > 1e-12, "degenerate Gaussian sample during orthonormalization");
        matrix.row_mut(i).mapv_inplace(|v| v / norm);
    }
    matrix
}
