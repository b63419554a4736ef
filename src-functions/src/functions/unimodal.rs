//! Unimodal test functions
//!
//! Single-optimum functions covering the usual spread of conditioning and
//! separability. All of them are defined for any dimension >= 1.

use ndarray::Array1;

/// Sphere function - the simplest smooth bowl
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn sphere(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| xi * xi).sum()
}

/// Separable ellipsoid with condition number 1e6
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn ellipsoid(x: &Array1<f64>) -> f64 {
    let n = x.len();
    if n == 1 {
        return x[0] * x[0];
    }
    x.iter()
        .enumerate()
        .map(|(i, &xi)| 1e6_f64.powf(i as f64 / (n - 1) as f64) * xi * xi)
        .sum()
}

/// Discus function - one heavily weighted coordinate
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn discus(x: &Array1<f64>) -> f64 {
    let tail: f64 = x.iter().skip(1).map(|&xi| xi * xi).sum();
    1e6 * x[0] * x[0] + tail
}

/// Bent cigar function - a narrow curved valley
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn bent_cigar(x: &Array1<f64>) -> f64 {
    let tail: f64 = x.iter().skip(1).map(|&xi| xi * xi).sum();
    x[0] * x[0] + 1e6 * tail
}

/// Different powers function - sensitivity grows per coordinate
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn different_powers(x: &Array1<f64>) -> f64 {
    let n = x.len();
    if n == 1 {
        return x[0].abs();
    }
    let sum: f64 = x
        .iter()
        .enumerate()
        .map(|(i, &xi)| xi.abs().powf(2.0 + 4.0 * i as f64 / (n - 1) as f64))
        .sum();
    sum.sqrt()
}

/// Linear slope - purely linear, optimum on the boundary
/// Global minimum (within bounds): f(x) = 0 at x = (5, 5, ..., 5)
/// Bounds: x_i in [-5, 5]
pub fn linear_slope(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| 5.0 - xi).sum()
}

/// Attractive sector - highly asymmetric bowl, one orthant penalized
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-5, 5]
pub fn attractive_sector(x: &Array1<f64>) -> f64 {
    x.iter()
        .map(|&xi| {
            let s = if xi > 0.0 { 100.0 } else { 1.0 };
            (s * xi) * (s * xi)
        })
        .sum()
}

/// Rosenbrock function - curved narrow valley
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [-5, 5]
pub fn rosenbrock(x: &Array1<f64>) -> f64 {
    let mut sum = 0.0;
    for i in 0..x.len() - 1 {
        sum += 100.0 * (x[i + 1] - x[i] * x[i]).powi(2) + (1.0 - x[i]).powi(2);
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zeros(n: usize) -> Array1<f64> {
        Array1::zeros(n)
    }

    #[test]
    fn test_minima_at_origin() {
        for n in [1, 2, 5, 10] {
            assert_eq!(sphere(&zeros(n)), 0.0);
            assert_eq!(ellipsoid(&zeros(n)), 0.0);
            assert_eq!(different_powers(&zeros(n)), 0.0);
            assert_eq!(attractive_sector(&zeros(n)), 0.0);
        }
        assert_eq!(discus(&zeros(3)), 0.0);
        assert_eq!(bent_cigar(&zeros(3)), 0.0);
    }

    #[test]
    fn test_rosenbrock_minimum_at_ones() {
        let ones = Array1::from_elem(5, 1.0);
        assert_eq!(rosenbrock(&ones), 0.0);
        assert!(rosenbrock(&zeros(5)) > 0.0);
    }

    #[test]
    fn test_linear_slope_at_boundary() {
        let best = Array1::from_elem(4, 5.0);
        assert_eq!(linear_slope(&best), 0.0);
        let interior = Array1::from_elem(4, 0.0);
        assert_eq!(linear_slope(&interior), 20.0);
    }

    #[test]
    fn test_conditioning() {
        // The first coordinate dominates the discus, the tail the cigar
        let e1 = Array1::from_vec(vec![1.0, 0.0]);
        let e2 = Array1::from_vec(vec![0.0, 1.0]);
        assert!(discus(&e1) > discus(&e2) * 1e5);
        assert!(bent_cigar(&e2) > bent_cigar(&e1) * 1e5);
        // The ellipsoid reaches the full condition number on the last axis
        let last = Array1::from_vec(vec![0.0, 0.0, 1.0]);
        assert!((ellipsoid(&last) - 1e6).abs() < 1e-6);
    }

    #[test]
    fn test_attractive_sector_asymmetry() {
        let pos = Array1::from_vec(vec![1.0, 1.0]);
        let neg = Array1::from_vec(vec![-1.0, -1.0]);
        assert!(attractive_sector(&pos) > attractive_sector(&neg) * 1e3);
    }
}
