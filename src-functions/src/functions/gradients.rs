//! Analytic gradients
//!
//! Constrained problem construction needs the gradient of its objective at
//! one point to orient the feasible region. Only the objectives used there
//! carry a gradient; multimodal objectives fall back to a fixed direction
//! chosen by the caller.

use ndarray::Array1;

/// Gradient of [`crate::sphere`]
pub fn sphere_gradient(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|xi| 2.0 * xi)
}

/// Gradient of [`crate::ellipsoid`]
pub fn ellipsoid_gradient(x: &Array1<f64>) -> Array1<f64> {
    let n = x.len();
    if n == 1 {
        return x.mapv(|xi| 2.0 * xi);
    }
    Array1::from_iter(
        x.iter()
            .enumerate()
            .map(|(i, &xi)| 2.0 * 1e6_f64.powf(i as f64 / (n - 1) as f64) * xi),
    )
}

/// Gradient of [`crate::discus`]
pub fn discus_gradient(x: &Array1<f64>) -> Array1<f64> {
    Array1::from_iter(
        x.iter()
            .enumerate()
            .map(|(i, &xi)| if i == 0 { 2e6 * xi } else { 2.0 * xi }),
    )
}

/// Gradient of [`crate::bent_cigar`]
pub fn bent_cigar_gradient(x: &Array1<f64>) -> Array1<f64> {
    Array1::from_iter(
        x.iter()
            .enumerate()
            .map(|(i, &xi)| if i == 0 { 2.0 * xi } else { 2e6 * xi }),
    )
}

/// Gradient of [`crate::linear_slope`]
pub fn linear_slope_gradient(x: &Array1<f64>) -> Array1<f64> {
    Array1::from_elem(x.len(), -1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functions::unimodal::*;

    // The functions under test are polynomials of degree at most two, so the
    // central difference is exact for any step and a large one keeps the
    // roundoff small against the 1e6 conditioning.
    fn numeric_gradient(f: fn(&Array1<f64>) -> f64, x: &Array1<f64>) -> Array1<f64> {
        let h = 1e-3;
        let mut g = Array1::zeros(x.len());
        for i in 0..x.len() {
            let mut hi = x.clone();
            let mut lo = x.clone();
            hi[i] += h;
            lo[i] -= h;
            g[i] = (f(&hi) - f(&lo)) / (2.0 * h);
        }
        g
    }

    fn assert_close(a: &Array1<f64>, b: &Array1<f64>, tol: f64) {
        for (ai, bi) in a.iter().zip(b.iter()) {
            let scale = 1.0 + ai.abs().max(bi.abs());
            assert!(
                (ai - bi).abs() / scale < tol,
                "gradient mismatch: {a} vs {b}"
            );
        }
    }

    #[test]
    fn test_gradients_match_finite_differences() {
        let x = Array1::from_vec(vec![0.7, -1.3, 2.1]);
        assert_close(&sphere_gradient(&x), &numeric_gradient(sphere, &x), 1e-5);
        assert_close(
            &ellipsoid_gradient(&x),
            &numeric_gradient(ellipsoid, &x),
            1e-4,
        );
        assert_close(&discus_gradient(&x), &numeric_gradient(discus, &x), 1e-4);
        assert_close(
            &bent_cigar_gradient(&x),
            &numeric_gradient(bent_cigar, &x),
            1e-4,
        );
        assert_close(
            &linear_slope_gradient(&x),
            &numeric_gradient(linear_slope, &x),
            1e-6,
        );
    }
}
