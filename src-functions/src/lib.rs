//! Raw benchmark function evaluators
//!
//! Plain `fn(&Array1<f64>) -> f64` evaluators used as the innermost layer of
//! benchmark problems, organized by category:
//!
//! - **Unimodal**: single-optimum functions (sphere, ellipsoid, bent cigar, ...)
//! - **Multimodal**: functions with many local minima (rastrigin, schwefel, ...)
//! - **Gradients**: analytic gradients for the objectives that constrained
//!   problem construction differentiates
//!
//! Every function has its optimum at the origin or at a fixed point stated in
//! its doc comment; shifts, rotations and other irregularities are applied by
//! decoration, not here.
//!
//! # Example
//!
//! ```rust
//! use ndarray::Array1;
//! use optbench_functions::*;
//!
//! let x = Array1::from_vec(vec![0.0, 0.0]);
//! assert_eq!(sphere(&x), 0.0);
//! ```

pub mod functions;
pub use functions::*;
