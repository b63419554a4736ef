//! Benchmark function implementations organized by category
//!
//! - `unimodal`: single-optimum functions (bowl-shaped, ridge-shaped, linear)
//! - `multimodal`: functions with many local minima
//! - `gradients`: analytic gradients for a subset of the unimodal functions

pub mod gradients;
pub mod multimodal;
pub mod unimodal;

// Re-export all functions for easy access
pub use gradients::*;
pub use multimodal::*;
pub use unimodal::*;
