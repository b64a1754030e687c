//! Online per-unit activation statistics.
//!
//! Maintains numerically stable running mean, variance, and sparsity counts
//! over an unbounded stream of sample batches, without storing past samples.
//! The update rule is Welford's online algorithm, applied elementwise over
//! the per-sample feature shape, one sample at a time in arrival order.
//!
//! # Example
//!
//! ```
//! use ndarray::Array2;
//! use saliencia::estimator::WelfordEstimator;
//!
//! let mut est = WelfordEstimator::new();
//! // Five scalar samples, shaped (batch, 1).
//! let samples = Array2::from_shape_vec((5, 1), vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
//! est.fit(samples.view().into_dyn()).unwrap();
//!
//! assert_eq!(est.n_samples(), 5);
//! assert!((est.mean().unwrap()[[0]] - 3.0).abs() < 1e-12);
//! assert!((est.std().unwrap()[[0]] - 2.5f64.sqrt()).abs() < 1e-12);
//! ```

mod error;
mod state;
mod welford;

#[cfg(test)]
mod proptests;

pub use error::{EstimatorError, Result};
pub use state::EstimatorState;
pub use welford::{WelfordEstimator, DEFAULT_ACTIVE_THRESHOLD};
