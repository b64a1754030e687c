//! Saliencia — online activation statistics and information-saliency maps.
//!
//! Two independent numerical primitives for interpretability analysis of
//! neural-network activations:
//!
//! - **[`estimator`]**: a streaming per-unit mean/variance/sparsity estimator
//!   (Welford's online algorithm) over batches of fixed-shape samples.
//! - **[`saliency`]**: a pure conversion from a per-unit information-capacity
//!   tensor (in nats) to a 2-D saliency map in bits per pixel, optionally
//!   resampled to a target resolution with area-preserving rescaling.
//!
//! The two components share no state. A typical pipeline feeds activation
//! batches to a [`WelfordEstimator`] to decide which units are active, masks
//! the capacity tensor accordingly, and reduces it with [`to_saliency_map`].
//!
//! # Example
//!
//! ```
//! use ndarray::{Array2, Array4};
//! use saliencia::{to_saliency_map, DataFormat, WelfordEstimator};
//!
//! // Accumulate statistics over a stream of (batch, C, H, W) activations.
//! let mut estimator = WelfordEstimator::new();
//! let batch = Array4::<f64>::ones((8, 3, 4, 4));
//! estimator.fit(batch.view().into_dyn()).unwrap();
//! assert_eq!(estimator.n_samples(), 8);
//!
//! // Reduce a (C, H, W) capacity tensor into an (H, W) map in bits.
//! let capacity = ndarray::Array3::<f64>::ones((3, 4, 4));
//! let map: Array2<f64> =
//!     to_saliency_map(capacity.view(), None, DataFormat::ChannelFirst).unwrap();
//! assert_eq!(map.dim(), (4, 4));
//! ```
//!
//! This crate intentionally depends only on `ndarray` for numerics; it has no
//! dependency on any machine-learning framework's tensor type.

pub mod estimator;
pub mod saliency;

pub use estimator::{EstimatorError, EstimatorState, WelfordEstimator};
pub use saliency::{to_saliency_map, DataFormat, SaliencyError};
