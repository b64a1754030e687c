//! Streaming mean/variance/sparsity estimator (Welford's algorithm).

use ndarray::{ArrayD, ArrayViewD, Axis, IxDyn, Zip};

use super::error::{EstimatorError, Result};
use super::state::EstimatorState;

/// Default fraction of nonzero samples above which a unit counts as active.
pub const DEFAULT_ACTIVE_THRESHOLD: f64 = 0.01;

/// The per-unit accumulators. All three arrays share the sample shape and
/// initialize together on the first non-empty batch.
#[derive(Debug, Clone)]
struct Accumulators {
    /// Running mean per unit.
    mean: ArrayD<f64>,
    /// Welford's running sum of squared deviations (un-normalized).
    sum_sq_dev: ArrayD<f64>,
    /// Number of samples in which each unit was nonzero.
    nonzero_count: ArrayD<u64>,
}

impl Accumulators {
    fn zeros(shape: &[usize]) -> Self {
        Self {
            mean: ArrayD::zeros(IxDyn(shape)),
            sum_sq_dev: ArrayD::zeros(IxDyn(shape)),
            nonzero_count: ArrayD::zeros(IxDyn(shape)),
        }
    }
}

/// Online estimator of per-unit mean, standard deviation, and activation
/// sparsity over a stream of batched samples.
///
/// Uses Welford's algorithm for numerically stable one-pass variance
/// estimation; no past samples are stored. The per-sample feature shape is
/// fixed by the first batch and enforced on every later one.
///
/// Concurrent ingestion is deliberately unsupported: the update is a strict
/// read-modify-write sequence, which `fit(&mut self)` encodes in the type.
#[derive(Debug, Clone, Default)]
pub struct WelfordEstimator {
    acc: Option<Accumulators>,
    n_samples: u64,
}

impl WelfordEstimator {
    /// Create an empty estimator. The sample shape is established by the
    /// first call to [`fit`](Self::fit).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a batch of samples into the running statistics.
    ///
    /// `batch` carries a leading batch axis; each sample's remaining shape
    /// must equal the shape established by the first non-empty batch.
    /// Samples are processed strictly in arrival order, one at a time —
    /// the Welford recurrence is numerically order-sensitive and must not
    /// be vectorized across the batch axis.
    ///
    /// # Errors
    ///
    /// - [`EstimatorError::MissingBatchAxis`] for a 0-dimensional input.
    /// - [`EstimatorError::ShapeMismatch`] if the per-sample shape disagrees
    ///   with the established shape. No partial update is applied.
    pub fn fit(&mut self, batch: ArrayViewD<'_, f64>) -> Result<()> {
        if batch.ndim() == 0 {
            return Err(EstimatorError::MissingBatchAxis);
        }
        let sample_shape = &batch.shape()[1..];

        if let Some(acc) = &self.acc {
            if acc.mean.shape() != sample_shape {
                return Err(EstimatorError::ShapeMismatch {
                    expected: acc.mean.shape().to_vec(),
                    got: sample_shape.to_vec(),
                });
            }
        } else if batch.len_of(Axis(0)) == 0 {
            // Nothing to fold in; keep the shape unestablished so that
            // `shape().is_none() == (n_samples() == 0)` continues to hold.
            return Ok(());
        }

        let acc = self.acc.get_or_insert_with(|| Accumulators::zeros(sample_shape));

        for sample in batch.outer_iter() {
            let n_next = (self.n_samples + 1) as f64;
            Zip::from(&mut acc.mean)
                .and(&mut acc.sum_sq_dev)
                .and(&mut acc.nonzero_count)
                .and(&sample)
                .for_each(|mean, sum_sq_dev, nonzero, &x| {
                    if x != 0.0 {
                        *nonzero += 1;
                    }
                    let old_mean = *mean;
                    // Welford: new mean first, then the cross term pairs the
                    // updated mean with the pre-update one.
                    *mean = old_mean + (x - old_mean) / n_next;
                    *sum_sq_dev += (x - *mean) * (x - old_mean);
                });
            self.n_samples += 1;
        }
        Ok(())
    }

    /// Number of individual samples folded in so far (a batch of size B
    /// contributes B).
    pub fn n_samples(&self) -> u64 {
        self.n_samples
    }

    /// The established per-sample feature shape, or `None` before any sample.
    pub fn shape(&self) -> Option<&[usize]> {
        self.acc.as_ref().map(|acc| acc.mean.shape())
    }

    /// Whether any samples have been folded in.
    pub fn is_empty(&self) -> bool {
        self.n_samples == 0
    }

    /// Read-only view of the running per-unit mean, or `None` before any
    /// sample.
    pub fn mean(&self) -> Option<ArrayViewD<'_, f64>> {
        self.acc.as_ref().map(|acc| acc.mean.view())
    }

    /// Per-unit sample standard deviation, `sqrt(sum_sq_dev / (n - 1))`.
    ///
    /// Returns `None` before any sample. With exactly one sample the
    /// division by `n - 1 == 0` yields non-finite values; callers that need
    /// well-defined statistics must feed at least two samples first.
    pub fn std(&self) -> Option<ArrayD<f64>> {
        let acc = self.acc.as_ref()?;
        let denom = self.n_samples as f64 - 1.0;
        Some(acc.sum_sq_dev.mapv(|s| (s / denom).sqrt()))
    }

    /// Mask of active units at the default threshold
    /// [`DEFAULT_ACTIVE_THRESHOLD`].
    pub fn active_neurons(&self) -> Option<ArrayD<bool>> {
        self.active_neurons_with_threshold(DEFAULT_ACTIVE_THRESHOLD)
    }

    /// Mask of units whose nonzero fraction exceeds `threshold`.
    ///
    /// A unit is active when `nonzero_count / n_samples > threshold`.
    /// Returns `None` before any sample.
    pub fn active_neurons_with_threshold(&self, threshold: f64) -> Option<ArrayD<bool>> {
        let acc = self.acc.as_ref()?;
        let n = self.n_samples as f64;
        Some(acc.nonzero_count.mapv(|count| count as f64 / n > threshold))
    }

    /// Export the full internal state as an [`EstimatorState`] bundle.
    pub fn state_dict(&self) -> EstimatorState {
        match &self.acc {
            Some(acc) => EstimatorState {
                mean: Some(acc.mean.clone()),
                sum_sq_dev: Some(acc.sum_sq_dev.clone()),
                n_samples: self.n_samples,
                nonzero_count: Some(acc.nonzero_count.clone()),
            },
            None => EstimatorState {
                mean: None,
                sum_sq_dev: None,
                n_samples: self.n_samples,
                nonzero_count: None,
            },
        }
    }

    /// Replace the estimator's state wholesale with a previously exported
    /// bundle. No merging takes place.
    ///
    /// # Errors
    ///
    /// [`EstimatorError::InconsistentState`] if the bundle's optional arrays
    /// are only partially present.
    pub fn load_state_dict(&mut self, state: EstimatorState) -> Result<()> {
        match (state.mean, state.sum_sq_dev, state.nonzero_count) {
            (Some(mean), Some(sum_sq_dev), Some(nonzero_count)) => {
                self.acc = Some(Accumulators { mean, sum_sq_dev, nonzero_count });
                self.n_samples = state.n_samples;
                Ok(())
            }
            (None, None, None) => {
                self.acc = None;
                self.n_samples = state.n_samples;
                Ok(())
            }
            _ => Err(EstimatorError::InconsistentState),
        }
    }
}
