//! Serializable estimator state for checkpointing.

use std::fs;
use std::path::Path;

use ndarray::ArrayD;
use serde::{Deserialize, Serialize};

use super::error::Result;

/// Flat, opaque bundle of a [`WelfordEstimator`](super::WelfordEstimator)'s
/// internal state.
///
/// Field names and array shapes are part of the checkpoint format and must
/// be preserved exactly for round-trip fidelity. The array fields are all
/// absent for an estimator that has seen no samples. The format carries no
/// version field; the restore side trusts the bundle it is handed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorState {
    /// Running per-unit mean, shape = sample shape.
    pub mean: Option<ArrayD<f64>>,
    /// Welford's un-normalized sum of squared deviations.
    pub sum_sq_dev: Option<ArrayD<f64>>,
    /// Number of samples folded in.
    pub n_samples: u64,
    /// Per-unit count of samples with a nonzero activation.
    pub nonzero_count: Option<ArrayD<u64>>,
}

impl EstimatorState {
    /// Serialize this bundle as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a bundle from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write this bundle as JSON to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read a bundle back from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }
}
