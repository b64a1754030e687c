//! Property-based tests for the online moment estimator.

use ndarray::Array2;
use proptest::prelude::*;

use super::WelfordEstimator;

const UNITS: usize = 3;

fn fit_rows(est: &mut WelfordEstimator, rows: &[Vec<f64>]) {
    if rows.is_empty() {
        return;
    }
    let flat: Vec<f64> = rows.iter().flatten().copied().collect();
    let batch = Array2::from_shape_vec((rows.len(), UNITS), flat).unwrap();
    est.fit(batch.view().into_dyn()).unwrap();
}

proptest! {
    /// Feeding a stream in one batch or split at an arbitrary point yields
    /// the exact same accumulator state: the recurrence folds samples one
    /// at a time either way.
    #[test]
    fn batch_split_invariance(
        rows in prop::collection::vec(
            prop::collection::vec(-1e3f64..1e3, UNITS),
            2..40,
        ),
        split_frac in 0.0f64..1.0,
    ) {
        let split = ((rows.len() as f64) * split_frac) as usize;

        let mut whole = WelfordEstimator::new();
        fit_rows(&mut whole, &rows);

        let mut parts = WelfordEstimator::new();
        fit_rows(&mut parts, &rows[..split]);
        fit_rows(&mut parts, &rows[split..]);

        let a = whole.state_dict();
        let b = parts.state_dict();
        prop_assert_eq!(a.n_samples, b.n_samples);
        prop_assert_eq!(a.mean, b.mean);
        prop_assert_eq!(a.sum_sq_dev, b.sum_sq_dev);
        prop_assert_eq!(a.nonzero_count, b.nonzero_count);
    }

    /// The running mean agrees with the naive two-pass mean.
    #[test]
    fn mean_matches_two_pass(
        rows in prop::collection::vec(
            prop::collection::vec(-1e3f64..1e3, UNITS),
            2..40,
        ),
    ) {
        let mut est = WelfordEstimator::new();
        fit_rows(&mut est, &rows);

        let n = rows.len() as f64;
        let mean = est.mean().unwrap();
        for unit in 0..UNITS {
            let expected: f64 = rows.iter().map(|r| r[unit]).sum::<f64>() / n;
            prop_assert!((mean[[unit]] - expected).abs() <= 1e-9 * (1.0 + expected.abs()));
        }
    }

    /// The variance accumulator is never negative, whatever the stream.
    #[test]
    fn sum_sq_dev_is_nonnegative(
        rows in prop::collection::vec(
            prop::collection::vec(-1e3f64..1e3, UNITS),
            1..40,
        ),
    ) {
        let mut est = WelfordEstimator::new();
        fit_rows(&mut est, &rows);
        for &s in est.state_dict().sum_sq_dev.unwrap().iter() {
            prop_assert!(s >= 0.0);
        }
    }
}
