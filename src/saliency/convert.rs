//! Capacity tensor reduction: nats per unit to bits per pixel.

use std::f64::consts::LN_2;
use std::fmt;
use std::str::FromStr;

use ndarray::{Array2, ArrayView1, ArrayView3, Axis};
use serde::{Deserialize, Serialize};

use super::error::{Result, SaliencyError};
use super::resample::resize_bilinear;

/// Memory layout of a capacity tensor; selects the channel axis to reduce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataFormat {
    /// `(C, H, W)` layout — the channel axis comes first ("NCHW").
    ChannelFirst,
    /// `(H, W, C)` layout — the channel axis comes last ("NHWC").
    ChannelLast,
}

impl DataFormat {
    fn channel_axis(self) -> Axis {
        match self {
            DataFormat::ChannelFirst => Axis(0),
            DataFormat::ChannelLast => Axis(2),
        }
    }
}

impl FromStr for DataFormat {
    type Err = SaliencyError;

    /// Parse the layout names used by the common tensor frameworks.
    /// Anything other than `"NCHW"` or `"NHWC"` is a configuration error.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NCHW" => Ok(DataFormat::ChannelFirst),
            "NHWC" => Ok(DataFormat::ChannelLast),
            other => Err(SaliencyError::UnsupportedDataFormat(other.to_string())),
        }
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFormat::ChannelFirst => write!(f, "NCHW"),
            DataFormat::ChannelLast => write!(f, "NHWC"),
        }
    }
}

/// NaN-skipping sum over one channel lane. NaNs contribute zero; a lane
/// with no finite entry at all yields NaN for that spatial position.
fn nan_skipping_sum(lane: ArrayView1<'_, f64>) -> f64 {
    let mut sum = 0.0;
    let mut all_nan = true;
    for &v in lane {
        if !v.is_nan() {
            sum += v;
            all_nan = false;
        }
    }
    if all_nan {
        f64::NAN
    } else {
        sum
    }
}

/// Convert a per-unit capacity tensor (in nats) into a 2-D saliency map
/// (in bits), optionally resampled to `shape = (height, width)`.
///
/// The channel axis selected by `data_format` is reduced with a
/// NaN-skipping sum, the result is divided by `ln 2` to convert nats to
/// bits, and — when a target shape is given — every value is rescaled by
/// the pixel-area ratio before bilinear resampling, so the total
/// information content (sum over pixels) is preserved. Values are never
/// renormalized or clipped.
///
/// The input is not mutated; the returned map is freshly allocated.
///
/// # Errors
///
/// [`SaliencyError::InvalidTargetShape`] if either target dimension is
/// zero. The check runs before any computation.
pub fn to_saliency_map(
    capacity: ArrayView3<'_, f64>,
    shape: Option<(usize, usize)>,
    data_format: DataFormat,
) -> Result<Array2<f64>> {
    if let Some((height, width)) = shape {
        if height == 0 || width == 0 {
            return Err(SaliencyError::InvalidTargetShape { height, width });
        }
    }

    let mut map = capacity.map_axis(data_format.channel_axis(), nan_skipping_sum);
    // nats -> bits
    map.mapv_inplace(|v| v / LN_2);

    match shape {
        None => Ok(map),
        Some((height, width)) => {
            let (ho, wo) = map.dim();
            // Redistribute bits/pixel over the new pixel count so the sum
            // over the map stays invariant under resampling.
            let area_ratio = (ho * wo) as f64 / (height * width) as f64;
            map.mapv_inplace(|v| v * area_ratio);
            Ok(resize_bilinear(map.view(), height, width))
        }
    }
}
