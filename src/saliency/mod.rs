//! Capacity-to-saliency conversion.
//!
//! Reduces a per-unit information-capacity tensor (in nats) along its channel
//! axis into a 2-D spatial map in bits, optionally resampled to a target
//! resolution with area-preserving rescaling. Pure functions throughout: the
//! input tensor is never mutated and every call allocates a fresh map.

mod convert;
mod error;
mod resample;


pub use convert::{to_saliency_map, DataFormat};
pub use error::{Result, SaliencyError};
pub use resample::resize_bilinear;
