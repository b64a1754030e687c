//! Bilinear resampling of 2-D maps.

use ndarray::{Array2, ArrayView2};

/// Resample `input` to `(height, width)` with bilinear interpolation.
///
/// Output pixel centers map to input coordinates with the half-pixel
/// convention, clamped at the edges, so constant maps stay constant and no
/// out-of-range values are invented. NaNs in the input propagate into every
/// output pixel whose interpolation stencil touches them.
///
/// An empty input produces an all-NaN output: there is no value to
/// interpolate from.
pub fn resize_bilinear(input: ArrayView2<'_, f64>, height: usize, width: usize) -> Array2<f64> {
    let (in_h, in_w) = input.dim();
    if in_h == 0 || in_w == 0 {
        return Array2::from_elem((height, width), f64::NAN);
    }

    let scale_y = in_h as f64 / height as f64;
    let scale_x = in_w as f64 / width as f64;

    Array2::from_shape_fn((height, width), |(y, x)| {
        let src_y = ((y as f64 + 0.5) * scale_y - 0.5).clamp(0.0, (in_h - 1) as f64);
        let src_x = ((x as f64 + 0.5) * scale_x - 0.5).clamp(0.0, (in_w - 1) as f64);

        let y0 = src_y.floor() as usize;
        let x0 = src_x.floor() as usize;
        let y1 = (y0 + 1).min(in_h - 1);
        let x1 = (x0 + 1).min(in_w - 1);
        let fy = src_y - y0 as f64;
        let fx = src_x - x0 as f64;

        let top = input[[y0, x0]] * (1.0 - fx) + input[[y0, x1]] * fx;
        let bottom = input[[y1, x0]] * (1.0 - fx) + input[[y1, x1]] * fx;
        top * (1.0 - fy) + bottom * fy
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn identity_resize_is_exact() {
        let input = array![[1.0, 2.0], [3.0, 4.0]];
        let out = resize_bilinear(input.view(), 2, 2);
        assert_eq!(out, input);
    }

    #[test]
    fn constant_map_stays_constant() {
        let input = Array2::from_elem((3, 5), 7.25);
        let out = resize_bilinear(input.view(), 9, 2);
        for &v in &out {
            assert_abs_diff_eq!(v, 7.25, epsilon = 1e-12);
        }
    }

    #[test]
    fn upsample_interpolates_between_neighbors() {
        let input = array![[0.0, 1.0]];
        let out = resize_bilinear(input.view(), 1, 4);
        // Half-pixel centers: 0.25 and 0.75 land between the two inputs.
        assert_abs_diff_eq!(out[[0, 0]], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(out[[0, 1]], 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(out[[0, 2]], 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(out[[0, 3]], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn nan_propagates_through_stencil() {
        let input = array![[f64::NAN, 1.0], [1.0, 1.0]];
        let out = resize_bilinear(input.view(), 4, 4);
        assert!(out[[0, 0]].is_nan());
        // The far corner never touches the NaN input pixel.
        assert_abs_diff_eq!(out[[3, 3]], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_input_yields_nan() {
        let input = Array2::<f64>::zeros((0, 3));
        let out = resize_bilinear(input.view(), 2, 2);
        assert!(out.iter().all(|v| v.is_nan()));
    }
}
