//! Edge Artifact Masking

use rustfft::num_complex::Complex;

/// Sample types with an "undefined" value
pub trait Undefined: Copy {
    /// The undefined value (NaN)
    fn undefined() -> Self;
}

impl Undefined for f64 {
    fn undefined() -> Self {
        f64::NAN
    }
}

impl Undefined for Complex<f64> {
    fn undefined() -> Self {
        Complex::new(f64::NAN, f64::NAN)
    }
}

/// Samples lost at each end to a kernel of `kernel_len` taps
pub fn edge_length(kernel_len: usize) -> usize {
    kernel_len.div_ceil(2)
}

/// Mark the first and last `ceil(kernel_len / 2)` samples as undefined.
///
/// Kernels long relative to the series may mask all of it.
pub fn remove_edges<T: Undefined>(series: &mut [T], kernel_len: usize) {
    let len = series.len();
    let n_rmv = edge_length(kernel_len).min(len);
    series[..n_rmv].fill(T::undefined());
    series[len - n_rmv..].fill(T::undefined());
}
