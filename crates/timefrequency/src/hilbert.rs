//! Analytic Signal via FFT
//!
//! The analytic signal `a(t) = x(t) + i·H[x(t)]` is computed in the frequency
//! domain: keep DC (and Nyquist for even lengths), double the positive
//! frequencies, zero the negative ones, transform back.
//!
//! Transforms go through [`HilbertBackend`] so callers can swap the FFT
//! implementation or substitute a test double.

use crate::error::TimeFrequencyError;
use rustfft::{num_complex::Complex, FftPlanner};
use tracing::debug;

/// Complex sample type used for analytic signals
pub type Complex64 = Complex<f64>;

/// Computes analytic signals of real sequences
pub trait HilbertBackend {
    /// Analytic signal of `samples` zero-padded (or truncated) to `n` points.
    ///
    /// Returns exactly `n` values.
    fn analytic(&self, samples: &[f64], n: usize) -> Vec<Complex64>;
}

impl<B: HilbertBackend + ?Sized> HilbertBackend for &B {
    fn analytic(&self, samples: &[f64], n: usize) -> Vec<Complex64> {
        (**self).analytic(samples, n)
    }
}

/// Default backend built on `rustfft`
#[derive(Debug, Clone, Copy, Default)]
pub struct RustFftHilbert;

impl HilbertBackend for RustFftHilbert {
    fn analytic(&self, samples: &[f64], n: usize) -> Vec<Complex64> {
        if n == 0 {
            return Vec::new();
        }

        let mut buffer: Vec<Complex64> = samples
            .iter()
            .take(n)
            .map(|&x| Complex::new(x, 0.0))
            .collect();
        buffer.resize(n, Complex::new(0.0, 0.0));

        let mut planner = FftPlanner::<f64>::new();
        let forward = planner.plan_fft_forward(n);
        let inverse = planner.plan_fft_inverse(n);

        forward.process(&mut buffer);

        // Bins 1..ceil(n/2) are strictly positive frequencies; for even n the
        // Nyquist bin n/2 is shared and stays as is
        for bin in buffer.iter_mut().take(n.div_ceil(2)).skip(1) {
            *bin *= 2.0;
        }
        for bin in buffer.iter_mut().skip(n / 2 + 1) {
            *bin = Complex::new(0.0, 0.0);
        }

        inverse.process(&mut buffer);

        let scale = 1.0 / n as f64;
        for value in buffer.iter_mut() {
            *value *= scale;
        }

        buffer
    }
}

/// Smallest power of two strictly greater than `len`
pub fn padded_length(len: usize) -> usize {
    (len + 1).next_power_of_two()
}

/// Analytic signal of a sequence with NaN padding at either end.
///
/// The transform runs on the span between the first and last defined
/// samples; positions outside that span come back as NaN. With
/// `increase_n` the span is zero-padded to the next power of two above its
/// length and the result truncated back, trading a small approximation for
/// avoiding slow transform lengths.
pub fn hilbert_ignore_nan<B: HilbertBackend + ?Sized>(
    backend: &B,
    sig: &[f64],
    increase_n: bool,
) -> Result<Vec<Complex64>, TimeFrequencyError> {
    let first = sig
        .iter()
        .position(|v| !v.is_nan())
        .ok_or(TimeFrequencyError::NoValidSamples)?;
    let last = sig
        .iter()
        .rposition(|v| !v.is_nan())
        .map(|i| i + 1)
        .ok_or(TimeFrequencyError::NoValidSamples)?;

    let valid = &sig[first..last];
    let len = valid.len();

    let transformed = if increase_n {
        let n = padded_length(len);
        debug!("Hilbert transform of {} samples padded to {}", len, n);
        let mut padded = backend.analytic(valid, n);
        padded.truncate(len);
        padded
    } else {
        backend.analytic(valid, len)
    };

    let mut output = vec![Complex::new(f64::NAN, f64::NAN); sig.len()];
    output[first..last].copy_from_slice(&transformed);
    Ok(output)
}
