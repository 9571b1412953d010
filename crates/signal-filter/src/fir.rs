//! Windowed-sinc FIR Design

use crate::definition::{
    check_filter_definition, compute_filter_length, compute_nyquist, FilterOptions,
    FrequencyRange, PassType,
};
use crate::error::FilterError;
use std::f64::consts::PI;
use tracing::debug;

/// Symmetric Hamming window of `len` points
pub fn hamming(len: usize) -> Vec<f64> {
    match len {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let denom = (len - 1) as f64;
            (0..len)
                .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / denom).cos())
                .collect()
        }
    }
}

/// Normalized sinc, `sin(pi x) / (pi x)`
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Hamming-windowed sinc kernel.
///
/// `cutoffs` are ascending fractions of the Nyquist rate in `(0, 1)`. With
/// `pass_zero` the first band starts at DC. The kernel is scaled to unit gain
/// at the centre of its first pass band.
pub fn firwin(numtaps: usize, cutoffs: &[f64], pass_zero: bool) -> Vec<f64> {
    if numtaps == 0 {
        return Vec::new();
    }

    let mut edges = Vec::with_capacity(cutoffs.len() + 2);
    if pass_zero {
        edges.push(0.0);
    }
    edges.extend_from_slice(cutoffs);
    // Odd edge count means the last band runs up to Nyquist
    if edges.len() % 2 == 1 {
        edges.push(1.0);
    }

    let alpha = 0.5 * (numtaps - 1) as f64;
    let offsets: Vec<f64> = (0..numtaps).map(|i| i as f64 - alpha).collect();

    let mut taps = vec![0.0; numtaps];
    for band in edges.chunks_exact(2) {
        let (left, right) = (band[0], band[1]);
        for (tap, &m) in taps.iter_mut().zip(&offsets) {
            *tap += right * sinc(right * m) - left * sinc(left * m);
        }
    }

    for (tap, w) in taps.iter_mut().zip(hamming(numtaps)) {
        *tap *= w;
    }

    let (left, right) = (edges[0], edges[1]);
    let scale_frequency = if left == 0.0 {
        0.0
    } else if right == 1.0 {
        1.0
    } else {
        0.5 * (left + right)
    };
    let gain: f64 = taps
        .iter()
        .zip(&offsets)
        .map(|(tap, &m)| tap * (PI * m * scale_frequency).cos())
        .sum();
    if gain != 0.0 {
        for tap in taps.iter_mut() {
            *tap /= gain;
        }
    }

    taps
}

/// Design an FIR kernel for a pass type and frequency range
pub fn design_fir_filter(
    fs: f64,
    pass_type: PassType,
    range: &FrequencyRange,
    options: &FilterOptions,
) -> Result<Vec<f64>, FilterError> {
    let cutoffs = check_filter_definition(pass_type, range, fs)?;
    let filter_len = compute_filter_length(fs, pass_type, &cutoffs, options)?;
    Ok(kernel_from_cutoffs(fs, pass_type, &cutoffs, filter_len))
}

/// Build a `filter_len`-tap kernel from cutoffs (Hz) that already passed
/// [`check_filter_definition`]
pub(crate) fn kernel_from_cutoffs(
    fs: f64,
    pass_type: PassType,
    cutoffs: &[f64],
    filter_len: usize,
) -> Vec<f64> {
    let nyquist = compute_nyquist(fs);
    let normalized: Vec<f64> = cutoffs.iter().map(|c| c / nyquist).collect();

    debug!(
        "Designing {} FIR filter: cutoffs={:?} Hz, taps={}",
        pass_type, cutoffs, filter_len
    );

    firwin(filter_len, &normalized, pass_type.passes_zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gain_at(kernel: &[f64], normalized_freq: f64) -> f64 {
        // Magnitude of the DTFT at a fraction of Nyquist
        let (re, im) = kernel.iter().enumerate().fold((0.0, 0.0), |(re, im), (k, &h)| {
            let w = PI * normalized_freq * k as f64;
            (re + h * w.cos(), im - h * w.sin())
        });
        (re * re + im * im).sqrt()
    }

    #[test]
    fn test_hamming_shape() {
        let w = hamming(5);
        assert!((w[0] - 0.08).abs() < 1e-12);
        assert!((w[2] - 1.0).abs() < 1e-12);
        assert!((w[4] - 0.08).abs() < 1e-12);
        assert_eq!(hamming(1), vec![1.0]);
    }

    #[test]
    fn test_lowpass_unit_dc_gain() {
        let kernel = firwin(51, &[0.2], true);
        let dc: f64 = kernel.iter().sum();
        assert!((dc - 1.0).abs() < 1e-12);
        assert!(gain_at(&kernel, 0.8) < 0.01);
    }

    #[test]
    fn test_highpass_unit_nyquist_gain() {
        let kernel = firwin(51, &[0.2], false);
        assert!((gain_at(&kernel, 1.0) - 1.0).abs() < 1e-9);
        assert!(gain_at(&kernel, 0.0) < 0.01);
    }

    #[test]
    fn test_kernel_symmetric() {
        let kernel = firwin(101, &[0.1, 0.3], false);
        for i in 0..kernel.len() / 2 {
            assert!((kernel[i] - kernel[kernel.len() - 1 - i]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_design_bandpass() {
        let kernel = design_fir_filter(
            500.0,
            PassType::Bandpass,
            &FrequencyRange::band(8.0, 12.0),
            &FilterOptions::default(),
        )
        .unwrap();
        assert_eq!(kernel.len(), 189);
        // Unit gain at the band centre, strong rejection at DC and 40 Hz
        assert!((gain_at(&kernel, 10.0 / 250.0) - 1.0).abs() < 1e-9);
        assert!(gain_at(&kernel, 0.0) < 0.05);
        assert!(gain_at(&kernel, 40.0 / 250.0) < 0.05);
    }

    #[test]
    fn test_design_bandstop_passes_dc() {
        let kernel = design_fir_filter(
            500.0,
            PassType::Bandstop,
            &FrequencyRange::band(40.0, 80.0),
            &FilterOptions {
                n_cycles: None,
                n_seconds: Some(0.5),
            },
        )
        .unwrap();
        assert_eq!(kernel.len(), 251);
        let dc: f64 = kernel.iter().sum();
        assert!((dc - 1.0).abs() < 1e-9);
        assert!(gain_at(&kernel, 60.0 / 250.0) < 0.01);
    }

    #[test]
    fn test_design_rejects_bad_definition() {
        let err = design_fir_filter(
            500.0,
            PassType::Lowpass,
            &FrequencyRange::highpass(10.0),
            &FilterOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, FilterError::MissingCutoff { .. }));
    }
}
