//! FIR Filter Application

use crate::definition::{
    check_filter_definition, compute_filter_length, FilterOptions, FrequencyRange, PassType,
};
use crate::error::FilterError;
use crate::fir::kernel_from_cutoffs;
use crate::properties::check_filter_properties;
use tracing::debug;

/// Output of [`filter_signal`]
#[derive(Debug, Clone)]
pub struct FilteredSignal {
    /// Filtered samples, same length as the input, NaN where the input was NaN
    pub signal: Vec<f64>,
    /// FIR taps used
    pub kernel: Vec<f64>,
}

/// Filter a signal with a designed FIR kernel.
///
/// NaN samples are dropped before filtering and put back at the same
/// positions afterwards. With `remove_edge_artifacts` the first and last
/// `ceil(K / 2)` samples of the filtered defined region are set to NaN.
/// With `verbose` the filter's transition and pass bandwidths are logged.
pub fn filter_signal(
    sig: &[f64],
    fs: f64,
    pass_type: PassType,
    range: &FrequencyRange,
    options: &FilterOptions,
    remove_edge_artifacts: bool,
    verbose: bool,
) -> Result<FilteredSignal, FilterError> {
    if sig.is_empty() {
        return Err(FilterError::EmptySignal);
    }

    let defined: Vec<f64> = sig.iter().copied().filter(|v| !v.is_nan()).collect();

    let cutoffs = check_filter_definition(pass_type, range, fs)?;
    let filter_len = compute_filter_length(fs, pass_type, &cutoffs, options)?;

    // Checked before any allocation sized by the kernel
    if filter_len > defined.len() {
        return Err(FilterError::FilterTooLong {
            filter_len,
            signal_len: defined.len(),
        });
    }

    let kernel = kernel_from_cutoffs(fs, pass_type, &cutoffs, filter_len);
    check_filter_properties(&kernel, fs, pass_type, &cutoffs, verbose);

    let mut filtered = apply_fir_filter(&defined, &kernel);
    if remove_edge_artifacts {
        remove_filter_edges(&mut filtered, kernel.len());
    }

    debug!(
        "Filtered {} samples ({} defined) with {}-tap {} kernel",
        sig.len(),
        defined.len(),
        kernel.len(),
        pass_type
    );

    Ok(FilteredSignal {
        signal: restore_nans(sig, filtered),
        kernel,
    })
}

/// Convolve `sig` with `kernel`, keeping the centred `sig.len()` samples
pub fn apply_fir_filter(sig: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = sig.len();
    let k = kernel.len();
    if n == 0 || k == 0 {
        return vec![0.0; n];
    }

    let offset = (k.min(n) - 1) / 2;
    (0..n)
        .map(|i| {
            let full = i + offset;
            let first = full.saturating_sub(n - 1);
            let last = full.min(k - 1);
            (first..=last).map(|j| kernel[j] * sig[full - j]).sum()
        })
        .collect()
}

/// Set the samples within half a kernel of either edge to NaN
pub fn remove_filter_edges(sig: &mut [f64], filter_len: usize) {
    let n_rmv = filter_len.div_ceil(2).min(sig.len());
    let len = sig.len();
    sig[..n_rmv].fill(f64::NAN);
    sig[len - n_rmv..].fill(f64::NAN);
}

/// Scatter `values` back into the non-NaN positions of `template`
fn restore_nans(template: &[f64], values: Vec<f64>) -> Vec<f64> {
    let mut values = values.into_iter();
    template
        .iter()
        .map(|v| {
            if v.is_nan() {
                f64::NAN
            } else {
                values.next().unwrap_or(f64::NAN)
            }
        })
        .collect()
}
