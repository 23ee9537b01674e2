//! Slice-based entry points.
//!
//! These wrap the tensor traits for callers holding plain `f64` samples,
//! running them on the CPU backend.

use crate::stats::helpers::cpu_vector;
use crate::stats::{
    DescriptiveStatisticsAlgorithms, DescriptiveSummary, LinregressResult, RegressionAlgorithms,
    StatsError, StatsResult,
};
use numr::runtime::cpu::{CpuClient, CpuDevice};

/// Least-squares fit of `ys` against `xs`.
///
/// # Errors
///
/// Returns [`StatsError::InvalidInput`] when the slices differ in length, hold
/// fewer than two samples, contain NaN or infinite values, or when every `x`
/// is identical.
pub fn regress(xs: &[f64], ys: &[f64]) -> StatsResult<LinregressResult> {
    if xs.len() != ys.len() {
        return Err(StatsError::invalid_input(
            "x/y",
            format!(
                "regression requires equal-length samples, got {} and {}",
                xs.len(),
                ys.len()
            ),
        ));
    }
    if xs.len() < 2 {
        return Err(StatsError::invalid_input(
            "x/y",
            format!("regression requires at least 2 samples, got {}", xs.len()),
        ));
    }
    if let Some(v) = xs.iter().chain(ys).find(|v| !v.is_finite()) {
        return Err(StatsError::invalid_input(
            "x/y",
            format!("regression requires finite sample values, found {}", v),
        ));
    }

    if xs.iter().all(|&x| x == xs[0]) {
        return Err(StatsError::invalid_input("x", "x has zero variance"));
    }

    let device = CpuDevice::new();
    let client = CpuClient::new(device.clone());
    client.linregress(&cpu_vector(xs, &device), &cpu_vector(ys, &device))
}

/// Descriptive summary of `values`.
pub fn describe(values: &[f64]) -> StatsResult<DescriptiveSummary> {
    if values.is_empty() {
        return Err(StatsError::invalid_input(
            "x",
            "cannot compute statistics on empty sample",
        ));
    }
    let device = CpuDevice::new();
    let client = CpuClient::new(device.clone());
    client.describe(&cpu_vector(values, &device))
}
