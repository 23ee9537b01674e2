//! Generic regression implementations.
//!
//! This module provides Runtime-generic implementations of regression analysis.
//! All functions work with any numr backend.
//!
//! # Simple Linear Regression
//!
//! Fits the model y = β₀ + β₁x + ε using **Ordinary Least Squares (OLS)**.
//!
//! ## Formulas
//!
//! ```text
//! β₁ = SS_xy / SS_xx
//! β₀ = ȳ - β₁x̄
//! r  = SS_xy / √(SS_xx · SS_yy)
//! ```
//!
//! where:
//! - SS_xx = Σ(xᵢ - x̄)²
//! - SS_yy = Σ(yᵢ - ȳ)²
//! - SS_xy = Σ(xᵢ - x̄)(yᵢ - ȳ)
//!
//! ## Standard Errors and P-Value
//!
//! With df = n - 2:
//! ```text
//! SE(β₁) = √((1 - r²) · SS_yy / SS_xx / df)
//! SE(β₀) = SE(β₁) · √(SS_xx / n + x̄²)
//! t      = r · √(df / ((1 - r)(1 + r)))
//! ```
//!
//! The p-value tests H₀: β₁ = 0 and is two-sided from Student's t with df = n - 2.
//! With exactly two samples the line passes through both points, so both
//! standard errors are zero and the p-value degenerates to 0 (or 1 when the
//! two y values coincide).

use crate::stats::helpers::extract_scalar;
use crate::stats::{LinregressResult, StatsError, StatsResult, StudentT, validate_stats_dtype};
use numr::ops::TensorOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Keeps the t statistic finite for a perfect fit (|r| = 1).
const TINY: f64 = 1.0e-20;

/// Generic implementation of linear regression.
pub fn linregress_impl<R, C>(
    client: &C,
    x: &Tensor<R>,
    y: &Tensor<R>,
) -> StatsResult<LinregressResult>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    validate_stats_dtype(x.dtype())?;
    validate_stats_dtype(y.dtype())?;

    if x.numel() != y.numel() {
        return Err(StatsError::invalid_input(
            "x/y",
            format!(
                "regression requires equal-length samples, got {} and {}",
                x.numel(),
                y.numel()
            ),
        ));
    }

    let n = x.numel();
    if n < 2 {
        return Err(StatsError::invalid_input(
            "x/y",
            format!("regression requires at least 2 samples, got {}", n),
        ));
    }

    let x_contig = x.contiguous();
    let y_contig = y.contiguous();

    let all_dims: Vec<usize> = (0..x_contig.ndim()).collect();

    let mean_x = extract_scalar(&client.mean(&x_contig, &all_dims, false)?)?;
    let mean_y = extract_scalar(&client.mean(&y_contig, &all_dims, false)?)?;

    // NaN and infinities poison the means, so one check covers every element.
    if !mean_x.is_finite() || !mean_y.is_finite() {
        return Err(StatsError::invalid_input(
            "x/y",
            "regression requires finite sample values",
        ));
    }

    // A constant x leaves rounding residue in the centered sums (0.1 * 3 / 3
    // is not 0.1), so identical values are detected from the range instead.
    let x_min = extract_scalar(&client.min(&x_contig, &all_dims, false)?)?;
    let x_max = extract_scalar(&client.max(&x_contig, &all_dims, false)?)?;
    if x_min == x_max {
        return Err(StatsError::invalid_input("x", "x has zero variance"));
    }

    let mean_x_b = Tensor::<R>::full_scalar(x_contig.shape(), x.dtype(), mean_x, client.device());
    let mean_y_b = Tensor::<R>::full_scalar(y_contig.shape(), y.dtype(), mean_y, client.device());

    let dx = client.sub(&x_contig, &mean_x_b)?;
    let dy = client.sub(&y_contig, &mean_y_b)?;

    let dx_dy = client.mul(&dx, &dy)?;
    let dx_sq = client.mul(&dx, &dx)?;
    let dy_sq = client.mul(&dy, &dy)?;

    let ss_xy = extract_scalar(&client.sum(&dx_dy, &all_dims, false)?)?;
    let ss_xx = extract_scalar(&client.sum(&dx_sq, &all_dims, false)?)?;
    let ss_yy = extract_scalar(&client.sum(&dy_sq, &all_dims, false)?)?;

    if ss_xx == 0.0 {
        return Err(StatsError::invalid_input("x", "x has zero variance"));
    }

    Ok(fit_from_moments(n, mean_x, mean_y, ss_xx, ss_yy, ss_xy))
}

/// Assemble the regression statistics from centered sums of squares.
fn fit_from_moments(
    n: usize,
    mean_x: f64,
    mean_y: f64,
    ss_xx: f64,
    ss_yy: f64,
    ss_xy: f64,
) -> LinregressResult {
    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    let r = if ss_yy == 0.0 {
        0.0
    } else {
        (ss_xy / (ss_xx * ss_yy).sqrt()).clamp(-1.0, 1.0)
    };

    let n_f = n as f64;

    if n == 2 {
        let pvalue = if ss_yy == 0.0 { 1.0 } else { 0.0 };
        return LinregressResult {
            slope,
            intercept,
            rvalue: r,
            pvalue,
            stderr: 0.0,
            intercept_stderr: 0.0,
        };
    }

    let df = n_f - 2.0;
    let t_stat = r * (df / ((1.0 - r + TINY) * (1.0 + r + TINY))).sqrt();
    // df >= 1 here, so the distribution is always constructible.
    let pvalue = StudentT::new(df)
        .map(|t_dist| t_dist.two_sided_pvalue(t_stat))
        .unwrap_or(f64::NAN);

    let stderr = ((1.0 - r * r).max(0.0) * ss_yy / ss_xx / df).sqrt();
    let intercept_stderr = stderr * (ss_xx / n_f + mean_x * mean_x).sqrt();

    LinregressResult {
        slope,
        intercept,
        rvalue: r,
        pvalue,
        stderr,
        intercept_stderr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_from_moments_perfect_line() {
        // x = [1, 2, 3], y = [2, 4, 6]
        let r = fit_from_moments(3, 2.0, 4.0, 2.0, 8.0, 4.0);
        assert!((r.slope - 2.0).abs() < 1e-12);
        assert!(r.intercept.abs() < 1e-12);
        assert!((r.rvalue - 1.0).abs() < 1e-12);
        assert!(r.stderr.abs() < 1e-12);
        assert!(r.pvalue < 1e-6);
    }

    #[test]
    fn test_fit_from_moments_constant_y() {
        let r = fit_from_moments(4, 2.5, 7.0, 5.0, 0.0, 0.0);
        assert_eq!(r.slope, 0.0);
        assert!((r.intercept - 7.0).abs() < 1e-12);
        assert_eq!(r.rvalue, 0.0);
        assert!((r.pvalue - 1.0).abs() < 1e-12);
        assert_eq!(r.stderr, 0.0);
    }

    #[test]
    fn test_fit_from_moments_two_samples() {
        let r = fit_from_moments(2, 1.5, 3.0, 0.5, 2.0, 1.0);
        assert!((r.slope - 2.0).abs() < 1e-12);
        assert_eq!(r.pvalue, 0.0);
        assert_eq!(r.stderr, 0.0);
        assert_eq!(r.intercept_stderr, 0.0);

        let flat = fit_from_moments(2, 1.5, 3.0, 0.5, 0.0, 0.0);
        assert_eq!(flat.pvalue, 1.0);
    }
}
