//! Types for statistical algorithms.

use crate::stats::error::{StatsError, StatsResult};
use crate::stats::StudentT;
use numr::dtype::DType;
use serde::Serialize;

/// Result of simple linear regression.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinregressResult {
    /// Slope of the regression line
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub rvalue: f64,
    /// Two-sided p-value for hypothesis test (slope = 0)
    pub pvalue: f64,
    /// Standard error of the slope estimate
    pub stderr: f64,
    /// Standard error of the intercept estimate
    pub intercept_stderr: f64,
}

impl LinregressResult {
    /// Coefficient of determination.
    pub fn r_squared(&self) -> f64 {
        self.rvalue * self.rvalue
    }

    /// Value of the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Two-sided confidence interval for the slope of a fit over `n` samples.
    ///
    /// Requires `n > 2` so the t distribution has at least one degree of freedom.
    pub fn slope_confidence_interval(&self, n: usize, confidence: f64) -> StatsResult<(f64, f64)> {
        if n <= 2 {
            return Err(StatsError::invalid_input(
                "n",
                "confidence interval requires more than 2 samples",
            ));
        }
        let t_crit = StudentT::new((n - 2) as f64)?.critical_value(confidence)?;
        let half_width = t_crit * self.stderr;
        Ok((self.slope - half_width, self.slope + half_width))
    }
}

/// Descriptive statistics of a single sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveSummary {
    /// Number of observations
    pub nobs: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Variance with Bessel's correction
    pub variance: f64,
    /// Standard deviation with Bessel's correction
    pub std: f64,
    /// Minimum value
    pub min: f64,
    /// Maximum value
    pub max: f64,
}

/// Validate that dtype is suitable for statistics operations.
pub fn validate_stats_dtype(dtype: DType) -> StatsResult<()> {
    match dtype {
        DType::F32 | DType::F64 => Ok(()),
        _ => Err(StatsError::invalid_input(
            "dtype",
            format!("statistics require F32 or F64, got {:?}", dtype),
        )),
    }
}
