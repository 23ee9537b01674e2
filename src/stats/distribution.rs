//! Distribution traits.

use crate::stats::error::StatsResult;

/// Moments and location summaries shared by all distributions.
pub trait Distribution {
    /// Mean of the distribution (NaN when undefined).
    fn mean(&self) -> f64;

    /// Variance of the distribution (NaN or infinite when undefined).
    fn var(&self) -> f64;

    /// Standard deviation.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Median of the distribution.
    fn median(&self) -> f64;
}

/// A continuous univariate distribution.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the density.
    fn log_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative distribution function P(X <= x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Percent point function (inverse of the CDF).
    fn ppf(&self, p: f64) -> StatsResult<f64>;
}
