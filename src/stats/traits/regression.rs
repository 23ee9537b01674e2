//! Regression analysis algorithms.

use crate::stats::{LinregressResult, StatsResult};
use numr::ops::TensorOps;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Regression analysis algorithms for tensors.
///
/// Provides methods for fitting regression models to tensor data.
pub trait RegressionAlgorithms<R: Runtime>: TensorOps<R> {
    /// Simple linear regression.
    ///
    /// Fits y = slope * x + intercept using ordinary least squares.
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidInput`](crate::stats::StatsError::InvalidInput)
    /// when `x` and `y` differ in length, hold fewer than 2 samples, contain
    /// non-finite values, or when `x` has zero variance.
    fn linregress(&self, x: &Tensor<R>, y: &Tensor<R>) -> StatsResult<LinregressResult>;
}
