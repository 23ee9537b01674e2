//! Descriptive statistics algorithms.

use crate::stats::{DescriptiveSummary, StatsResult};
use numr::ops::TensorOps;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Descriptive statistics algorithms for tensors.
pub trait DescriptiveStatisticsAlgorithms<R: Runtime>: TensorOps<R> {
    /// Summarize a 1D tensor: count, mean, sample variance, std, min and max.
    fn describe(&self, x: &Tensor<R>) -> StatsResult<DescriptiveSummary>;
}
