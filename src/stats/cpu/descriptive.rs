//! CPU implementation of descriptive statistics algorithms.

use crate::stats::impl_generic::describe_impl;
use crate::stats::traits::DescriptiveStatisticsAlgorithms;
use crate::stats::{DescriptiveSummary, StatsResult};
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl DescriptiveStatisticsAlgorithms<CpuRuntime> for CpuClient {
    fn describe(&self, x: &Tensor<CpuRuntime>) -> StatsResult<DescriptiveSummary> {
        describe_impl(self, x)
    }
}
