//! CPU implementation of regression analysis algorithms.

use crate::stats::impl_generic::linregress_impl;
use crate::stats::traits::RegressionAlgorithms;
use crate::stats::{LinregressResult, StatsResult};
use numr::runtime::cpu::{CpuClient, CpuRuntime};
use numr::tensor::Tensor;

impl RegressionAlgorithms<CpuRuntime> for CpuClient {
    fn linregress(
        &self,
        x: &Tensor<CpuRuntime>,
        y: &Tensor<CpuRuntime>,
    ) -> StatsResult<LinregressResult> {
        linregress_impl(self, x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use numr::runtime::cpu::CpuDevice;

    fn setup() -> (CpuClient, CpuDevice) {
        let device = CpuDevice::new();
        let client = CpuClient::new(device.clone());
        (client, device)
    }

    #[test]
    fn test_linregress() {
        let (client, device) = setup();
        let x = Tensor::<CpuRuntime>::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0], &[5], &device);
        let y = Tensor::<CpuRuntime>::from_slice(&[2.0f64, 4.0, 6.0, 8.0, 10.0], &[5], &device);

        let result = client.linregress(&x, &y).unwrap();

        // Perfect linear relationship: y = 2x
        assert!((result.slope - 2.0).abs() < 1e-10);
        assert!((result.intercept - 0.0).abs() < 1e-10);
        assert!((result.rvalue - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_linregress_f32() {
        let (client, device) = setup();
        let x = Tensor::<CpuRuntime>::from_slice(&[0.0f32, 1.0, 2.0, 3.0], &[4], &device);
        let y = Tensor::<CpuRuntime>::from_slice(&[1.0f32, 3.0, 5.0, 7.0], &[4], &device);

        let result = client.linregress(&x, &y).unwrap();
        assert!((result.slope - 2.0).abs() < 1e-5);
        assert!((result.intercept - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_linregress_rejects_integer_tensors() {
        let (client, device) = setup();
        let x = Tensor::<CpuRuntime>::from_slice(&[1i64, 2, 3], &[3], &device);
        let y = Tensor::<CpuRuntime>::from_slice(&[2i64, 4, 6], &[3], &device);

        let err = client.linregress(&x, &y).unwrap_err();
        assert!(err.is_invalid_input());
    }
}
