//! Generic helper functions for statistics implementations.

use numr::dtype::DType;
use numr::error::{Error, Result};
use numr::runtime::Runtime;
use numr::runtime::cpu::{CpuDevice, CpuRuntime};
use numr::tensor::Tensor;

/// Extract a scalar f64 from a 0-D or 1-element tensor.
///
/// Works with any Runtime backend.
pub fn extract_scalar<R: Runtime>(t: &Tensor<R>) -> Result<f64> {
    if t.numel() != 1 {
        return Err(Error::InvalidArgument {
            arg: "tensor",
            reason: format!("expected scalar (1 element), got {} elements", t.numel()),
        });
    }

    let t = t.contiguous();
    match t.dtype() {
        DType::F32 => {
            let data: Vec<f32> = t.to_vec();
            Ok(data[0] as f64)
        }
        DType::F64 => {
            let data: Vec<f64> = t.to_vec();
            Ok(data[0])
        }
        dtype => Err(Error::UnsupportedDType {
            dtype,
            op: "extract_scalar",
        }),
    }
}

/// Copy a slice of samples into a 1-D F64 CPU tensor.
pub fn cpu_vector(values: &[f64], device: &CpuDevice) -> Tensor<CpuRuntime> {
    Tensor::<CpuRuntime>::from_slice(values, &[values.len()], device)
}
