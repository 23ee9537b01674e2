//! Generic descriptive statistics implementations.

use crate::stats::helpers::extract_scalar;
use crate::stats::{DescriptiveSummary, StatsError, StatsResult, validate_stats_dtype};
use numr::ops::TensorOps;
use numr::runtime::{Runtime, RuntimeClient};
use numr::tensor::Tensor;

/// Generic implementation of `describe` for any Runtime.
pub fn describe_impl<R, C>(client: &C, x: &Tensor<R>) -> StatsResult<DescriptiveSummary>
where
    R: Runtime,
    C: TensorOps<R> + RuntimeClient<R>,
{
    validate_stats_dtype(x.dtype())?;

    if x.numel() == 0 {
        return Err(StatsError::invalid_input(
            "x",
            "cannot compute statistics on empty tensor",
        ));
    }

    let x_contig = x.contiguous();
    let n = x_contig.numel();

    let all_dims: Vec<usize> = (0..x_contig.ndim()).collect();

    let mean = extract_scalar(&client.mean(&x_contig, &all_dims, false)?)?;
    let min = extract_scalar(&client.min(&x_contig, &all_dims, false)?)?;
    let max = extract_scalar(&client.max(&x_contig, &all_dims, false)?)?;

    let mean_broadcast =
        Tensor::<R>::full_scalar(x_contig.shape(), x.dtype(), mean, client.device());
    let centered = client.sub(&x_contig, &mean_broadcast)?;
    let centered_sq = client.mul(&centered, &centered)?;
    let m2 = extract_scalar(&client.sum(&centered_sq, &all_dims, false)?)?;

    // Bessel's correction leaves a single observation without a variance.
    let variance = if n > 1 { m2 / (n - 1) as f64 } else { f64::NAN };

    Ok(DescriptiveSummary {
        nobs: n,
        mean,
        variance,
        std: variance.sqrt(),
        min,
        max,
    })
}
