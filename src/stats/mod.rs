//! Least-squares regression and descriptive statistics.
//!
//! The algorithms are organized into two focused traits:
//! - [`RegressionAlgorithms`] - Simple linear regression
//! - [`DescriptiveStatisticsAlgorithms`] - Location and dispersion summaries
//!
//! Both are generic over numr's `Runtime`; the CPU backend is implemented here.
//! Callers holding plain slices can use [`regress`] and [`describe`].
//!
//! ```ignore
//! use anscombe::stats::regress;
//!
//! let fit = regress(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.r_squared() - 1.0).abs() < 1e-12);
//! ```

// Backend implementations
mod cpu;

// Shared generic implementations
mod helpers;
mod impl_generic;

// Traits and types
mod traits;

// Core modules
mod continuous;
mod distribution;
mod error;
mod slices;

pub use traits::{
    DescriptiveStatisticsAlgorithms, DescriptiveSummary, LinregressResult, RegressionAlgorithms,
    validate_stats_dtype,
};

pub use continuous::StudentT;
pub use distribution::{ContinuousDistribution, Distribution};
pub use error::{StatsError, StatsResult};
pub use slices::{describe, regress};
