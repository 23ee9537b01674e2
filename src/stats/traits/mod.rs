//! Statistical algorithm traits.
//!
//! - DescriptiveStatisticsAlgorithms - Location and dispersion summaries
//! - RegressionAlgorithms - Regression analysis

mod descriptive;
mod regression;
mod types;

pub use descriptive::DescriptiveStatisticsAlgorithms;
pub use regression::RegressionAlgorithms;
pub use types::{DescriptiveSummary, LinregressResult, validate_stats_dtype};
