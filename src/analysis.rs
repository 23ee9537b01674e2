//! Per-group regression batches.
//!
//! [`analyze`] fits one least-squares line per group, timing each fit and the
//! batch as a whole.
//! Groups are independent, so the batch can run on the rayon pool; the
//! report always lists groups in dataset order.

use std::time::{Duration, Instant};

use rayon::prelude::*;
use serde::Serialize;

use crate::dataset::{Dataset, Group};
use crate::error::{AnalysisError, AnalysisResult};
use crate::stats::{DescriptiveSummary, LinregressResult, StatsError, describe, regress};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Fit groups concurrently.
    pub parallel: bool,
    /// Log and skip groups whose regression is undefined instead of failing the batch.
    pub skip_invalid_groups: bool,
}

/// Regression statistics for one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegressionRecord {
    pub dataset: String,
    pub n: usize,
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub rvalue: f64,
    pub pvalue: f64,
    pub stderr: f64,
    pub intercept_stderr: f64,
    /// Wall-clock time of this group's fit.
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

impl RegressionRecord {
    fn new(group: &Group, fit: &LinregressResult, elapsed: Duration) -> Self {
        Self {
            dataset: group.label().to_string(),
            n: group.len(),
            slope: fit.slope,
            intercept: fit.intercept,
            r_squared: fit.r_squared(),
            rvalue: fit.rvalue,
            pvalue: fit.pvalue,
            stderr: fit.stderr,
            intercept_stderr: fit.intercept_stderr,
            elapsed,
        }
    }

    /// The fit this record was built from.
    pub fn fit(&self) -> LinregressResult {
        LinregressResult {
            slope: self.slope,
            intercept: self.intercept,
            rvalue: self.rvalue,
            pvalue: self.pvalue,
            stderr: self.stderr,
            intercept_stderr: self.intercept_stderr,
        }
    }

    /// 95% confidence interval of the slope, if the group has enough samples.
    pub fn slope_ci95(&self) -> Option<(f64, f64)> {
        self.fit().slope_confidence_interval(self.n, 0.95).ok()
    }
}

/// A group excluded from the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedGroup {
    pub dataset: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub results: Vec<RegressionRecord>,
    pub skipped: Vec<SkippedGroup>,
    #[serde(rename = "elapsed_secs", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
    /// Batch time divided by the number of groups attempted; `None` for an
    /// empty dataset.
    #[serde(rename = "average_secs", serialize_with = "serialize_opt_secs")]
    pub average: Option<Duration>,
}

fn serialize_secs<S: serde::Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64())
}

fn serialize_opt_secs<S: serde::Serializer>(
    d: &Option<Duration>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match d {
        Some(d) => s.serialize_some(&d.as_secs_f64()),
        None => s.serialize_none(),
    }
}

/// Mean time per group, or `None` when no group was attempted.
pub fn average_per_group(total: Duration, groups: usize) -> Option<Duration> {
    u32::try_from(groups)
        .ok()
        .filter(|&n| n > 0)
        .map(|n| total / n)
}

/// Location and dispersion of both coordinates of a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub dataset: String,
    pub x: DescriptiveSummary,
    pub y: DescriptiveSummary,
}

type TimedFit = (Result<LinregressResult, StatsError>, Duration);

fn fit_group(group: &Group) -> TimedFit {
    let start = Instant::now();
    let fit = regress(&group.xs(), &group.ys());
    let elapsed = start.elapsed();
    if let Ok(fit) = &fit {
        log::debug!(
            "dataset {}: slope={:.6} intercept={:.6} r2={:.6} in {:?}",
            group.label(),
            fit.slope,
            fit.intercept,
            fit.r_squared(),
            elapsed
        );
    }
    (fit, elapsed)
}

/// Fit every group of `dataset`, timing each group and the batch.
pub fn analyze(dataset: &Dataset, options: AnalysisOptions) -> AnalysisResult<AnalysisReport> {
    log::info!(
        "fitting {} groups ({} samples, parallel={})",
        dataset.groups().len(),
        dataset.sample_count(),
        options.parallel
    );

    let start = Instant::now();
    let fits: Vec<TimedFit> = if options.parallel {
        dataset.groups().par_iter().map(fit_group).collect()
    } else {
        dataset.groups().iter().map(fit_group).collect()
    };
    let elapsed = start.elapsed();

    let mut results = Vec::with_capacity(fits.len());
    let mut skipped = Vec::new();
    for (group, (fit, group_elapsed)) in dataset.groups().iter().zip(fits) {
        match fit {
            Ok(fit) => results.push(RegressionRecord::new(group, &fit, group_elapsed)),
            Err(e) if options.skip_invalid_groups && e.is_invalid_input() => {
                log::warn!("skipping dataset {}: {}", group.label(), e);
                skipped.push(SkippedGroup {
                    dataset: group.label().to_string(),
                    reason: e.to_string(),
                });
            }
            Err(e) => return Err(AnalysisError::regression(group.label(), e)),
        }
    }

    let average = average_per_group(elapsed, dataset.groups().len());
    log::info!(
        "fitted {} groups in {:?} (average {:?})",
        results.len(),
        elapsed,
        average
    );
    Ok(AnalysisReport {
        results,
        skipped,
        elapsed,
        average,
    })
}

/// Descriptive statistics of `x` and `y` for every group.
pub fn summarize(dataset: &Dataset) -> AnalysisResult<Vec<GroupSummary>> {
    dataset
        .groups()
        .iter()
        .map(|group| -> AnalysisResult<GroupSummary> {
            Ok(GroupSummary {
                dataset: group.label().to_string(),
                x: describe(&group.xs())?,
                y: describe(&group.ys())?,
            })
        })
        .collect()
}
