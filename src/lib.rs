//! anscombe - least-squares regression statistics for grouped samples
//!
//! The crate fits a simple linear regression to every group of a labeled
//! `(x, y)` table, reports slope, intercept and R² side by side, and draws one
//! scatter plot per group with its fitted line. The bundled Anscombe quartet
//! shows why the plots matter: all four groups share the same line
//! (y ≈ 3 + 0.5x, R² ≈ 0.67) while looking nothing alike.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  runner (clap CLI) · config (figment) · telemetry (log)   │
//! └──────────────┬───────────────────────────────┬───────────┘
//!                │                               │
//! ┌──────────────▼──────────────┐  ┌─────────────▼────────────┐
//! │ dataset → analysis → report │  │ plot (plotters, SVG)     │
//! └──────────────┬──────────────┘  └──────────────────────────┘
//!                │ uses
//! ┌──────────────▼──────────────────────────────────────────┐
//! │ stats: RegressionAlgorithms over numr tensors (CPU)     │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`stats`] - Regression calculator, descriptive statistics, Student's t
//! - [`dataset`] - Samples, groups, bundled quartet and CSV loading
//! - [`analysis`] - Per-group regression batches with timing
//! - [`report`] - Table and JSON rendering
//! - [`plot`] - SVG scatter plots with regression lines
//! - [`config`] - Layered configuration
//!
//! # Example
//!
//! ```ignore
//! use anscombe::{AnalysisOptions, Dataset, analyze, render_table};
//!
//! let report = analyze(&Dataset::anscombe(), AnalysisOptions::default()).unwrap();
//! println!("{}", render_table(&report, false, 6));
//! ```

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod error;
pub mod plot;
pub mod report;
pub mod runner;
pub mod stats;
pub mod telemetry;

// Re-export main types for convenience
pub use analysis::{
    AnalysisOptions, AnalysisReport, GroupSummary, RegressionRecord, SkippedGroup, analyze,
    summarize,
};
pub use config::AppConfig;
pub use dataset::{Dataset, Group, Sample};
pub use error::{AnalysisError, AnalysisResult};
pub use plot::{PlotOptions, render_regression_grid};
pub use report::{ReportFormat, render_json, render_summary_table, render_table};
pub use stats::{
    DescriptiveStatisticsAlgorithms, DescriptiveSummary, LinregressResult, RegressionAlgorithms,
    StatsError, StatsResult, StudentT, describe, regress,
};
