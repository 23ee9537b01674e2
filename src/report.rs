//! Human- and machine-readable renderings of an [`AnalysisReport`].

use std::time::Duration;

use comfy_table::{Cell, CellAlignment, Table};
use serde::{Deserialize, Serialize};

use crate::analysis::{AnalysisReport, GroupSummary};
use crate::error::AnalysisResult;

/// Outer border, header separator and column separators in plain ASCII.
const TABLE_PRESET: &str = "||--+-++|    ++++++";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

fn new_table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = Table::new();
    table.load_preset(TABLE_PRESET);
    table.set_header(
        header
            .into_iter()
            .map(|h| Cell::new(h.into()))
            .collect::<Vec<_>>(),
    );
    table
}

fn align_numeric_columns(table: &mut Table) {
    for (i, column) in table.column_iter_mut().enumerate() {
        let alignment = match i {
            0 => CellAlignment::Left,
            _ => CellAlignment::Right,
        };
        column.set_cell_alignment(alignment);
    }
}

fn fmt_num(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

fn fmt_secs(d: Duration) -> String {
    format!("{:.6}", d.as_secs_f64())
}

/// Regression results as a text table.
///
/// The `extended` layout adds the slope p-value, its standard error, a 95%
/// confidence interval and the time spent fitting each group.
pub fn render_table(report: &AnalysisReport, extended: bool, precision: usize) -> String {
    let mut header = vec!["Dataset", "Intercept", "Slope", "R-squared"];
    if extended {
        header.extend(["p-value", "Std. err", "Slope 95% CI", "Time (s)"]);
    }
    let mut table = new_table(header);

    for record in &report.results {
        let mut row = vec![
            record.dataset.clone(),
            fmt_num(record.intercept, precision),
            fmt_num(record.slope, precision),
            fmt_num(record.r_squared, precision),
        ];
        if extended {
            row.push(fmt_num(record.pvalue, precision));
            row.push(fmt_num(record.stderr, precision));
            row.push(match record.slope_ci95() {
                Some((lo, hi)) => {
                    format!("[{}, {}]", fmt_num(lo, precision), fmt_num(hi, precision))
                }
                None => "-".to_string(),
            });
            row.push(fmt_secs(record.elapsed));
        }
        table.add_row(row);
    }
    align_numeric_columns(&mut table);
    table.to_string()
}

/// Per-group means and variances, the statistics the quartet shares.
pub fn render_summary_table(summaries: &[GroupSummary], precision: usize) -> String {
    let mut table = new_table(["Dataset", "n", "Mean x", "Var x", "Mean y", "Var y"]);
    for summary in summaries {
        table.add_row(vec![
            summary.dataset.clone(),
            summary.x.nobs.to_string(),
            fmt_num(summary.x.mean, precision),
            fmt_num(summary.x.variance, precision),
            fmt_num(summary.y.mean, precision),
            fmt_num(summary.y.variance, precision),
        ]);
    }
    align_numeric_columns(&mut table);
    table.to_string()
}

pub fn render_json(report: &AnalysisReport) -> AnalysisResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Trailer lines: average time per group, then the whole batch.
pub fn render_elapsed(report: &AnalysisReport) -> String {
    let average = match report.average {
        Some(average) => format!("{} seconds", fmt_secs(average)),
        None => "N/A (no datasets)".to_string(),
    };
    format!(
        "Average per dataset: {average}\nScript execution time: {} seconds",
        fmt_secs(report.elapsed)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisOptions, SkippedGroup, analyze, summarize};
    use crate::dataset::Dataset;

    fn report() -> AnalysisReport {
        analyze(&Dataset::anscombe(), AnalysisOptions::default()).unwrap()
    }

    #[test]
    fn test_render_table() {
        let text = render_table(&report(), false, 3);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines.iter().any(|l| l.contains("Dataset") && l.contains("R-squared")));
        assert!(!text.contains("p-value"));
        let row = lines.iter().find(|l| l.contains(" III ")).unwrap();
        assert!(row.contains("3.002"));
        assert!(row.contains("0.500"));
        assert!(row.contains("0.666"));
        assert_eq!(lines.iter().filter(|l| l.contains("3.00")).count(), 4);
    }

    #[test]
    fn test_render_extended_table() {
        let text = render_table(&report(), true, 4);
        assert!(text.contains("p-value"));
        assert!(text.contains("Slope 95% CI"));
        assert!(text.contains("0.1179"));
        assert!(text.contains('['));
        assert!(text.contains("Time (s)"));
    }

    #[test]
    fn test_render_summary_table() {
        let summaries = summarize(&Dataset::anscombe()).unwrap();
        let text = render_summary_table(&summaries, 2);
        assert!(text.contains("Mean x"));
        assert_eq!(text.matches("11.00").count(), 4);
        assert_eq!(text.matches("9.00").count(), 4);
    }

    #[test]
    fn test_render_json() {
        let mut report = report();
        report.elapsed = Duration::from_millis(1500);
        report.average = Some(Duration::from_millis(375));
        report.results[2].elapsed = Duration::from_millis(250);
        report.skipped.push(SkippedGroup {
            dataset: "V".to_string(),
            reason: "x has zero variance".to_string(),
        });

        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert_eq!(value["elapsed_secs"], 1.5);
        assert_eq!(value["average_secs"], 0.375);
        assert_eq!(value["results"][2]["elapsed_secs"], 0.25);
        for record in value["results"].as_array().unwrap() {
            assert!(record["elapsed_secs"].is_f64());
        }
        assert_eq!(value["results"].as_array().unwrap().len(), 4);
        assert_eq!(value["results"][1]["dataset"], "II");
        assert!((value["results"][0]["slope"].as_f64().unwrap() - 0.5).abs() < 1e-2);
        assert_eq!(value["skipped"][0]["dataset"], "V");
    }

    #[test]
    fn test_render_elapsed() {
        let mut report = report();
        report.elapsed = Duration::from_micros(1234);
        report.average = Some(Duration::from_nanos(308_600));
        assert_eq!(
            render_elapsed(&report),
            "Average per dataset: 0.000309 seconds\nScript execution time: 0.001234 seconds"
        );

        report.average = None;
        assert!(render_elapsed(&report).starts_with("Average per dataset: N/A (no datasets)\n"));
    }

    #[test]
    fn test_render_json_without_average() {
        let mut report = report();
        report.average = None;
        let value: serde_json::Value = serde_json::from_str(&render_json(&report).unwrap()).unwrap();
        assert!(value["average_secs"].is_null());
    }
}
