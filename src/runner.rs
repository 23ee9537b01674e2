use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use crate::analysis::{AnalysisOptions, analyze, summarize};
use crate::config::AppConfig;
use crate::dataset::Dataset;
use crate::error::AnalysisResult;
use crate::plot::{PlotOptions, render_regression_grid};
use crate::report::{
    ReportFormat, render_elapsed, render_json, render_summary_table, render_table,
};
use crate::telemetry::init_logger;

#[derive(Debug, Parser)]
#[command(
    version,
    name = "anscombe",
    about = "Fit least-squares lines to each group of the Anscombe quartet"
)]
struct Cli {
    /// CSV file with `dataset,x,y` columns (defaults to the bundled quartet)
    #[arg(long)]
    input: Option<PathBuf>,
    /// TOML file overriding the default configuration
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum)]
    format: Option<ReportFormat>,
    /// Digits after the decimal point
    #[arg(long)]
    precision: Option<usize>,
    /// Add p-value, standard error and slope confidence interval columns
    #[arg(long)]
    extended: bool,
    /// Also print per-group means and variances
    #[arg(long)]
    summary: bool,
    /// Fit groups concurrently
    #[arg(long)]
    parallel: bool,
    /// Skip groups whose regression is undefined instead of failing
    #[arg(long)]
    skip_invalid: bool,
    /// Write the regression plot to this SVG file
    #[arg(long, conflicts_with = "no_plot")]
    plot: Option<PathBuf>,
    #[arg(long)]
    no_plot: bool,
}

impl Cli {
    /// Flags win over file and environment configuration.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(format) = self.format {
            config.report.format = format;
        }
        if let Some(precision) = self.precision {
            config.report.precision = precision;
        }
        config.report.extended |= self.extended;
        config.report.summary |= self.summary;
        config.analysis.parallel |= self.parallel;
        config.analysis.skip_invalid_groups |= self.skip_invalid;
        if let Some(plot) = &self.plot {
            config.plot.enabled = true;
            config.plot.output = plot.clone();
        }
        if self.no_plot {
            config.plot.enabled = false;
        }
    }
}

fn execute(
    input: Option<&PathBuf>,
    config: &AppConfig,
    out: &mut impl Write,
) -> AnalysisResult<()> {
    let dataset = match input {
        Some(path) => Dataset::from_csv_path(path)?,
        None => Dataset::anscombe(),
    };

    let report = analyze(&dataset, AnalysisOptions::from(&config.analysis))?;
    let summaries = if config.report.summary {
        Some(summarize(&dataset)?)
    } else {
        None
    };

    match config.report.format {
        ReportFormat::Table => {
            writeln!(out, "\nLinear Regression Results for Anscombe Quartet:\n")?;
            writeln!(
                out,
                "{}",
                render_table(&report, config.report.extended, config.report.precision)
            )?;
            for skipped in &report.skipped {
                writeln!(out, "Skipped dataset {}: {}", skipped.dataset, skipped.reason)?;
            }
            if let Some(summaries) = &summaries {
                writeln!(out, "\nSummary Statistics:\n")?;
                writeln!(
                    out,
                    "{}",
                    render_summary_table(summaries, config.report.precision)
                )?;
            }
            writeln!(out, "{}", render_elapsed(&report))?;
        }
        ReportFormat::Json => {
            writeln!(out, "{}", render_json(&report)?)?;
        }
    }

    if config.plot.enabled {
        render_regression_grid(&dataset, &report.results, &PlotOptions::from(&config.plot))?;
    }
    Ok(())
}

pub fn main(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_from(args);
    init_logger();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    log::debug!("effective configuration: {config:?}");

    let stdout = std::io::stdout();
    execute(cli.input.as_ref(), &config, &mut stdout.lock())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn config_for(args: &[&str]) -> AppConfig {
        let cli = Cli::parse_from(std::iter::once("anscombe").chain(args.iter().copied()));
        let mut config = AppConfig::extract(AppConfig::defaults()).unwrap();
        cli.apply(&mut config);
        config
    }

    #[test]
    fn test_cli_overrides() {
        let config = config_for(&[
            "--format",
            "json",
            "--precision",
            "3",
            "--parallel",
            "--skip-invalid",
            "--no-plot",
        ]);
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.precision, 3);
        assert!(config.analysis.parallel);
        assert!(config.analysis.skip_invalid_groups);
        assert!(!config.plot.enabled);

        let config = config_for(&["--plot", "out.svg"]);
        assert!(config.plot.enabled);
        assert_eq!(config.plot.output, PathBuf::from("out.svg"));
    }

    #[test]
    fn test_plot_flags_conflict() {
        let result = Cli::try_parse_from(["anscombe", "--plot", "a.svg", "--no-plot"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_table() {
        let config = config_for(&["--no-plot", "--summary", "--extended"]);
        let mut out = Vec::new();
        execute(None, &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Linear Regression Results for Anscombe Quartet:"));
        assert!(text.contains("R-squared"));
        assert!(text.contains("Slope 95% CI"));
        assert!(text.contains("Summary Statistics:"));
        assert!(text.contains("Time (s)"));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[lines.len() - 2].starts_with("Average per dataset: "));
        assert!(lines[lines.len() - 1].starts_with("Script execution time: "));
        assert!(text.trim_end().ends_with(" seconds"));
    }

    #[test]
    fn test_execute_json_from_csv_with_plot() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("groups.csv");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(file, "dataset,x,y\na,1,2\na,2,4\na,3,6\nb,1,1\nb,1,2").unwrap();
        drop(file);

        let svg_path = dir.path().join("groups.svg");
        let config = config_for(&[
            "--format",
            "json",
            "--skip-invalid",
            "--plot",
            svg_path.to_str().unwrap(),
        ]);
        let mut out = Vec::new();
        execute(Some(&csv_path), &config, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["results"][0]["dataset"], "a");
        assert!((value["results"][0]["slope"].as_f64().unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(value["skipped"][0]["dataset"], "b");
        assert!(svg_path.exists());
    }

    #[test]
    fn test_execute_invalid_group_fails() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("flat.csv");
        std::fs::write(&csv_path, "dataset,x,y\nb,1,1\nb,1,2\n").unwrap();

        let config = config_for(&["--no-plot"]);
        let mut out = Vec::new();
        let err = execute(Some(&csv_path), &config, &mut out).unwrap_err();
        assert!(err.to_string().contains("dataset 'b'"));
    }
}
