use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisOptions;
use crate::error::{AnalysisError, AnalysisResult};
use crate::plot::PlotOptions;
use crate::report::ReportFormat;

const DEFAULT_CONFIG: &str = include_str!("default.toml");
const ENV_PREFIX: &str = "ANSCOMBE__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
    pub plot: PlotConfig,
}

impl AppConfig {
    /// Embedded defaults, then the optional TOML file, then `ANSCOMBE__*` variables.
    pub fn load(file: Option<&Path>) -> AnalysisResult<Self> {
        let mut figment = Self::defaults();
        if let Some(path) = file {
            if !path.exists() {
                return Err(AnalysisError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            figment = figment.admerge(Toml::file(path));
        }
        Self::extract(
            figment.admerge(Env::prefixed(ENV_PREFIX).map(|p| p.as_str().replace("__", ".").into())),
        )
    }

    pub fn defaults() -> Figment {
        Figment::from(Toml::string(DEFAULT_CONFIG))
    }

    pub fn extract(figment: Figment) -> AnalysisResult<Self> {
        figment
            .extract()
            .map_err(|e| AnalysisError::Config(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    pub parallel: bool,
    pub skip_invalid_groups: bool,
}

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(config: &AnalysisConfig) -> Self {
        AnalysisOptions {
            parallel: config.parallel,
            skip_invalid_groups: config.skip_invalid_groups,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    pub format: ReportFormat,
    /// Digits after the decimal point in table cells.
    pub precision: usize,
    pub extended: bool,
    /// Also print per-group means and variances.
    pub summary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub enabled: bool,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl From<&PlotConfig> for PlotOptions {
    fn from(config: &PlotConfig) -> Self {
        PlotOptions {
            output: config.output.clone(),
            width: config.width,
            height: config.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::extract(AppConfig::defaults()).unwrap();

        assert!(!config.analysis.parallel);
        assert!(!config.analysis.skip_invalid_groups);
        assert_eq!(config.report.format, ReportFormat::Table);
        assert_eq!(config.report.precision, 6);
        assert!(config.plot.enabled);
        assert_eq!(config.plot.output, PathBuf::from("anscombe.svg"));
        assert_eq!((config.plot.width, config.plot.height), (800, 800));
    }

    #[test]
    fn test_overrides_merge_per_key() {
        let figment = AppConfig::defaults().admerge(Toml::string(
            "[report]\nformat = \"json\"\n[analysis]\nparallel = true\n",
        ));
        let config = AppConfig::extract(figment).unwrap();

        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.report.precision, 6);
        assert!(config.analysis.parallel);
        assert!(!config.analysis.skip_invalid_groups);
    }

    #[test]
    fn test_invalid_value() {
        let figment = AppConfig::defaults().admerge(Toml::string("[report]\nformat = \"html\"\n"));
        assert!(matches!(
            AppConfig::extract(figment),
            Err(AnalysisError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[plot]\nenabled = false\nwidth = 1200").unwrap();
        file.flush().unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert!(!config.plot.enabled);
        assert_eq!(config.plot.width, 1200);
        assert_eq!(config.plot.height, 800);

        assert!(matches!(
            AppConfig::load(Some(Path::new("/nonexistent/anscombe.toml"))),
            Err(AnalysisError::Config(_))
        ));
    }

    #[test]
    fn test_option_conversions() {
        let config = AppConfig::extract(AppConfig::defaults()).unwrap();
        assert_eq!(
            AnalysisOptions::from(&config.analysis),
            AnalysisOptions::default()
        );
        let plot = PlotOptions::from(&config.plot);
        assert_eq!(plot.output, PathBuf::from("anscombe.svg"));
    }
}
