use thiserror::Error;

use crate::stats::StatsError;

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("regression failed for dataset '{label}': {source}")]
    Regression {
        label: String,
        #[source]
        source: StatsError,
    },
    #[error("statistics error: {0}")]
    Stats(#[from] StatsError),
    #[error("plot error: {0}")]
    Plot(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AnalysisError {
    pub fn invalid(message: impl Into<String>) -> Self {
        AnalysisError::InvalidArgument(message.into())
    }

    pub fn plot(message: impl Into<String>) -> Self {
        AnalysisError::Plot(message.into())
    }

    pub fn regression(label: impl Into<String>, source: StatsError) -> Self {
        AnalysisError::Regression {
            label: label.into(),
            source,
        }
    }
}
