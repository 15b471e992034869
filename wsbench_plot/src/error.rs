use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while turning a comparison file into a chart. Every one of
/// them ends the run.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The input is valid JSON but not a usable comparison report.
    #[error("invalid comparison report: {0}")]
    Validation(String),

    #[error("no valid data found in results")]
    NoData,

    #[error("failed to render chart: {0}")]
    Render(String),
}

impl ChartError {
    /// Whether this error was caused by the content of the input file.
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::Parse(_) | Self::Validation(_))
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        use serde_json::error::Category;
        match e.classify() {
            // the document parsed, but its shape is wrong (e.g. a missing
            // required key)
            Category::Data => Self::Validation(e.to_string()),
            Category::Syntax | Category::Eof | Category::Io => Self::Parse(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_error_classification() {
        let syntax = serde_json::from_str::<serde_json::Value>("{ oops")
            .unwrap_err();
        assert!(matches!(ChartError::from(syntax), ChartError::Parse(_)));

        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Needs {
            field: u64,
        }
        let data = serde_json::from_str::<Needs>("{}").unwrap_err();
        let error = ChartError::from(data);
        assert!(matches!(error, ChartError::Validation(_)));
        assert!(error.is_malformed_input());
        assert!(!ChartError::NoData.is_malformed_input());
    }
}
