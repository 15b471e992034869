use crate::error::ChartError;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Client execution context in which a benchmark ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mode {
    BrowserHeadless,
    BrowserDefault,
    TauriJs,
    TauriRust,
}

impl Mode {
    /// All modes, in the order in which they appear on the chart.
    pub const ALL: [Mode; 4] = [
        Mode::BrowserHeadless,
        Mode::BrowserDefault,
        Mode::TauriJs,
        Mode::TauriRust,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::BrowserHeadless => "browser-headless",
            Mode::BrowserDefault => "browser-default",
            Mode::TauriJs => "tauri-js",
            Mode::TauriRust => "tauri-rust",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mode| mode.name() == name)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Serialization format under comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Binary,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Binary => "binary",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Format::Json),
            "binary" => Some(Format::Binary),
            _ => None,
        }
    }
}

/// One measurement: the rate (messages per second) at which the client
/// processed messages in some mode, using some format.
///
/// Mode and format are kept as written in the file; rows this tool does not
/// chart are skipped when building the chart series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRow {
    pub mode: String,
    pub format: String,
    pub client_rate: f64,
}

impl ResultRow {
    pub fn new(mode: Mode, format: Format, client_rate: f64) -> Self {
        Self {
            mode: mode.name().to_string(),
            format: format.name().to_string(),
            client_rate,
        }
    }

    /// Returns the (mode, format) key of this row, if both are known.
    pub fn key(&self) -> Option<(Mode, Format)> {
        let mode = Mode::from_name(&self.mode)?;
        let format = Format::from_name(&self.format)?;
        Some((mode, format))
    }
}

/// A benchmark comparison. Only `results` is interpreted; the remaining keys
/// must be present but may hold any JSON value (`targetRate` may be `null`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub timestamp: Value,
    pub server: Value,
    pub target_rate: Value,
    pub duration: Value,
    pub results: Vec<ResultRow>,
}

impl ComparisonReport {
    /// The target rate, if it is a number.
    pub fn target_rate(&self) -> Option<f64> {
        self.target_rate.as_f64()
    }

    fn validate(self) -> Result<Self, ChartError> {
        if self.results.is_empty() {
            return Err(ChartError::Validation(String::from(
                "no results in data",
            )));
        }
        for (index, row) in self.results.iter().enumerate() {
            if !row.client_rate.is_finite() || row.client_rate < 0.0 {
                return Err(ChartError::Validation(format!(
                    "result {} ({} / {}) has invalid clientRate {}",
                    index, row.mode, row.format, row.client_rate
                )));
            }
        }
        Ok(self)
    }
}

impl FromStr for ComparisonReport {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let report: ComparisonReport = serde_json::from_str(s)?;
        report.validate()
    }
}

/// Loads and validates the comparison report stored in `path`.
pub fn load(path: impl AsRef<Path>) -> Result<ComparisonReport, ChartError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ChartError::FileNotFound(path.to_path_buf()));
    }
    let content =
        std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let report: ComparisonReport = content.parse()?;
    tracing::debug!(
        "loaded {} results from {} (server = {}, timestamp = {})",
        report.results.len(),
        path.display(),
        report.server,
        report.timestamp,
    );
    Ok(report)
}
