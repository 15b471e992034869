#![deny(rust_2018_idioms)]

// Converts a `PyResult` into its value, or prints the python traceback and
// returns a `ChartError::Render`.
#[cfg(feature = "pyo3")]
macro_rules! pytry {
    ($py:expr, $e:expr) => {{
        match $e {
            Ok(value) => value,
            Err(e) => {
                e.print($py);
                return Err($crate::ChartError::Render(e.to_string()));
            }
        }
    }};
}

// Builds a `PyDict` with the given `(key, value)` pairs.
#[cfg(feature = "pyo3")]
macro_rules! pydict {
    ($py:expr, $($tup:expr),* $(,)?) => {{
        let dict = pyo3::types::PyDict::new($py);
        let mut result = Ok(dict);
        $(
            let (key, value) = $tup;
            if let Err(e) = dict.set_item(key, value) {
                result = Err(e);
            }
        )*
        result
    }};
}

mod error;
mod fmt;
mod layout;
#[cfg(feature = "pyo3")]
mod plot;
mod render;
mod report;
mod series;

// Re-exports.
pub use error::ChartError;
pub use fmt::PlotFmt;
pub use layout::{Bar, BarGroup, ChartLayout, TargetLine};
#[cfg(feature = "pyo3")]
pub use render::render;
pub use render::ensure_output_dir;
pub use report::{load, ComparisonReport, Format, Mode, ResultRow};
pub use series::ChartSeries;

use std::path::Path;

/// Default location of the generated chart.
pub const DEFAULT_OUTPUT: &str = "results/comparison-chart.png";

/// Loads the comparison report in `input` and extracts the series to be
/// charted. Fails with `ChartError::NoData` if there's nothing to chart.
pub fn prepare(
    input: impl AsRef<Path>,
) -> Result<(ComparisonReport, ChartSeries), ChartError> {
    let report = report::load(input)?;
    let series = ChartSeries::extract(&report);
    if series.is_empty() {
        return Err(ChartError::NoData);
    }
    Ok((report, series))
}

/// Returns the rate at which the target line should be drawn, if any. A
/// target rate that is not a number (e.g. `null`) draws no line.
pub fn target_line(report: &ComparisonReport, draw: bool) -> Option<f64> {
    if draw {
        report.target_rate()
    } else {
        None
    }
}

/// Generates the comparison chart of the report in `input`, saving it in
/// `output`.
#[cfg(feature = "pyo3")]
pub fn comparison_chart(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    draw_target_line: bool,
) -> Result<(), ChartError> {
    let output = output.as_ref();
    let (report, series) = prepare(input)?;

    println!("Generating chart for {} modes...", series.len());
    println!("  JSON rates:   {}", PlotFmt::rates(series.json_rates()));
    println!("  Binary rates: {}", PlotFmt::rates(series.binary_rates()));

    let target = target_line(&report, draw_target_line);
    let layout = ChartLayout::new(&series, target);
    render(&layout, output)?;

    println!("Chart saved to: {}", output.display());
    Ok(())
}
