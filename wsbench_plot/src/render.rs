use crate::error::ChartError;
use std::path::Path;

#[cfg(feature = "pyo3")]
use crate::fmt::PlotFmt;
#[cfg(feature = "pyo3")]
use crate::layout::ChartLayout;
#[cfg(feature = "pyo3")]
use crate::plot::PyPlot;
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
const TITLE: &str = "WebSocket Message Processing by Client Mode";
#[cfg(feature = "pyo3")]
const XLABEL: &str = "Client Mode";
#[cfg(feature = "pyo3")]
const YLABEL: &str = "Messages per Second";
// figure size in inches
#[cfg(feature = "pyo3")]
const FIGSIZE: (u32, u32) = (12, 7);
#[cfg(feature = "pyo3")]
const DPI: u32 = 150;

/// Creates the directory in which `output` will be written, if needed.
pub fn ensure_output_dir(output: &Path) -> Result<(), ChartError> {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => {
            tracing::debug!("creating output directory {}", dir.display());
            std::fs::create_dir_all(dir).map_err(|source| ChartError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

/// Draws `layout` with matplotlib and saves it as a PNG in `output`.
#[cfg(feature = "pyo3")]
pub fn render(layout: &ChartLayout, output: &Path) -> Result<(), ChartError> {
    ensure_output_dir(output)?;

    let gil = Python::acquire_gil();
    let py = gil.python();
    let plt = pytry!(py, PyPlot::new(py));
    let kwargs = pytry!(py, pydict!(py, ("figsize", FIGSIZE)));
    let (fig, ax) = pytry!(py, plt.subplots(Some(kwargs)));

    for group in &layout.groups {
        let (x, height): (Vec<_>, Vec<_>) =
            group.bars.iter().map(|bar| (bar.x, bar.height)).unzip();
        let kwargs = pytry!(
            py,
            pydict!(
                py,
                ("label", PlotFmt::format_name(group.format)),
                ("width", layout.bar_width),
                ("color", PlotFmt::color(group.format)),
                ("edgecolor", "white"),
                ("linewidth", 0.5),
            )
        );
        pytry!(py, ax.bar(x, height, Some(kwargs)));

        // value labels on top of each (non-empty) bar
        for bar in &group.bars {
            if let Some(label) = &bar.label {
                let kwargs = pytry!(
                    py,
                    pydict!(
                        py,
                        ("xy", (bar.x, bar.height)),
                        // 5 points above the bar
                        ("xytext", (0, 5)),
                        ("textcoords", "offset points"),
                        ("ha", "center"),
                        ("va", "bottom"),
                        ("fontsize", 10),
                        ("fontweight", "bold"),
                    )
                );
                pytry!(py, ax.annotate(label, Some(kwargs)));
            }
        }
    }

    // set labels
    let kwargs =
        pytry!(py, pydict!(py, ("fontsize", 12), ("fontweight", "bold")));
    pytry!(py, ax.set_xlabel(XLABEL, Some(kwargs)));
    pytry!(py, ax.set_ylabel(YLABEL, Some(kwargs)));
    let kwargs = pytry!(
        py,
        pydict!(py, ("fontsize", 14), ("fontweight", "bold"), ("pad", 20))
    );
    pytry!(py, ax.set_title(TITLE, Some(kwargs)));

    // set x ticks and labels
    pytry!(py, ax.set_xticks(layout.xticks.clone()));
    let kwargs = pytry!(py, pydict!(py, ("fontsize", 11)));
    pytry!(py, ax.set_xticklabels(layout.xticklabels.clone(), Some(kwargs)));

    // set y limits, ticks and labels
    let (bottom, top) = layout.ylim;
    let kwargs = pytry!(py, pydict!(py, ("bottom", bottom), ("top", top)));
    pytry!(py, ax.set_ylim(Some(kwargs)));
    pytry!(py, ax.set_yticks(layout.yticks.clone()));
    pytry!(py, ax.set_yticklabels(layout.yticklabels.clone()));

    let kwargs =
        pytry!(py, pydict!(py, ("linestyle", "--"), ("alpha", 0.7)));
    pytry!(py, ax.ygrid(Some(kwargs)));

    if let Some(target) = &layout.target {
        let kwargs = pytry!(
            py,
            pydict!(
                py,
                ("y", target.y),
                ("color", PlotFmt::target_color()),
                ("linestyle", "--"),
                ("linewidth", 1.5),
                ("alpha", 0.7),
                ("label", target.label.as_str()),
            )
        );
        pytry!(py, ax.axhline(Some(kwargs)));
    }

    let kwargs =
        pytry!(py, pydict!(py, ("loc", "upper left"), ("fontsize", 11)));
    pytry!(py, ax.legend(Some(kwargs)));

    // save figure
    pytry!(py, plt.tight_layout());
    let path = output.display().to_string();
    let kwargs = pytry!(
        py,
        pydict!(
            py,
            ("dpi", DPI),
            ("bbox_inches", "tight"),
            ("facecolor", "white"),
        )
    );
    pytry!(py, plt.savefig(&path, Some(kwargs)));
    pytry!(py, plt.close(fig));
    tracing::info!("chart written to {}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("results/nested/chart.png");
        ensure_output_dir(&output).unwrap();
        assert!(tmp.path().join("results/nested").is_dir());
        // the chart itself is not created
        assert!(!output.exists());

        // existing directories are fine
        ensure_output_dir(&output).unwrap();
    }

    #[test]
    fn bare_file_name() {
        ensure_output_dir(Path::new("chart.png")).unwrap();
    }
}

#[cfg(all(test, feature = "pyo3"))]
mod render_tests {
    use super::*;
    use crate::report::{ComparisonReport, Format, Mode, ResultRow};
    use crate::series::ChartSeries;

    #[test]
    fn render_png() {
        let report = ComparisonReport {
            timestamp: "t".into(),
            server: "s".into(),
            target_rate: 100_000f64.into(),
            duration: 10f64.into(),
            results: vec![
                ResultRow::new(Mode::BrowserHeadless, Format::Json, 50_000.0),
                ResultRow::new(Mode::TauriRust, Format::Binary, 2_300_000.0),
            ],
        };
        let series = ChartSeries::extract(&report);
        let layout = ChartLayout::new(&series, report.target_rate());

        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("charts/comparison-chart.png");
        if let Err(e) = render(&layout, &output) {
            panic!("error while rendering chart: {:?}", e);
        }
        assert!(output.is_file());
    }
}
