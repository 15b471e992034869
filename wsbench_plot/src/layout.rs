use crate::fmt::PlotFmt;
use crate::report::Format;
use crate::series::ChartSeries;

// width of each bar; each mode gets one unit of the x axis
const BAR_WIDTH: f64 = 0.35;
// headroom above the tallest bar, so that its label fits
const Y_HEADROOM: f64 = 1.15;
// upper limit used when every rate is zero
const EMPTY_Y_LIMIT: f64 = 1.0;
// y ticks are multiples of one of these steps (scaled by a power of 10)
const TICK_STEPS: [f64; 5] = [1.0, 2.0, 2.5, 5.0, 10.0];
const MAX_TICK_INTERVALS: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub height: f64,
    /// Value label drawn above the bar; bars with no height have none.
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    pub format: Format,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TargetLine {
    pub y: f64,
    pub label: String,
}

/// Geometry of the comparison chart, independent of the plotting backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub bar_width: f64,
    pub xticks: Vec<f64>,
    pub xticklabels: Vec<&'static str>,
    pub groups: Vec<BarGroup>,
    pub ylim: (f64, f64),
    pub yticks: Vec<f64>,
    pub yticklabels: Vec<String>,
    pub target: Option<TargetLine>,
}

impl ChartLayout {
    pub fn new(series: &ChartSeries, target: Option<f64>) -> Self {
        let xticks: Vec<_> = (0..series.len()).map(|i| i as f64).collect();
        let xticklabels = series
            .modes()
            .iter()
            .map(|&mode| PlotFmt::mode_name(mode))
            .collect();

        // json to the left of each tick, binary to the right
        let groups = [(Format::Json, -0.5), (Format::Binary, 0.5)]
            .into_iter()
            .map(|(format, shift)| {
                let bars = xticks
                    .iter()
                    .zip(series.rates(format))
                    .map(|(&x, &height)| Bar {
                        x: x + shift * BAR_WIDTH,
                        height,
                        label: (height > 0f64).then(|| PlotFmt::rate(height)),
                    })
                    .collect();
                BarGroup { format, bars }
            })
            .collect();

        let max_rate = series.max_rate();
        let upper = if max_rate > 0f64 {
            // the headroom must not overflow for huge rates
            (max_rate * Y_HEADROOM).min(f64::MAX)
        } else {
            EMPTY_Y_LIMIT
        };
        let yticks = ticks(upper);
        let yticklabels = yticks.iter().map(|&y| PlotFmt::rate(y)).collect();

        let target = target
            .filter(|&y| y.is_finite() && y > 0f64)
            .map(|y| TargetLine {
                y,
                label: PlotFmt::target_label(y),
            });

        Self {
            bar_width: BAR_WIDTH,
            xticks,
            xticklabels,
            groups,
            ylim: (0f64, upper),
            yticks,
            yticklabels,
            target,
        }
    }
}

/// Computes evenly spaced ticks in `[0, upper]` with a "round" step.
fn ticks(upper: f64) -> Vec<f64> {
    let raw_step = upper / MAX_TICK_INTERVALS as f64;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let step = TICK_STEPS
        .iter()
        .map(|step| step * magnitude)
        .find(|&step| step >= raw_step)
        .unwrap_or(10f64 * magnitude);
    // tolerate rounding errors when `upper` is a multiple of `step`
    let count = (upper / step + 1e-9).floor() as usize;
    (0..=count).map(|i| i as f64 * step).collect()
}
