use crate::report::{Format, Mode};

pub struct PlotFmt;

impl PlotFmt {
    /// Formats a message rate in a human readable way, e.g. 1500 -> "1k",
    /// 2300000 -> "2.3M".
    pub fn rate(value: f64) -> String {
        if value >= 1_000_000f64 {
            format!("{:.1}M", value / 1_000_000f64)
        } else if value >= 1_000f64 {
            // thousands are truncated, not rounded
            format!("{}k", (value / 1_000f64) as i64)
        } else {
            format!("{}", value as i64)
        }
    }

    /// Formats a list of rates the way the progress lines show them, e.g.
    /// `['50k', '2.3M']`.
    pub fn rates(values: &[f64]) -> String {
        let rates: Vec<_> = values
            .iter()
            .map(|&v| format!("'{}'", Self::rate(v)))
            .collect();
        format!("[{}]", rates.join(", "))
    }

    pub fn mode_name(mode: Mode) -> &'static str {
        match mode {
            Mode::BrowserHeadless => "Browser\n(Headless)",
            Mode::BrowserDefault => "Browser\n(Default)",
            Mode::TauriJs => "Tauri\n(JS)",
            Mode::TauriRust => "Tauri\n(Rust)",
        }
    }

    pub fn format_name(format: Format) -> &'static str {
        match format {
            Format::Json => "JSON",
            Format::Binary => "Binary",
        }
    }

    pub fn color(format: Format) -> &'static str {
        match format {
            Format::Json => "#2196F3",
            Format::Binary => "#FF9800",
        }
    }

    pub fn target_color() -> &'static str {
        "#E91E63"
    }

    pub fn target_label(target: f64) -> String {
        format!("Target: {}/s", Self::rate(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate() {
        assert_eq!(PlotFmt::rate(0.0), "0");
        assert_eq!(PlotFmt::rate(999.0), "999");
        assert_eq!(PlotFmt::rate(999.9), "999");
        assert_eq!(PlotFmt::rate(1_000.0), "1k");
        assert_eq!(PlotFmt::rate(1_500.0), "1k");
        assert_eq!(PlotFmt::rate(200_000.0), "200k");
        assert_eq!(PlotFmt::rate(999_999.0), "999k");
        assert_eq!(PlotFmt::rate(1_000_000.0), "1.0M");
        assert_eq!(PlotFmt::rate(1_260_000.0), "1.3M");
        assert_eq!(PlotFmt::rate(2_300_000.0), "2.3M");
        assert_eq!(PlotFmt::rate(12_000_000.0), "12.0M");
    }

    #[test]
    fn rates() {
        assert_eq!(
            PlotFmt::rates(&[50_000.0, 0.0, 2_300_000.0]),
            "['50k', '0', '2.3M']"
        );
    }

    #[test]
    fn no_rates() {
        assert_eq!(PlotFmt::rates(&[]), "[]");
    }

    #[test]
    fn target_label() {
        assert_eq!(PlotFmt::target_label(100_000.0), "Target: 100k/s");
    }
}
