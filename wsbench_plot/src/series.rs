use crate::report::{ComparisonReport, Format, Mode};
use std::collections::HashMap;

/// Client rates of each charted mode, one entry per mode in both rate
/// vectors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartSeries {
    modes: Vec<Mode>,
    json_rates: Vec<f64>,
    binary_rates: Vec<f64>,
}

impl ChartSeries {
    /// Extracts the chart series from a report:
    /// - modes are visited in `Mode::ALL` order and only kept if the report
    ///   has a rate for at least one of the two formats
    /// - a missing rate is charted as 0
    /// - if a (mode, format) pair appears more than once, the last one wins
    pub fn extract(report: &ComparisonReport) -> Self {
        let mut lookup = HashMap::new();
        for row in &report.results {
            match row.key() {
                Some(key) => {
                    lookup.insert(key, row.client_rate);
                }
                None => {
                    tracing::warn!(
                        "ignoring result with mode = {} and format = {}",
                        row.mode,
                        row.format
                    );
                }
            }
        }

        let mut series = Self::default();
        for mode in Mode::ALL {
            let json_rate = lookup.get(&(mode, Format::Json));
            let binary_rate = lookup.get(&(mode, Format::Binary));
            if json_rate.is_none() && binary_rate.is_none() {
                tracing::debug!("no results for mode {}", mode);
                continue;
            }
            series.modes.push(mode);
            series.json_rates.push(json_rate.copied().unwrap_or_default());
            series
                .binary_rates
                .push(binary_rate.copied().unwrap_or_default());
        }
        series
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    pub fn json_rates(&self) -> &[f64] {
        &self.json_rates
    }

    pub fn binary_rates(&self) -> &[f64] {
        &self.binary_rates
    }

    pub fn rates(&self, format: Format) -> &[f64] {
        match format {
            Format::Json => &self.json_rates,
            Format::Binary => &self.binary_rates,
        }
    }

    pub fn len(&self) -> usize {
        self.modes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    /// Largest rate across both formats (0 if the series is empty).
    pub fn max_rate(&self) -> f64 {
        self.json_rates
            .iter()
            .chain(self.binary_rates.iter())
            .copied()
            .fold(0f64, f64::max)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Mode, f64, f64)> + '_ {
        self.modes
            .iter()
            .zip(self.json_rates.iter())
            .zip(self.binary_rates.iter())
            .map(|((&mode, &json), &binary)| (mode, json, binary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ResultRow;

    fn report(results: Vec<ResultRow>) -> ComparisonReport {
        ComparisonReport {
            timestamp: "t".into(),
            server: "s".into(),
            target_rate: 100_000f64.into(),
            duration: 10f64.into(),
            results,
        }
    }

    #[test]
    fn single_mode() {
        let input = r#"{"timestamp":"t","server":"s","targetRate":100000,"duration":10,"results":[{"mode":"browser-headless","format":"json","clientRate":50000},{"mode":"browser-headless","format":"binary","clientRate":90000}]}"#;
        let report: ComparisonReport = input.parse().unwrap();
        let series = ChartSeries::extract(&report);
        assert_eq!(series.modes(), &[Mode::BrowserHeadless]);
        assert_eq!(series.json_rates(), &[50000.0]);
        assert_eq!(series.binary_rates(), &[90000.0]);
        assert_eq!(series.max_rate(), 90000.0);
    }

    #[test]
    fn canonical_order_and_missing_rates() {
        let series = ChartSeries::extract(&report(vec![
            ResultRow::new(Mode::TauriRust, Format::Binary, 800_000.0),
            ResultRow::new(Mode::TauriJs, Format::Json, 120_000.0),
            ResultRow::new(Mode::BrowserHeadless, Format::Json, 200_000.0),
            ResultRow::new(Mode::TauriRust, Format::Json, 300_000.0),
        ]));
        assert_eq!(
            series.modes(),
            &[Mode::BrowserHeadless, Mode::TauriJs, Mode::TauriRust]
        );
        assert_eq!(series.json_rates(), &[200_000.0, 120_000.0, 300_000.0]);
        assert_eq!(series.binary_rates(), &[0.0, 0.0, 800_000.0]);
        let rows: Vec<_> = series.iter().collect();
        assert_eq!(rows[2], (Mode::TauriRust, 300_000.0, 800_000.0));
    }

    #[test]
    fn last_write_wins() {
        let series = ChartSeries::extract(&report(vec![
            ResultRow::new(Mode::BrowserDefault, Format::Json, 1.0),
            ResultRow::new(Mode::BrowserDefault, Format::Json, 2.0),
        ]));
        assert_eq!(series.rates(Format::Json), &[2.0]);
        assert_eq!(series.rates(Format::Binary), &[0.0]);
    }

    #[test]
    fn unknown_rows_yield_no_data() {
        let mut unknown = ResultRow::new(Mode::TauriJs, Format::Json, 5.0);
        unknown.mode = String::from("electron");
        let series = ChartSeries::extract(&report(vec![unknown]));
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert_eq!(series.max_rate(), 0.0);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::report::ResultRow;
    use quickcheck_macros::quickcheck;

    // (mode index, is binary, rate)
    type Row = (u8, bool, u32);

    fn to_report(rows: &[Row]) -> ComparisonReport {
        let results = rows
            .iter()
            .map(|&(mode, binary, rate)| {
                let mode = Mode::ALL[mode as usize % Mode::ALL.len()];
                let format = if binary { Format::Binary } else { Format::Json };
                ResultRow::new(mode, format, rate as f64)
            })
            .collect();
        ComparisonReport {
            timestamp: "t".into(),
            server: "s".into(),
            target_rate: 0f64.into(),
            duration: 0f64.into(),
            results,
        }
    }

    #[quickcheck]
    fn parallel_vectors_in_canonical_order(rows: Vec<Row>) -> bool {
        let report = to_report(&rows);
        let series = ChartSeries::extract(&report);

        let same_len = series.json_rates().len() == series.len()
            && series.binary_rates().len() == series.len();
        // strictly increasing positions in `Mode::ALL`
        let canonical = series.modes().windows(2).all(|w| w[0] < w[1]);
        // non-empty input always charts something
        let non_empty = rows.is_empty() || !series.is_empty();
        same_len && canonical && non_empty
    }

    #[quickcheck]
    fn absent_pairs_are_zero(rows: Vec<Row>) -> bool {
        let report = to_report(&rows);
        let series = ChartSeries::extract(&report);
        let zero_filled = series.iter().all(|(mode, json, binary)| {
            let last = |format: Format| {
                report
                    .results
                    .iter()
                    .rev()
                    .find(|row| row.key() == Some((mode, format)))
                    .map(|row| row.client_rate)
                    .unwrap_or(0f64)
            };
            json == last(Format::Json) && binary == last(Format::Binary)
        });
        zero_filled
    }
}
