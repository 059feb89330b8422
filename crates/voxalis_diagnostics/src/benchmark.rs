//! Labelled micro-benchmarks.

use std::fmt;

use crate::clock::{Clock, DurationUnit, Measurement};

/// Statistic used to order benchmark reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortBy {
    /// Keep insertion order
    #[default]
    None,
    /// Fastest run first
    Min,
    /// Lowest worst case first
    Max,
    /// Lowest mean first
    Average,
}

/// Timing of one benchmark case.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkReport {
    /// Case label
    pub label: String,
    /// Collected timings
    pub measurement: Measurement,
    /// Unit of `measurement`
    pub unit: DurationUnit,
    /// Statistic the report was sorted by; it is printed first
    pub sort_by: SortBy,
}

impl BenchmarkReport {
    fn key(&self, sort_by: SortBy) -> f64 {
        match sort_by {
            SortBy::None | SortBy::Min => self.measurement.min,
            SortBy::Max => self.measurement.max,
            SortBy::Average => self.measurement.average,
        }
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.measurement;
        let unit = self.unit;
        let min = ("Min", m.min);
        let max = ("Max", m.max);
        let avg = ("Average", m.average);

        let order = match self.sort_by {
            SortBy::None | SortBy::Min => [min, max, avg],
            SortBy::Max => [max, min, avg],
            SortBy::Average => [avg, min, max],
        };

        write!(f, "{} # ", self.label)?;
        for (name, value) in order {
            write!(f, "[ {name}: {value}{unit} ]")?;
        }
        Ok(())
    }
}

/// Sorts reports ascending by `sort_by`. `SortBy::None` keeps the order.
pub fn sort_reports(reports: &mut [BenchmarkReport], sort_by: SortBy) {
    for report in reports.iter_mut() {
        report.sort_by = sort_by;
    }
    if sort_by != SortBy::None {
        reports.sort_by(|a, b| a.key(sort_by).total_cmp(&b.key(sort_by)));
    }
}

/// A set of labelled callbacks timed with the same iteration count.
///
/// ```
/// use voxalis_diagnostics::{Benchmark, SortBy};
///
/// let mut bench = Benchmark::new(10);
/// bench.add("sum", || {
///     let _ = (0..1000u64).sum::<u64>();
/// });
/// let reports = bench.process(SortBy::Average);
/// assert_eq!(reports.len(), 1);
/// ```
pub struct Benchmark<'a> {
    iterations: usize,
    unit: DurationUnit,
    cases: Vec<(String, Box<dyn FnMut() + 'a>)>,
}

impl<'a> Benchmark<'a> {
    /// Creates an empty benchmark reporting in milliseconds.
    #[must_use]
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            unit: DurationUnit::Milliseconds,
            cases: Vec::new(),
        }
    }

    /// Sets the unit reports are expressed in.
    pub fn set_unit(&mut self, unit: DurationUnit) -> &mut Self {
        self.unit = unit;
        self
    }

    /// Registers a case.
    pub fn add(&mut self, label: impl Into<String>, callback: impl FnMut() + 'a) -> &mut Self {
        self.cases.push((label.into(), Box::new(callback)));
        self
    }

    /// Number of registered cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if no case is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Runs every case, logs each report and returns them sorted.
    pub fn process(&mut self, sort_by: SortBy) -> Vec<BenchmarkReport> {
        if self.cases.is_empty() {
            tracing::warn!("Benchmark has no cases to run");
            return Vec::new();
        }

        let iterations = self.iterations;
        let unit = self.unit;

        let mut reports: Vec<BenchmarkReport> = self
            .cases
            .iter_mut()
            .map(|(label, callback)| BenchmarkReport {
                label: label.clone(),
                measurement: Clock::measure_iterations(iterations, callback, unit),
                unit,
                sort_by,
            })
            .collect();

        sort_reports(&mut reports, sort_by);

        for report in &reports {
            tracing::info!("{report}");
        }

        reports
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(label: &str, min: f64, max: f64, average: f64) -> BenchmarkReport {
        BenchmarkReport {
            label: label.to_string(),
            measurement: Measurement { min, max, average },
            unit: DurationUnit::Milliseconds,
            sort_by: SortBy::None,
        }
    }

    fn labels(reports: &[BenchmarkReport]) -> Vec<&str> {
        reports.iter().map(|r| r.label.as_str()).collect()
    }

    fn sample() -> Vec<BenchmarkReport> {
        vec![
            report("a", 3.0, 4.0, 3.5),
            report("b", 1.0, 9.0, 5.0),
            report("c", 2.0, 2.5, 2.2),
        ]
    }

    #[test]
    fn test_sort_by_each_statistic() {
        let mut reports = sample();
        sort_reports(&mut reports, SortBy::None);
        assert_eq!(labels(&reports), ["a", "b", "c"]);

        sort_reports(&mut reports, SortBy::Min);
        assert_eq!(labels(&reports), ["b", "c", "a"]);

        sort_reports(&mut reports, SortBy::Max);
        assert_eq!(labels(&reports), ["c", "a", "b"]);

        sort_reports(&mut reports, SortBy::Average);
        assert_eq!(labels(&reports), ["c", "a", "b"]);
    }

    #[test]
    fn test_display_leads_with_sort_key() {
        let mut r = report("x", 1.0, 3.0, 2.0);
        assert_eq!(r.to_string(), "x # [ Min: 1ms ][ Max: 3ms ][ Average: 2ms ]");

        r.sort_by = SortBy::Max;
        assert_eq!(r.to_string(), "x # [ Max: 3ms ][ Min: 1ms ][ Average: 2ms ]");

        r.sort_by = SortBy::Average;
        assert_eq!(r.to_string(), "x # [ Average: 2ms ][ Min: 1ms ][ Max: 3ms ]");
    }

    #[test]
    fn test_empty_benchmark() {
        let mut bench = Benchmark::new(3);
        assert!(bench.is_empty());
        assert!(bench.process(SortBy::Min).is_empty());
    }

    #[test]
    fn test_process_runs_every_case() {
        let mut first = 0;
        let mut second = 0;
        {
            let mut bench = Benchmark::new(4);
            bench
                .set_unit(DurationUnit::Ticks)
                .add("first", || first += 1)
                .add("second", || second += 1);
            assert_eq!(bench.len(), 2);

            let reports = bench.process(SortBy::None);
            assert_eq!(labels(&reports), ["first", "second"]);
            assert!(reports.iter().all(|r| r.unit == DurationUnit::Ticks));
        }
        // Warm-up plus four timed calls.
        assert_eq!(first, 5);
        assert_eq!(second, 5);
    }
}
