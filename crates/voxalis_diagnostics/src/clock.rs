//! Wall-clock measurement of callbacks.

use std::fmt;
use std::time::{Duration, Instant};

/// Nanoseconds per tick.
const NANOS_PER_TICK: u128 = 100;

/// Unit a measurement is reported in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DurationUnit {
    /// Milliseconds
    #[default]
    Milliseconds,
    /// Seconds
    Seconds,
    /// Minutes
    Minutes,
    /// Hours
    Hours,
    /// Days
    Days,
    /// Whole 100ns ticks
    Ticks,
}

impl DurationUnit {
    /// Short suffix used in reports.
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Milliseconds => "ms",
            Self::Seconds => "s",
            Self::Minutes => "m",
            Self::Hours => "h",
            Self::Days => "d",
            Self::Ticks => "t",
        }
    }

    /// Expresses `duration` in this unit.
    #[must_use]
    pub fn convert(self, duration: Duration) -> f64 {
        let seconds = duration.as_secs_f64();
        match self {
            Self::Milliseconds => seconds * 1_000.0,
            Self::Seconds => seconds,
            Self::Minutes => seconds / 60.0,
            Self::Hours => seconds / 3_600.0,
            Self::Days => seconds / 86_400.0,
            Self::Ticks => (duration.as_nanos() / NANOS_PER_TICK) as f64,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Min, max and average of repeated timings, in one unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Fastest run
    pub min: f64,
    /// Slowest run
    pub max: f64,
    /// Mean of all runs
    pub average: f64,
}

/// Callback timer.
pub struct Clock;

impl Clock {
    /// Times a single call.
    pub fn measure<F: FnOnce()>(callback: F, unit: DurationUnit) -> f64 {
        let start = Instant::now();
        callback();
        unit.convert(start.elapsed())
    }

    /// Times `iterations` calls after one untimed warm-up call.
    ///
    /// Zero iterations are treated as one.
    pub fn measure_iterations<F: FnMut()>(
        iterations: usize,
        mut callback: F,
        unit: DurationUnit,
    ) -> Measurement {
        let iterations = iterations.max(1);

        // Warm-up: first call pays for cold caches and lazy init.
        callback();

        let mut min = f64::MAX;
        let mut max = 0.0f64;
        let mut total = 0.0f64;

        for _ in 0..iterations {
            let time = Self::measure(&mut callback, unit);
            total += time;
            min = min.min(time);
            max = max.max(time);
        }

        Measurement {
            min,
            max,
            average: total / iterations as f64,
        }
    }

    /// Times a single call and formats it as `"label # 1.23ms"`.
    pub fn measure_to_string<F: FnOnce()>(label: &str, callback: F, unit: DurationUnit) -> String {
        format!("{label} # {}{unit}", Self::measure(callback, unit))
    }

    /// Times a single call and logs the result.
    pub fn log<F: FnOnce()>(label: &str, callback: F, unit: DurationUnit) {
        tracing::info!("{}", Self::measure_to_string(label, callback, unit));
    }
}
