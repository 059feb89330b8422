//! # VOXALIS Diagnostics
//!
//! Lightweight timing for development builds and preview tools.
//!
//! - `Clock`: time one call, or many calls with min/max/average
//! - `Benchmark`: labelled cases, sorted reports
//!
//! Criterion benches cover the hot paths; these helpers are for quick
//! in-process comparisons that end up in the log.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod benchmark;
pub mod clock;

pub use benchmark::{Benchmark, BenchmarkReport, SortBy};
pub use clock::{Clock, DurationUnit, Measurement};
