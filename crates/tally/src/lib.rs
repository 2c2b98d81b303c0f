// Dweve Tally - Benchmarking and Sample Statistics
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Tally - benchmarking and sample statistics
//!
//! Tally measures how long candidate functions take to run, averaged over
//! repeated trials, and summarizes numeric samples (including
//! pixel-histogram style frequency counts) with standard descriptive
//! statistics.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally::{descriptive, histogram, BenchConfig, Harness};
//!
//! // Summarize a sample of raw values.
//! let sample = [4.0, 1.0, 3.0, 2.0];
//! assert_eq!(descriptive::median(&sample).unwrap(), 2.5);
//! assert_eq!(descriptive::range(&sample).unwrap(), 3.0);
//!
//! // Read a histogram: counts per bucket, bucket value = index.
//! let counts = [10.0, 20.0, 30.0];
//! assert_eq!(histogram::rgb_value(&counts, 15.0).unwrap(), 1);
//!
//! // Compare two candidates under identical trials and arguments.
//! let mut harness = Harness::new(BenchConfig::default().with_trials(3));
//! let report = harness
//!     .compare(
//!         ("push", |n: &usize| {
//!             let mut v = Vec::new();
//!             for i in 0..*n {
//!                 v.push(i);
//!             }
//!         }),
//!         ("with_capacity", |n: &usize| {
//!             let mut v = Vec::with_capacity(*n);
//!             for i in 0..*n {
//!                 v.push(i);
//!             }
//!         }),
//!         &1_000,
//!     )
//!     .unwrap();
//! println!("{}", report.format_microseconds());
//! ```
//!
//! ## Crates
//!
//! - [`tally_stats`](tally_stats): descriptive and histogram-weighted
//!   statistics ([`descriptive`], [`histogram`], [`sample`])
//! - [`tally_bench`](tally_bench): the A/B benchmark harness
//! - [`tally_log`](tally_log): line logging and value dumps

// Re-export statistics modules and errors
pub use tally_stats::{descriptive, histogram, sample, StatsError};

// Re-export the benchmark harness surface
pub use tally_bench::{
    BenchConfig, BenchError, BenchmarkResult, Clock, ComparisonReport, Harness, MonotonicClock,
    Verdict, DEFAULT_TRIALS,
};

// Re-export diagnostics
pub use tally_log::{log_line, object_content};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_and_bench_compose() {
        // Average the per-trial totals of a few runs through the stats API.
        let mut harness = Harness::new(BenchConfig::default());
        let mut totals = Vec::new();
        for _ in 0..3 {
            let result = harness
                .run_trials("spin", 2, |n: &u64| {
                    let _ = (0..*n).sum::<u64>();
                }, &100)
                .unwrap();
            totals.push(result.total.as_micros() as f64);
        }
        assert_eq!(descriptive::count(&totals), 3);
        assert!(descriptive::min(&totals).unwrap() <= descriptive::max(&totals).unwrap());
    }

    #[test]
    fn test_report_dump() {
        let mut harness = Harness::new(BenchConfig::default());
        let result = harness.run_trials("noop", 1, |_: &()| {}, &()).unwrap();
        let dump = object_content(&result).unwrap();
        assert!(dump.contains("property name is \"noop\""));
        assert!(dump.contains("property trials is 1"));
    }
}
