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

//! Trial execution and per-candidate results.

use crate::config::BenchConfig;
use crate::error::{BenchError, Result};
use crate::measurement::{Clock, MonotonicClock};
use std::time::Duration;

/// Result of running one candidate for a fixed number of trials.
///
/// A fresh value object per run; runs share no state.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BenchmarkResult {
    /// Name of the measured candidate.
    pub name: String,
    /// Number of trials that were run.
    pub trials: u64,
    /// Total time accumulated across all trials.
    pub total: Duration,
}

impl BenchmarkResult {
    /// Average time per trial, truncated to whole microseconds.
    pub fn avg_micros(&self) -> u64 {
        (self.total.as_micros() / u128::from(self.trials.max(1))) as u64
    }

    /// Average time per trial in seconds.
    ///
    /// Derived from the truncated microsecond average, so two results that
    /// render identically in microseconds also render identically here.
    pub fn avg_seconds(&self) -> f64 {
        self.avg_micros() as f64 / 1_000_000.0
    }

    /// One-line description of the average, e.g.
    /// `fill_buffer executed in on avg : 42 µs`.
    pub fn summary(&self) -> String {
        format!("{} executed in on avg : {} µs", self.name, self.avg_micros())
    }
}

/// Runs candidate functions for a fixed number of trials and averages
/// their execution time.
///
/// The harness owns its [`BenchConfig`] and its [`Clock`]; nothing is
/// shared between harness instances.
///
/// # Example
///
/// ```
/// use tally_bench::{BenchConfig, Harness};
///
/// let mut harness = Harness::new(BenchConfig::default());
/// let result = harness
///     .run_trials("sum", 10, |n: &u64| {
///         let _ = (0..*n).sum::<u64>();
///     }, &1_000)
///     .unwrap();
/// assert_eq!(result.trials, 10);
/// println!("{}", result.summary());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Harness<C = MonotonicClock> {
    config: BenchConfig,
    clock: C,
}

impl Harness<MonotonicClock> {
    /// Creates a harness measuring with the monotonic system clock.
    pub fn new(config: BenchConfig) -> Self {
        Self {
            config,
            clock: MonotonicClock,
        }
    }
}

impl<C: Clock> Harness<C> {
    /// Creates a harness with a caller-supplied clock.
    pub fn with_clock(config: BenchConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Returns the harness configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs `f(args)` exactly `trials` times and returns the timing result.
    ///
    /// Each trial is timed separately and the elapsed times are summed;
    /// there is no warmup invocation. The run blocks the calling thread
    /// until all trials complete. A panic inside `f` aborts the remaining
    /// trials and unwinds to the caller; no partial result is produced.
    ///
    /// # Errors
    ///
    /// [`BenchError::InvalidTrialCount`] if `trials` is zero.
    pub fn run_trials<A, F>(
        &mut self,
        name: &str,
        trials: u64,
        mut f: F,
        args: &A,
    ) -> Result<BenchmarkResult>
    where
        F: FnMut(&A),
    {
        if trials == 0 {
            return Err(BenchError::InvalidTrialCount { requested: trials });
        }

        let mut total = Duration::ZERO;
        for _ in 0..trials {
            total += self.clock.time(|| f(args));
        }

        Ok(BenchmarkResult {
            name: name.to_string(),
            trials,
            total,
        })
    }
}
