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

//! Benchmark configuration.
//!
//! Configuration is owned by each harness instance; there is no
//! process-wide state. Comparative runs read the trial count from the
//! harness they were invoked on.

/// Default number of trials for comparative runs.
pub const DEFAULT_TRIALS: u64 = 30;

/// Configuration for benchmark execution.
///
/// Validation happens at run time: a trial count of zero is rejected by the
/// runner, not by the builder.
///
/// # Example
///
/// ```
/// use tally_bench::{BenchConfig, DEFAULT_TRIALS};
///
/// let config = BenchConfig::default();
/// assert_eq!(config.trials, DEFAULT_TRIALS);
///
/// let config = BenchConfig::default().with_trials(5);
/// assert_eq!(config.trials, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of trials per candidate in comparative runs.
    pub trials: u64,
}

impl BenchConfig {
    /// Creates a configuration with the default trial count.
    pub fn new() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
        }
    }

    /// Sets the trial count for comparative runs.
    pub fn with_trials(mut self, trials: u64) -> Self {
        self.trials = trials;
        self
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new()
    }
}
