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

//! Two-candidate comparison.
//!
//! Both candidates run under the same trial count and receive the same
//! argument value; the winner is decided on the truncated microsecond
//! averages, so two runs that render identically also tie.

use crate::error::Result;
use crate::measurement::Clock;
use crate::runner::{BenchmarkResult, Harness};

/// Identifies which candidate in a comparison was faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Verdict {
    /// The first candidate had the lower average time.
    FirstFaster,
    /// The second candidate had the lower average time.
    SecondFaster,
    /// Both candidates had the same average time.
    NoDifference,
}

/// Result of benchmarking two candidates under the same trial count.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonReport {
    /// Result for the first candidate.
    pub first: BenchmarkResult,
    /// Result for the second candidate.
    pub second: BenchmarkResult,
    /// Factor by which the faster candidate beat the slower one, truncated
    /// to one decimal place. `1.0` on a tie; infinite when the faster
    /// average truncated to zero microseconds while the slower did not.
    pub speedup: f64,
    /// Which candidate won.
    pub verdict: Verdict,
}

impl ComparisonReport {
    /// Builds a report from two results measured under the same trial
    /// count.
    pub fn from_results(first: BenchmarkResult, second: BenchmarkResult) -> Self {
        debug_assert_eq!(first.trials, second.trials);
        let t1 = first.avg_micros();
        let t2 = second.avg_micros();
        let verdict = match t1.cmp(&t2) {
            std::cmp::Ordering::Less => Verdict::FirstFaster,
            std::cmp::Ordering::Greater => Verdict::SecondFaster,
            std::cmp::Ordering::Equal => Verdict::NoDifference,
        };
        Self {
            first,
            second,
            speedup: speedup_factor(t1, t2),
            verdict,
        }
    }

    /// Name of the winning candidate, if any.
    pub fn winner(&self) -> Option<&str> {
        match self.verdict {
            Verdict::FirstFaster => Some(&self.first.name),
            Verdict::SecondFaster => Some(&self.second.name),
            Verdict::NoDifference => None,
        }
    }
}

/// Factor by which the faster average beat the slower one, truncated to
/// one decimal place.
fn speedup_factor(t1: u64, t2: u64) -> f64 {
    let (fast, slow) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
    if fast == 0 {
        if slow == 0 {
            1.0
        } else {
            f64::INFINITY
        }
    } else {
        (10.0 * slow as f64 / fast as f64).trunc() / 10.0
    }
}

impl<C: Clock> Harness<C> {
    /// Benchmarks two candidates with the configured trial count and
    /// identical arguments.
    ///
    /// Each candidate is a `(name, function)` pair; both functions receive
    /// the same `args` value on every trial. The first candidate runs to
    /// completion before the second starts.
    ///
    /// # Errors
    ///
    /// [`crate::BenchError::InvalidTrialCount`] if the configured trial
    /// count is zero.
    pub fn compare<A, F, G>(
        &mut self,
        first: (&str, F),
        second: (&str, G),
        args: &A,
    ) -> Result<ComparisonReport>
    where
        F: FnMut(&A),
        G: FnMut(&A),
    {
        let trials = self.config().trials;
        self.compare_with_trials(first, second, args, trials)
    }

    /// Like [`Harness::compare`] with an explicit trial count.
    pub fn compare_with_trials<A, F, G>(
        &mut self,
        (first_name, f): (&str, F),
        (second_name, g): (&str, G),
        args: &A,
        trials: u64,
    ) -> Result<ComparisonReport>
    where
        F: FnMut(&A),
        G: FnMut(&A),
    {
        let first = self.run_trials(first_name, trials, f, args)?;
        let second = self.run_trials(second_name, trials, g, args)?;
        Ok(ComparisonReport::from_results(first, second))
    }
}
