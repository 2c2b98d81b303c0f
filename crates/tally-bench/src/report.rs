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

//! Textual renderings of comparison reports.
//!
//! Two variants exist, differing only in the unit of the average lines:
//! microseconds and seconds. On a tie the trailing "faster" line is
//! omitted.

use crate::comparator::ComparisonReport;
use crate::runner::BenchmarkResult;
use std::fmt;

impl ComparisonReport {
    /// Renders the report with averages in microseconds.
    ///
    /// ```text
    /// push vs. with_capacity - 30 executions
    ///
    /// push executed in on avg : 84 µs
    /// with_capacity executed in on avg : 42 µs
    ///
    /// with_capacity was faster by a factor of 2
    /// ```
    pub fn format_microseconds(&self) -> String {
        self.render(|result| format!("{} µs", result.avg_micros()))
    }

    /// Renders the report with averages in seconds.
    pub fn format_seconds(&self) -> String {
        self.render(|result| format!("{} s", result.avg_seconds()))
    }

    fn render<F>(&self, format_avg: F) -> String
    where
        F: Fn(&BenchmarkResult) -> String,
    {
        let mut out = format!(
            "{} vs. {} - {} executions\n\n",
            self.first.name, self.second.name, self.first.trials
        );
        out.push_str(&format!(
            "{} executed in on avg : {}\n",
            self.first.name,
            format_avg(&self.first)
        ));
        out.push_str(&format!(
            "{} executed in on avg : {}\n",
            self.second.name,
            format_avg(&self.second)
        ));
        if let Some(winner) = self.winner() {
            out.push_str(&format!(
                "\n{} was faster by a factor of {}\n",
                winner, self.speedup
            ));
        }
        out
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_microseconds())
    }
}
