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

//! Error types for statistics operations.

use thiserror::Error;

/// Result type for statistics operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Errors produced by statistics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// An aggregate that needs at least one value received an empty sample.
    #[error("{operation} requires a non-empty sample")]
    EmptySample {
        /// Name of the operation that was invoked.
        operation: &'static str,
    },

    /// A cumulative-count scan exhausted the histogram below the threshold.
    #[error("cumulative count {total} never reached threshold {threshold}")]
    ThresholdNotReached {
        /// The requested cumulative count.
        threshold: f64,
        /// Total count available in the histogram.
        total: f64,
    },

    /// An index was outside the bounds of the sample.
    #[error("index {index} out of range for sample of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sample.
        len: usize,
    },
}
