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

//! Error types for benchmarking operations.

use thiserror::Error;

/// Result type for benchmarking operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while setting up a benchmark run.
///
/// Failures *inside* a candidate function are never converted into a
/// `BenchError`; they unwind to the caller unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchError {
    /// A run was requested with zero trials.
    #[error("trial count must be at least 1, got {requested}")]
    InvalidTrialCount {
        /// The trial count that was passed in.
        requested: u64,
    },
}
