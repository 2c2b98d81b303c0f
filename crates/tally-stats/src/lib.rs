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

//! Descriptive statistics for numeric samples.
//!
//! A sample is an ordered `f64` slice. Two interpretations exist, selected
//! by the function invoked rather than by the data itself:
//!
//! - **Raw values** ([`descriptive`]): each element is an observation.
//! - **Histogram** ([`histogram`]): each index is a bucket value and each
//!   element the frequency count for that bucket, e.g. a 0-255
//!   pixel-intensity histogram.
//!
//! Samples are caller-owned; no function retains a reference beyond the
//! call, and only [`descriptive::sort`] mutates its input.
//!
//! # Modules
//!
//! - [`descriptive`]: statistics over raw values
//! - [`histogram`]: bucket-weighted statistics over frequency counts
//! - [`sample`]: element search and removal helpers
//!
//! # Example
//!
//! ```
//! use tally_stats::{descriptive, histogram};
//!
//! let sample = [4.0, 1.0, 3.0, 2.0];
//! assert_eq!(descriptive::median(&sample).unwrap(), 2.5);
//!
//! // Bucket 0 holds 10 counts, bucket 1 holds 20, bucket 2 holds 30.
//! let counts = [10.0, 20.0, 30.0];
//! assert_eq!(histogram::rgb_value(&counts, 15.0).unwrap(), 1);
//! ```

pub mod descriptive;
pub mod error;
pub mod histogram;
pub mod sample;

pub use error::{Result, StatsError};
