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

//! Diagnostic collaborators: line-oriented file logging and human-readable
//! value dumps.
//!
//! # Modules
//!
//! - [`line_log`]: append a message line, optionally timestamped, to a file
//! - [`dump`]: render a value's properties through its serde contract

pub mod dump;
pub mod line_log;

pub use dump::object_content;
pub use line_log::log_line;
