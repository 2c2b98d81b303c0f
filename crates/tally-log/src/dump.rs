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

//! Human-readable dumps of structured values.

use serde::Serialize;
use serde_json::Value;
use std::fmt::Write;

/// Renders the top-level properties of `value`, one line per property.
///
/// The value is serialized through serde, so the dump follows the type's
/// serialization contract: renamed or skipped fields appear here exactly
/// as they would in an export. Non-object values (numbers, strings,
/// sequences) render as a single `value is ...` line.
///
/// # Errors
///
/// Any serialization error from the type's `Serialize` implementation.
///
/// # Example
///
/// ```
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Run {
///     trials: u64,
///     label: String,
/// }
///
/// let run = Run { trials: 30, label: "baseline".to_string() };
/// let dump = tally_log::object_content(&run).unwrap();
/// assert!(dump.contains("property trials is 30"));
/// assert!(dump.contains("property label is \"baseline\""));
/// ```
pub fn object_content<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let value = serde_json::to_value(value)?;
    let mut out = String::new();
    match value {
        Value::Object(map) => {
            for (name, val) in map {
                let _ = writeln!(out, "property {} is {}", name, val);
            }
        }
        other => {
            let _ = writeln!(out, "value is {}", other);
        }
    }
    Ok(out)
}
