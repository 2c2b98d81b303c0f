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

//! Line-oriented file logging.

use chrono::Local;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Appends `message` as one line to the file at `path`.
///
/// The file is created if missing, opened in append mode, flushed, and
/// closed before returning, so every call leaves a complete line on disk
/// even if the process dies afterwards. With `timestamp` set, the line is
/// prefixed with the local wall-clock time.
///
/// # Errors
///
/// Any I/O error from opening or writing the file.
///
/// # Example
///
/// ```no_run
/// tally_log::log_line("run.log", "comparison finished", true).unwrap();
/// ```
pub fn log_line(path: impl AsRef<Path>, message: &str, timestamp: bool) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    if timestamp {
        writeln!(
            file,
            "{} : {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            message
        )?;
    } else {
        writeln!(file, "{}", message)?;
    }
    file.flush()
}
