// Dweve BVPlot - Bit-Vector Benchmark Plots
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

//! CLI command implementations

mod completion;
mod inspect;
mod render;
mod variants;

pub use completion::{completion, install_hint};
pub use inspect::inspect;
pub use render::{render, select_variant};
pub use variants::variants;

use crate::error::CliError;
use bvplot::model::loader::max_file_size;
use bvplot::PlotError;
use std::fs;
use std::io::{self, Write};

/// Read a text file, refusing anything over the loader's size limit.
///
/// The limit is the one report loading uses, so `BVPLOT_MAX_FILE_SIZE`
/// governs config files too.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, is too large, or is not UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        return Err(PlotError::FileTooLarge {
            path: path.into(),
            actual: metadata.len(),
            max,
        }
        .into());
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if the file cannot be written or stdout is closed.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}
