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

//! Report file loading with a size guard.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PlotError, Result};

/// Default maximum report size (64 MB).
///
/// Benchmark reports are a few kilobytes; anything this large is not a
/// report. Override with the `BVPLOT_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`] (in bytes).
pub const MAX_FILE_SIZE_ENV: &str = "BVPLOT_MAX_FILE_SIZE";

/// The size limit in effect, honouring [`MAX_FILE_SIZE_ENV`].
pub fn max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// The raw lines of one benchmark report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkFile {
    path: PathBuf,
    lines: Vec<String>,
}

impl BenchmarkFile {
    /// Build a report from in-memory text.
    ///
    /// `path` is only used for error messages and logging.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Self {
        Self {
            path: path.into(),
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Where the report came from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The report lines, without line terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Read a report file from disk.
///
/// # Errors
///
/// Returns [`PlotError::Io`] if the file cannot be read or is not UTF-8,
/// and [`PlotError::FileTooLarge`] if it exceeds the size limit.
pub fn load(path: impl AsRef<Path>) -> Result<BenchmarkFile> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| PlotError::io_error(path, e))?;

    let max = max_file_size();
    if metadata.len() > max {
        return Err(PlotError::FileTooLarge {
            path: path.to_path_buf(),
            actual: metadata.len(),
            max,
        });
    }

    let text = fs::read_to_string(path).map_err(|e| PlotError::io_error(path, e))?;
    let file = BenchmarkFile::from_text(path, &text);
    debug!(path = %path.display(), lines = file.lines.len(), "loaded report");
    Ok(file)
}
