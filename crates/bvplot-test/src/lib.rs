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

//! Shared test fixtures for the BVPlot crates.
//!
//! Reports are produced as plain text so any crate in the workspace can use
//! them, including `bvplot-core` itself.
//!
//! ```rust
//! use bvplot_test::{write_cases, ReportBuilder};
//!
//! let dir = std::env::temp_dir().join("bvplot-test-doc");
//! let paths = write_cases(&dir, "ru", 0..2, |case| {
//!     ReportBuilder::standard().case(case).build()
//! })
//! .unwrap();
//! assert!(paths[1].ends_with("ru1.txt"));
//! # std::fs::remove_dir_all(&dir).ok();
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

mod report;

pub use report::{standard_report, Op, ReportBuilder, EXTRA_PLAIN_LATENCY};

/// Write one report per case into `dir` as `<prefix><case>.txt`.
///
/// `dir` is created if needed.
pub fn write_cases<I, F>(dir: &Path, prefix: &str, cases: I, mut report: F) -> io::Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = usize>,
    F: FnMut(usize) -> String,
{
    fs::create_dir_all(dir)?;
    cases
        .into_iter()
        .map(|case| {
            let path = dir.join(format!("{prefix}{case}.txt"));
            fs::write(&path, report(case))?;
            Ok(path)
        })
        .collect()
}
