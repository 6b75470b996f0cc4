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

//! Error types for report parsing and plot-data extraction.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::method::Method;

/// Result type for bvplot-core operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors raised while loading, slicing, and resolving a benchmark report.
///
/// Every variant carries enough context to locate the offending input:
/// the file path, the section, or the row index inside a section.
///
/// # Examples
///
/// ```
/// use bvplot_core::{Method, PlotError};
///
/// let err = PlotError::RowTooShort {
///     method: Method::Rank,
///     row: 4,
///     needed: 5,
///     actual: 3,
/// };
/// assert_eq!(
///     err.to_string(),
///     "Rank row 4 has 3 fields, needs at least 5"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// Reading the report file failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error message.
        message: String,
    },

    /// The report file exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes")]
    FileTooLarge {
        /// The offending file.
        path: PathBuf,
        /// Actual size in bytes.
        actual: u64,
        /// Configured maximum in bytes.
        max: u64,
    },

    /// The report has fewer lines than the fixed-offset layout addresses.
    #[error("Report has {actual} lines, the offset layout needs at least {needed}")]
    TooFewLines {
        /// Lines required by the layout.
        needed: usize,
        /// Lines present in the report.
        actual: usize,
    },

    /// No rows were found for a benchmark method.
    #[error("No {0} section found in report")]
    MissingSection(Method),

    /// A row does not have enough fields for the requested offset.
    #[error("{method} row {row} has {actual} fields, needs at least {needed}")]
    RowTooShort {
        /// Section the row belongs to.
        method: Method,
        /// Row index within the section.
        row: usize,
        /// Minimum field count.
        needed: usize,
        /// Field count found.
        actual: usize,
    },

    /// The label scheme addresses a row the section does not have.
    #[error("{method} section has no row {row}")]
    MissingRow {
        /// Section that was indexed.
        method: Method,
        /// Requested row index.
        row: usize,
    },

    /// A `key=value` field had no `=`.
    #[error("{method} row {row}: expected a key=value size field, got '{field}'")]
    MalformedField {
        /// Section the row belongs to.
        method: Method,
        /// Row index within the section.
        row: usize,
        /// The raw field text.
        field: String,
    },

    /// A value that must be numeric could not be parsed.
    #[error("Invalid {what}: '{value}' is not a number")]
    InvalidNumber {
        /// What the value represents (size, latency, ...).
        what: &'static str,
        /// The raw text.
        value: String,
    },

    /// The label scheme addresses more rows than the Access section has.
    #[error("Label scheme '{scheme}' has {labels} labels but the Access section has {rows} rows")]
    SchemeTooLong {
        /// Scheme name.
        scheme: String,
        /// Number of labels in the scheme.
        labels: usize,
        /// Number of Access rows.
        rows: usize,
    },

    /// Strict mode found a row whose benchmark name disagrees with its label.
    #[error("Row {row} is labelled '{expected}' but its benchmark is '{found}'")]
    LabelMismatch {
        /// Row index.
        row: usize,
        /// Label from the scheme.
        expected: String,
        /// Representation family derived from the benchmark name.
        found: String,
    },

    /// A configuration value is unusable.
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name.
        parameter: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A case index outside the variant's case table was requested.
    #[error("Case {case} is out of range (variant has {cases} cases)")]
    CaseOutOfRange {
        /// Requested case.
        case: usize,
        /// Number of cases in the table.
        cases: usize,
    },

    /// An error raised while processing a specific report file.
    #[error("In '{path}': {source}")]
    InReport {
        /// The report being processed.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: Box<PlotError>,
    },
}

impl PlotError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Attach the report path to an error that does not already name it.
    pub fn in_report(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Io { .. } | Self::FileTooLarge { .. } | Self::InReport { .. } => self,
            other => Self::InReport {
                path: path.into(),
                source: Box::new(other),
            },
        }
    }

    /// Create an invalid number error.
    pub fn invalid_number(what: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            what,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = PlotError::io_error(
            "ru0.txt",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("ru0.txt"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_in_report_wraps_once() {
        let err = PlotError::MissingSection(Method::Rank).in_report("rp3.txt");
        assert_eq!(
            err.to_string(),
            "In 'rp3.txt': No Rank section found in report"
        );
        assert_eq!(err.clone().in_report("other.txt"), err);

        let io = PlotError::io_error("ru1.txt", io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert_eq!(io.clone().in_report("ru1.txt"), io);
    }

    #[test]
    fn test_missing_section_display() {
        let err = PlotError::MissingSection(Method::Successor);
        assert_eq!(err.to_string(), "No Successor section found in report");
    }

    #[test]
    fn test_too_few_lines_display() {
        let err = PlotError::TooFewLines {
            needed: 105,
            actual: 40,
        };
        assert!(err.to_string().contains("40 lines"));
        assert!(err.to_string().contains("105"));
    }

    #[test]
    fn test_invalid_number_display() {
        let err = PlotError::invalid_number("latency", "fast");
        assert_eq!(err.to_string(), "Invalid latency: 'fast' is not a number");
    }
}
