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

//! Whitespace tokenizer and the row record it produces.

use crate::method::Method;

/// Marker used as the first field of a sentinel row.
pub const SENTINEL_MARKER: &str = "-";

/// Width reported for sentinel rows: the marker plus four null fields.
pub const SENTINEL_WIDTH: usize = 5;

/// One tokenized report line.
///
/// A row is either real data (every field is present) or the synthetic
/// sentinel appended to short sections, whose fields after the marker
/// are all null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    fields: Vec<String>,
    sentinel: bool,
}

impl Row {
    /// Split a line on runs of whitespace after trimming it.
    ///
    /// There is no quoting: a field can never contain whitespace.
    ///
    /// ```
    /// use bvplot_core::Row;
    ///
    /// let row = Row::tokenize("  BM_rank_sd/0   41 ns \t 41 ns  1000 ");
    /// assert_eq!(row.fields(), &["BM_rank_sd/0", "41", "ns", "41", "ns", "1000"]);
    /// ```
    pub fn tokenize(line: &str) -> Self {
        Self {
            fields: line.split_whitespace().map(str::to_owned).collect(),
            sentinel: false,
        }
    }

    /// The placeholder row used to pad Select and Successor sections.
    pub fn sentinel() -> Self {
        Self {
            fields: vec![SENTINEL_MARKER.to_owned()],
            sentinel: true,
        }
    }

    /// Whether this is a padding row.
    pub fn is_sentinel(&self) -> bool {
        self.sentinel
    }

    /// The non-null fields of the row.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of fields, counting null sentinel fields.
    pub fn width(&self) -> usize {
        if self.sentinel {
            SENTINEL_WIDTH
        } else {
            self.fields.len()
        }
    }

    /// The `n`-th field counted from the end (`1` is the last field).
    ///
    /// Returns `None` when the row is too short or the field is a null
    /// sentinel field.
    pub fn from_end(&self, n: usize) -> Option<&str> {
        if n == 0 || self.sentinel {
            return None;
        }
        let idx = self.fields.len().checked_sub(n)?;
        self.fields.get(idx).map(String::as_str)
    }

    /// First field, normally the benchmark name.
    pub fn name(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Parse the benchmark name in the first field, if it has the
    /// `BM_<method>_<family>...` shape.
    pub fn benchmark(&self) -> Option<BenchmarkName<'_>> {
        if self.sentinel {
            return None;
        }
        self.name().and_then(BenchmarkName::parse)
    }
}

/// The parts of a Google Benchmark name this tool cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkName<'a> {
    /// Full benchmark name.
    pub full: &'a str,
    /// Operation keyword (`access`, `rank`, ...).
    pub method: &'a str,
    /// Vector family (`bv`, `s9`, `s18`, `rrr`, `sd`, `hyb`).
    pub family: &'a str,
}

impl<'a> BenchmarkName<'a> {
    /// Parse `BM_access_s9<sdsl::s9_vector<8>>/0` into its method and
    /// family parts.
    pub fn parse(full: &'a str) -> Option<Self> {
        let rest = full.strip_prefix("BM_")?;
        let (method, tail) = rest.split_once('_')?;
        let end = tail.find(|c| c == '<' || c == '/').unwrap_or(tail.len());
        let family = &tail[..end];
        if method.is_empty() || family.is_empty() {
            return None;
        }
        Some(Self {
            full,
            method,
            family,
        })
    }

    /// The benchmarked operation, if the keyword is known.
    pub fn method(&self) -> Option<Method> {
        Method::from_keyword(self.method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_collapses_whitespace() {
        let a = Row::tokenize("a b  c\t\td");
        let b = Row::tokenize("a b c d");
        assert_eq!(a, b);
        assert_eq!(a.width(), 4);
    }

    #[test]
    fn test_tokenize_empty_line() {
        let row = Row::tokenize("   \t ");
        assert!(row.fields().is_empty());
        assert_eq!(row.name(), None);
    }

    #[test]
    fn test_from_end() {
        let row = Row::tokenize("n 1 ns 2 ns 3 bits=1 comp=2 size=3");
        assert_eq!(row.from_end(1), Some("size=3"));
        assert_eq!(row.from_end(2), Some("comp=2"));
        assert_eq!(row.from_end(8), Some("1"));
        assert_eq!(row.from_end(9), Some("n"));
        assert_eq!(row.from_end(10), None);
        assert_eq!(row.from_end(0), None);
    }

    #[test]
    fn test_sentinel_has_null_fields() {
        let row = Row::sentinel();
        assert!(row.is_sentinel());
        assert_eq!(row.width(), SENTINEL_WIDTH);
        assert_eq!(row.name(), Some(SENTINEL_MARKER));
        assert_eq!(row.from_end(2), None);
        assert_eq!(row.benchmark(), None);
    }

    #[test]
    fn test_benchmark_name_templated() {
        let name = BenchmarkName::parse("BM_access_s9<sdsl::s9_vector<8>>/0").unwrap();
        assert_eq!(name.method, "access");
        assert_eq!(name.family, "s9");
        assert_eq!(name.method(), Some(Method::Access));
    }

    #[test]
    fn test_benchmark_name_plain_function() {
        let name = BenchmarkName::parse("BM_rank_hyb/3").unwrap();
        assert_eq!(name.method(), Some(Method::Rank));
        assert_eq!(name.family, "hyb");
    }

    #[test]
    fn test_benchmark_name_rejects_other_text() {
        assert_eq!(BenchmarkName::parse("Benchmark"), None);
        assert_eq!(BenchmarkName::parse("-------"), None);
        assert_eq!(BenchmarkName::parse("BM_access"), None);
    }
}
