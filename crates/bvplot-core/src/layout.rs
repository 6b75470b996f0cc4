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

//! Section extraction strategies.
//!
//! A report is the console output of the bit-vector benchmark suite: a
//! three-line column header before each method's block, then one line per
//! benchmark. Two strategies turn it into [`Sections`]:
//!
//! - [`NamedLayout`] classifies every `BM_<method>_...` line by the method
//!   keyword in its name and ignores everything else. Shifting the file by
//!   a line does not change the result.
//! - [`OffsetLayout`] slices fixed line ranges. It reproduces the historic
//!   behavior exactly and is kept for reports whose benchmark names were
//!   edited away.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};
use crate::loader::BenchmarkFile;
use crate::method::Method;
use crate::row::Row;
use crate::section::Sections;

/// How to find the four sections in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum Layout {
    /// Classify rows by benchmark name.
    Named(NamedLayout),
    /// Slice fixed line ranges.
    Offsets(OffsetLayout),
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Named(NamedLayout::default())
    }
}

impl Layout {
    /// Split `file` into sections, padding Select and Successor with a
    /// sentinel row.
    ///
    /// # Errors
    ///
    /// [`PlotError::TooFewLines`] for an offset layout on a short file,
    /// [`PlotError::MissingSection`] for a named layout that finds no rows
    /// for some method.
    pub fn extract(&self, file: &BenchmarkFile) -> Result<Sections> {
        match self {
            Layout::Named(named) => named.extract(file.lines()),
            Layout::Offsets(offsets) => offsets.extract(file.lines()),
        }
    }

    /// Short name used on the command line.
    pub fn kind(&self) -> LayoutKind {
        match self {
            Layout::Named(_) => LayoutKind::Named,
            Layout::Offsets(_) => LayoutKind::Offsets,
        }
    }
}

/// Layout selector without parameters, for command-line use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    /// [`NamedLayout::default`].
    Named,
    /// [`OffsetLayout::default`].
    Offsets,
}

impl LayoutKind {
    /// The default layout of this kind.
    pub fn layout(self) -> Layout {
        match self {
            LayoutKind::Named => Layout::Named(NamedLayout::default()),
            LayoutKind::Offsets => Layout::Offsets(OffsetLayout::default()),
        }
    }
}

impl FromStr for LayoutKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "named" => Ok(LayoutKind::Named),
            "offsets" => Ok(LayoutKind::Offsets),
            other => Err(PlotError::invalid_config(
                "layout",
                format!("unknown layout '{other}' (expected 'named' or 'offsets')"),
            )),
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::Named => f.write_str("named"),
            LayoutKind::Offsets => f.write_str("offsets"),
        }
    }
}

/// A half-open range of zero-based line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineRange {
    /// First line, inclusive.
    pub start: usize,
    /// Last line, exclusive.
    pub end: usize,
}

impl LineRange {
    /// Lines `start..end`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Fixed line ranges for each section.
///
/// Each section may be made of several ranges, concatenated in order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OffsetLayout {
    /// Access rows.
    pub access: Vec<LineRange>,
    /// Rank rows.
    pub rank: Vec<LineRange>,
    /// Select rows.
    pub select: Vec<LineRange>,
    /// Successor rows.
    pub successor: Vec<LineRange>,
}

impl Default for OffsetLayout {
    /// The suite's console layout. Successor skips lines 81..84, the three
    /// extra plain-vector rank/select combinations.
    fn default() -> Self {
        Self {
            access: vec![LineRange::new(3, 26)],
            rank: vec![LineRange::new(29, 52)],
            select: vec![LineRange::new(55, 77)],
            successor: vec![LineRange::new(80, 81), LineRange::new(84, 105)],
        }
    }
}

impl OffsetLayout {
    fn ranges(&self, method: Method) -> &[LineRange] {
        match method {
            Method::Access => &self.access,
            Method::Rank => &self.rank,
            Method::Select => &self.select,
            Method::Successor => &self.successor,
        }
    }

    /// Number of lines a report must have for every range to exist.
    pub fn required_lines(&self) -> usize {
        Method::ALL
            .into_iter()
            .flat_map(|m| self.ranges(m).iter())
            .map(|r| r.end)
            .max()
            .unwrap_or(0)
    }

    fn slice(&self, lines: &[String], method: Method) -> Vec<Row> {
        self.ranges(method)
            .iter()
            .flat_map(|r| lines.get(r.start..r.end).unwrap_or_default().iter())
            .map(|line| Row::tokenize(line))
            .collect()
    }

    /// Slice `lines` into sections.
    pub fn extract(&self, lines: &[String]) -> Result<Sections> {
        let needed = self.required_lines();
        if lines.len() < needed {
            return Err(PlotError::TooFewLines {
                needed,
                actual: lines.len(),
            });
        }

        Ok(Sections::new(
            self.slice(lines, Method::Access),
            self.slice(lines, Method::Rank),
            self.slice(lines, Method::Select),
            self.slice(lines, Method::Successor),
        ))
    }
}

/// Rows of a method whose benchmark name contains `marker` are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Exclusion {
    /// Method the exclusion applies to.
    pub method: Method,
    /// Substring of the benchmark name.
    pub marker: String,
}

impl Exclusion {
    /// Exclude `method` rows whose name contains `marker`.
    pub fn new(method: Method, marker: impl Into<String>) -> Self {
        Self {
            method,
            marker: marker.into(),
        }
    }
}

/// Classify rows by the method keyword of their benchmark name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedLayout {
    /// Rows to drop even though their method matches.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exclude: Vec<Exclusion>,
}

impl Default for NamedLayout {
    /// Keeps only the `rank_support_v` + `select_support_mcl` plain
    /// successor, matching the other methods' single plain row.
    fn default() -> Self {
        Self {
            exclude: vec![
                Exclusion::new(Method::Successor, "rank_support_v5"),
                Exclusion::new(Method::Successor, "rank_support_scan"),
            ],
        }
    }
}

impl NamedLayout {
    /// Multi-argument template names contain spaces, so the marker is
    /// looked for in every field rather than only the first.
    fn excluded(&self, method: Method, row: &Row) -> bool {
        self.exclude.iter().any(|e| {
            e.method == method && row.fields().iter().any(|f| f.contains(e.marker.as_str()))
        })
    }

    /// Collect the benchmark rows of `lines` into sections.
    pub fn extract(&self, lines: &[String]) -> Result<Sections> {
        let mut buckets: [Vec<Row>; 4] = Default::default();

        for (lineno, line) in lines.iter().enumerate() {
            let row = Row::tokenize(line);
            let Some(name) = row.benchmark() else {
                continue;
            };
            let Some(method) = name.method() else {
                debug!(line = lineno, benchmark = name.full, "skipping unknown method");
                continue;
            };
            if self.excluded(method, &row) {
                debug!(line = lineno, benchmark = name.full, "excluded row");
                continue;
            }
            buckets[method.ordinal()].push(row);
        }

        if let Some(method) = Method::ALL
            .into_iter()
            .find(|m| buckets[m.ordinal()].is_empty())
        {
            return Err(PlotError::MissingSection(method));
        }

        let [access, rank, select, successor] = buckets;
        Ok(Sections::new(access, rank, select, successor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(str::to_owned).collect()
    }

    #[test]
    fn test_required_lines_default() {
        assert_eq!(OffsetLayout::default().required_lines(), 105);
    }

    #[test]
    fn test_offsets_too_short() {
        let short = vec![String::new(); 104];
        let err = OffsetLayout::default().extract(&short).unwrap_err();
        assert_eq!(
            err,
            PlotError::TooFewLines {
                needed: 105,
                actual: 104
            }
        );
    }

    #[test]
    fn test_offsets_concatenate_ranges() {
        let layout = OffsetLayout {
            access: vec![LineRange::new(0, 1)],
            rank: vec![LineRange::new(1, 2)],
            select: vec![LineRange::new(2, 3)],
            successor: vec![LineRange::new(3, 4), LineRange::new(5, 6)],
        };
        let text = lines("a 1\nr 2\ns 3\nx 4\nskip 5\ny 6");
        let sections = layout.extract(&text).unwrap();
        let names: Vec<_> = sections
            .get(Method::Successor)
            .rows()
            .iter()
            .map(|r| r.name().unwrap().to_owned())
            .collect();
        assert_eq!(names, vec!["x", "y", "-"]);
    }

    #[test]
    fn test_named_classifies_and_excludes() {
        let text = lines(
            "---------\n\
             Benchmark Time CPU Iterations\n\
             ---------\n\
             BM_access_bv<sdsl::bit_vector>/0 10 ns 10 ns 5 bits=1 comp=2 size=2\n\
             BM_rank_bv<sdsl::bit_vector,sdsl::rank_support_v<1>>/0 11 ns 11 ns 5\n\
             BM_select_bv<sdsl::bit_vector,sdsl::select_support_mcl<1>>/0 12 ns 12 ns 5\n\
             BM_successor_bv<sdsl::bit_vector,sdsl::rank_support_v<1>,sdsl::select_support_mcl<1>>/0 13 ns 13 ns 5\n\
             BM_successor_bv<sdsl::bit_vector,sdsl::rank_support_v5<1>,sdsl::select_support_mcl<1>>/0 14 ns 14 ns 5\n\
             BM_successor_bv<sdsl::bit_vector,sdsl::rank_support_scan<1>,sdsl::select_support_scan<1>>/0 15 ns 15 ns 5\n\
             BM_predecessor_bv/0 16 ns 16 ns 5",
        );
        let sections = NamedLayout::default().extract(&text).unwrap();
        assert_eq!(sections.get(Method::Access).len(), 1);
        assert_eq!(sections.get(Method::Rank).len(), 1);
        assert_eq!(sections.get(Method::Select).data_len(), 1);
        let successor = sections.get(Method::Successor);
        assert_eq!(successor.data_len(), 1);
        assert_eq!(successor.row(0).unwrap().from_end(5), Some("13"));
    }

    #[test]
    fn test_named_excludes_spaced_template_names() {
        let text = lines(
            "BM_access_bv<sdsl::bit_vector>/0 10 ns 10 ns 5 bits=1 comp=2 size=2\n\
             BM_rank_bv<sdsl::bit_vector, sdsl::rank_support_v<1>>/0 11 ns 11 ns 5\n\
             BM_select_bv<sdsl::bit_vector, sdsl::select_support_mcl<1>>/0 12 ns 12 ns 5\n\
             BM_successor_bv<sdsl::bit_vector, sdsl::rank_support_v<1>, sdsl::select_support_mcl<1>>/0 13 ns 13 ns 5\n\
             BM_successor_bv<sdsl::bit_vector, sdsl::rank_support_v5<1>, sdsl::select_support_mcl<1>>/0 14 ns 14 ns 5",
        );
        let sections = NamedLayout::default().extract(&text).unwrap();
        let successor = sections.get(Method::Successor);
        assert_eq!(successor.data_len(), 1);
        assert_eq!(successor.row(0).unwrap().from_end(5), Some("13"));
    }

    #[test]
    fn test_named_missing_section() {
        let text = lines("BM_access_bv/0 1 ns 1 ns 1 bits=1 comp=1 size=1\nBM_rank_bv/0 1 ns 1 ns 1");
        let err = NamedLayout::default().extract(&text).unwrap_err();
        assert_eq!(err, PlotError::MissingSection(Method::Select));
    }

    #[test]
    fn test_layout_kind_parse() {
        assert_eq!("named".parse::<LayoutKind>().unwrap(), LayoutKind::Named);
        assert_eq!("Offsets".parse::<LayoutKind>().unwrap(), LayoutKind::Offsets);
        assert!("fixed".parse::<LayoutKind>().is_err());
        assert_eq!(LayoutKind::Offsets.layout().kind(), LayoutKind::Offsets);
    }
}
