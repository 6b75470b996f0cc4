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

//! Row index → (label, size, latency) resolution.

use tracing::{debug, trace};

use crate::error::{PlotError, Result};
use crate::method::Method;
use crate::row::Row;
use crate::scheme::{LabelScheme, Representation};
use crate::section::Sections;
use crate::size::{counter_value, SizeValue};

/// Position of the size counter, counted from the end of an Access row.
pub const SIZE_FIELD_FROM_END: usize = 2;

/// One data line of a figure.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRecord {
    /// Row index in the sections.
    pub index: usize,
    /// Representation of the row.
    pub label: Representation,
    /// Compressed size, taken from the Access section.
    pub size: SizeValue,
    /// Latency text exactly as reported.
    pub latency: String,
}

impl PlotRecord {
    /// Latency in nanoseconds.
    ///
    /// # Errors
    ///
    /// [`PlotError::InvalidNumber`] if the reported text is not numeric.
    pub fn latency_ns(&self) -> Result<f64> {
        self.latency
            .parse::<f64>()
            .map_err(|_| PlotError::invalid_number("latency", self.latency.as_str()))
    }
}

/// Resolves rows of a report against a label scheme.
///
/// Sizes always come from the Access section: the size of a
/// representation does not depend on the operation being timed.
#[derive(Debug, Clone)]
pub struct Resolver<'a> {
    sections: &'a Sections,
    scheme: &'a LabelScheme,
    strict: bool,
    normalize_sizes: bool,
}

impl<'a> Resolver<'a> {
    /// Create a resolver.
    ///
    /// # Errors
    ///
    /// [`PlotError::InvalidConfig`] for an unusable scheme and
    /// [`PlotError::SchemeTooLong`] if the scheme labels more rows than the
    /// Access section has.
    pub fn new(sections: &'a Sections, scheme: &'a LabelScheme) -> Result<Self> {
        scheme.validate()?;
        let rows = sections.access().data_len();
        if rows < scheme.len() {
            return Err(PlotError::SchemeTooLong {
                scheme: scheme.name.clone(),
                labels: scheme.len(),
                rows,
            });
        }
        Ok(Self {
            sections,
            scheme,
            strict: false,
            normalize_sizes: true,
        })
    }

    /// Check each row's benchmark name against its label.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Rewrite milli sizes as decimals (the default) or keep them as printed.
    pub fn normalize_sizes(mut self, normalize: bool) -> Self {
        self.normalize_sizes = normalize;
        self
    }

    /// Size of the uncompressed representation (Access row 0).
    pub fn plain_size(&self) -> Result<SizeValue> {
        self.size_at(0)
    }

    /// Size of the representation in row `index`.
    pub fn size_at(&self, index: usize) -> Result<SizeValue> {
        let row = self.row(Method::Access, index)?;
        let field = row
            .from_end(SIZE_FIELD_FROM_END)
            .ok_or(PlotError::RowTooShort {
                method: Method::Access,
                row: index,
                needed: SIZE_FIELD_FROM_END,
                actual: row.width(),
            })?;
        let raw = counter_value(field).ok_or_else(|| PlotError::MalformedField {
            method: Method::Access,
            row: index,
            field: field.to_owned(),
        })?;
        SizeValue::parse_with(raw, self.normalize_sizes)
    }

    fn row(&self, method: Method, index: usize) -> Result<&'a Row> {
        self.sections
            .get(method)
            .row(index)
            .ok_or(PlotError::MissingRow { method, row: index })
    }

    fn check_label(&self, row: &Row, index: usize, label: Representation) -> Result<()> {
        if !self.strict {
            return Ok(());
        }
        match row.benchmark() {
            Some(name) if name.family != label.family() => Err(PlotError::LabelMismatch {
                row: index,
                expected: label.label().to_owned(),
                found: name.family.to_owned(),
            }),
            _ => Ok(()),
        }
    }

    /// Resolve every labelled row of `method`, in index order.
    ///
    /// The scheme's sentinel index is skipped for Select and Successor, and
    /// sentinel rows are never emitted.
    pub fn resolve(&self, method: Method) -> Result<Vec<PlotRecord>> {
        let offset = method.latency_offset();
        let mut records = Vec::with_capacity(self.scheme.len());

        for (index, &label) in self.scheme.labels.iter().enumerate() {
            if method.has_sentinel() && index == self.scheme.sentinel_index {
                continue;
            }

            let row = self.row(method, index)?;
            if row.is_sentinel() {
                debug!(%method, index, "skipping sentinel row");
                continue;
            }
            self.check_label(row, index, label)?;

            let latency = row.from_end(offset).ok_or(PlotError::RowTooShort {
                method,
                row: index,
                needed: offset,
                actual: row.width(),
            })?;
            let size = self.size_at(index)?;
            trace!(%method, index, %label, size = size.text(), latency, "resolved row");

            records.push(PlotRecord {
                index,
                label,
                size,
                latency: latency.to_owned(),
            });
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access_row(name: &str, latency: &str, size: &str) -> Row {
        Row::tokenize(&format!(
            "{name} {latency} ns {latency} ns 1000 bits=1.3M comp={size} size=170m"
        ))
    }

    fn timed_row(name: &str, latency: &str) -> Row {
        Row::tokenize(&format!("{name} {latency} ns {latency} ns 1000"))
    }

    fn tiny_scheme() -> LabelScheme {
        LabelScheme {
            name: "tiny".into(),
            labels: vec![
                Representation::Plain,
                Representation::S9,
                Representation::Hyb,
            ],
            sentinel_index: 2,
        }
    }

    fn tiny_sections() -> Sections {
        Sections::new(
            vec![
                access_row("BM_access_bv/0", "10", "0.170"),
                access_row("BM_access_s9/0", "20", "5m"),
                access_row("BM_access_hyb/0", "30", "60m"),
            ],
            vec![
                timed_row("BM_rank_bv/0", "11"),
                timed_row("BM_rank_s9/0", "21"),
                timed_row("BM_rank_hyb/0", "31"),
            ],
            vec![
                timed_row("BM_select_bv/0", "12"),
                timed_row("BM_select_s9/0", "22"),
            ],
            vec![
                timed_row("BM_successor_bv/0", "13"),
                timed_row("BM_successor_s9/0", "23"),
            ],
        )
    }

    #[test]
    fn test_plain_size() {
        let sections = tiny_sections();
        let scheme = tiny_scheme();
        let resolver = Resolver::new(&sections, &scheme).unwrap();
        assert_eq!(resolver.plain_size().unwrap().text(), "0.170");
    }

    #[test]
    fn test_resolve_access() {
        let sections = tiny_sections();
        let scheme = tiny_scheme();
        let records = Resolver::new(&sections, &scheme)
            .unwrap()
            .resolve(Method::Access)
            .unwrap();
        let lines: Vec<_> = records
            .iter()
            .map(|r| (r.label.label(), r.size.text().to_owned(), r.latency.as_str()))
            .collect();
        assert_eq!(
            lines,
            vec![
                ("plain", "0.170".to_owned(), "10"),
                ("s9", "0.005".to_owned(), "20"),
                ("hyb", "0.0060".to_owned(), "30"),
            ]
        );
    }

    #[test]
    fn test_resolve_rank_uses_access_sizes() {
        let sections = tiny_sections();
        let scheme = tiny_scheme();
        let records = Resolver::new(&sections, &scheme)
            .unwrap()
            .resolve(Method::Rank)
            .unwrap();
        assert_eq!(records[1].latency, "21");
        assert_eq!(records[1].size.text(), "0.005");
    }

    #[test]
    fn test_verbatim_sizes() {
        let sections = tiny_sections();
        let scheme = tiny_scheme();
        let resolver = Resolver::new(&sections, &scheme)
            .unwrap()
            .normalize_sizes(false);
        let records = resolver.resolve(Method::Access).unwrap();
        assert_eq!(records[1].size.text(), "5m");
        assert_eq!(records[2].size.text(), "60m");
        assert!((records[1].size.value() - 0.005).abs() < 1e-12);
        assert_eq!(resolver.plain_size().unwrap().text(), "0.170");
    }

    #[test]
    fn test_resolve_select_skips_sentinel_index() {
        let sections = tiny_sections();
        let scheme = tiny_scheme();
        let records = Resolver::new(&sections, &scheme)
            .unwrap()
            .resolve(Method::Select)
            .unwrap();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.label != Representation::Hyb));
    }

    #[test]
    fn test_scheme_too_long() {
        let sections = tiny_sections();
        let scheme = LabelScheme::standard();
        let err = Resolver::new(&sections, &scheme).unwrap_err();
        assert!(matches!(err, PlotError::SchemeTooLong { labels: 23, rows: 3, .. }));
    }

    #[test]
    fn test_strict_label_mismatch() {
        let sections = tiny_sections();
        let mut scheme = tiny_scheme();
        scheme.labels[1] = Representation::Rrr;
        let resolver = Resolver::new(&sections, &scheme).unwrap();
        assert!(resolver.resolve(Method::Rank).is_ok());

        let err = resolver.strict(true).resolve(Method::Rank).unwrap_err();
        assert_eq!(
            err,
            PlotError::LabelMismatch {
                row: 1,
                expected: "rrr".into(),
                found: "s9".into()
            }
        );
    }

    #[test]
    fn test_row_too_short() {
        let sections = Sections::new(
            vec![access_row("BM_access_bv/0", "10", "1.0")],
            vec![Row::tokenize("BM_rank_bv/0 11 ns")],
            vec![timed_row("BM_select_bv/0", "12")],
            vec![timed_row("BM_successor_bv/0", "13")],
        );
        let scheme = LabelScheme {
            name: "one".into(),
            labels: vec![Representation::Plain],
            sentinel_index: 0,
        };
        let err = Resolver::new(&sections, &scheme)
            .unwrap()
            .resolve(Method::Rank)
            .unwrap_err();
        assert_eq!(
            err,
            PlotError::RowTooShort {
                method: Method::Rank,
                row: 0,
                needed: 5,
                actual: 3
            }
        );
    }

    #[test]
    fn test_malformed_size_field() {
        let sections = Sections::new(
            vec![Row::tokenize("BM_access_bv/0 10 ns 10 ns 5 bits 170m size=1")],
            vec![timed_row("BM_rank_bv/0", "11")],
            vec![timed_row("BM_select_bv/0", "12")],
            vec![timed_row("BM_successor_bv/0", "13")],
        );
        let scheme = LabelScheme {
            name: "one".into(),
            labels: vec![Representation::Plain],
            sentinel_index: 0,
        };
        let err = Resolver::new(&sections, &scheme)
            .unwrap()
            .plain_size()
            .unwrap_err();
        assert!(matches!(err, PlotError::MalformedField { row: 0, .. }));
    }

    #[test]
    fn test_latency_ns() {
        let record = PlotRecord {
            index: 0,
            label: Representation::Plain,
            size: SizeValue::parse("1").unwrap(),
            latency: "500".into(),
        };
        assert_eq!(record.latency_ns().unwrap(), 500.0);
    }
}
