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

//! Per-case figure assembly.

use std::path::{Path, PathBuf};

use tracing::{debug, info_span};

use crate::case::CaseParams;
use crate::error::Result;
use crate::filter::{group_segments, single_segment, Segment};
use crate::loader::{load, BenchmarkFile};
use crate::method::Method;
use crate::resolve::Resolver;
use crate::section::Sections;
use crate::size::SizeValue;
use crate::variant::Variant;

/// Everything a renderer needs for one figure.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureData {
    /// Timed operation.
    pub method: Method,
    /// Case parameters for the caption.
    pub case: CaseParams,
    /// Uncompressed size, the divisor of the x axis.
    pub plain_size: SizeValue,
    /// Non-empty data segments, in row order.
    pub segments: Vec<Segment>,
}

impl FigureData {
    /// Number of data lines across all segments.
    pub fn record_count(&self) -> usize {
        self.segments.iter().map(|s| s.records.len()).sum()
    }
}

/// One benchmark report, split into sections and paired with its case.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    /// Case the report was generated for.
    pub case: CaseParams,
    /// Where the report was read from.
    pub path: PathBuf,
    /// Extracted sections.
    pub sections: Sections,
}

impl CaseReport {
    /// Split an already loaded report with the variant's layout.
    pub fn from_file(variant: &Variant, case: usize, file: &BenchmarkFile) -> Result<Self> {
        let case = variant.cases.get(case)?;
        let sections = variant
            .layout
            .extract(file)
            .map_err(|e| e.in_report(file.path()))?;
        Ok(Self {
            case,
            path: file.path().to_path_buf(),
            sections,
        })
    }

    /// Load and split the report of `case` from `dir`.
    ///
    /// # Errors
    ///
    /// Fails if the case is outside the variant's table, or if the file
    /// cannot be read or split.
    pub fn load(variant: &Variant, dir: &Path, case: usize) -> Result<Self> {
        // Range check before touching the filesystem.
        variant.cases.get(case)?;
        let path = variant.input_path(dir, case);
        let _span = info_span!("case", case, path = %path.display()).entered();
        let file = load(&path)?;
        Self::from_file(variant, case, &file)
    }

    /// Resolve, filter and group the rows of `method`.
    ///
    /// With `strict` set, each row's benchmark name must match its label.
    pub fn figure(&self, variant: &Variant, method: Method, strict: bool) -> Result<FigureData> {
        self.assemble(variant, method, strict)
            .map_err(|e| e.in_report(&self.path))
    }

    fn assemble(&self, variant: &Variant, method: Method, strict: bool) -> Result<FigureData> {
        let resolver = Resolver::new(&self.sections, &variant.scheme)?
            .strict(strict)
            .normalize_sizes(variant.normalize_sizes);
        let plain_size = resolver.plain_size()?;
        let records = resolver.resolve(method)?;

        let segments = if variant.style.grouped {
            group_segments(records, &plain_size, variant.filter.as_ref())?
        } else if let Some(filter) = &variant.filter {
            let mut kept = Vec::with_capacity(records.len());
            for record in records {
                if filter.keeps(&record, &plain_size)? {
                    kept.push(record);
                }
            }
            single_segment(kept)
        } else {
            single_segment(records)
        };

        debug!(
            %method,
            case = self.case.index,
            segments = segments.len(),
            "assembled figure"
        );
        Ok(FigureData {
            method,
            case: self.case.clone(),
            plain_size,
            segments,
        })
    }
}
