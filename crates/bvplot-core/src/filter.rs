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

//! Outlier clamping and same-label segment grouping.

use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resolve::PlotRecord;
use crate::scheme::Representation;
use crate::size::SizeValue;

/// Default latency ceiling in nanoseconds.
pub const DEFAULT_MAX_LATENCY_NS: f64 = 500.0;

/// Default compression ratio ceiling.
pub const DEFAULT_MAX_RATIO: f64 = 1.4;

/// Ceilings beyond which a row is left out of a figure.
///
/// Both bounds are inclusive: a row exactly at the ceiling is kept.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Filter {
    /// Rows slower than this are dropped.
    pub max_latency_ns: f64,
    /// Rows whose size ratio to plain exceeds this are dropped.
    pub max_ratio: f64,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            max_latency_ns: DEFAULT_MAX_LATENCY_NS,
            max_ratio: DEFAULT_MAX_RATIO,
        }
    }
}

impl Filter {
    /// Whether `record` fits inside both ceilings.
    ///
    /// # Errors
    ///
    /// Fails if the record's latency is not numeric.
    pub fn keeps(&self, record: &PlotRecord, plain: &SizeValue) -> Result<bool> {
        let latency = record.latency_ns()?;
        if latency > self.max_latency_ns {
            warn!(
                index = record.index,
                label = %record.label,
                latency,
                "dropping row above latency ceiling"
            );
            return Ok(false);
        }
        let ratio = record.size.ratio_to(plain);
        if ratio > self.max_ratio {
            warn!(
                index = record.index,
                label = %record.label,
                ratio,
                "dropping row above ratio ceiling"
            );
            return Ok(false);
        }
        Ok(true)
    }
}

/// A run of records drawn as one plot.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Records in index order.
    pub records: Vec<PlotRecord>,
}

impl Segment {
    fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Whether the segment holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Label of the first record.
    pub fn label(&self) -> Option<Representation> {
        self.records.first().map(|r| r.label)
    }
}

/// Put every record in a single segment.
pub fn single_segment(records: Vec<PlotRecord>) -> Vec<Segment> {
    if records.is_empty() {
        Vec::new()
    } else {
        vec![Segment { records }]
    }
}

/// Filter `records` and split them into same-label segments.
///
/// A new segment starts whenever a record's label differs from the label
/// of the last record that was kept, before the record itself is checked
/// against the filter. Records are never reordered, so a dropped record
/// of another label between two same-label records separates them.
/// Empty segments are discarded.
///
/// # Errors
///
/// Fails if a record's latency is not numeric.
pub fn group_segments(
    records: Vec<PlotRecord>,
    plain: &SizeValue,
    filter: Option<&Filter>,
) -> Result<Vec<Segment>> {
    let mut segments: Vec<Segment> = Vec::new();
    let mut last_kept: Option<Representation> = None;

    for record in records {
        if last_kept != Some(record.label) {
            segments.push(Segment::new());
        }
        if let Some(filter) = filter {
            if !filter.keeps(&record, plain)? {
                continue;
            }
        }
        last_kept = Some(record.label);
        if let Some(current) = segments.last_mut() {
            current.records.push(record);
        }
    }

    segments.retain(|s| !s.is_empty());
    Ok(segments)
}
