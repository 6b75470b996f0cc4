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

//! Per-method sections of a parsed report.

use crate::method::Method;
use crate::row::Row;

/// The ordered rows of one benchmark method.
///
/// Sections of methods that lack the hybrid vector are padded with a
/// sentinel row on construction, so a row index addresses the same
/// representation in every section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    method: Method,
    rows: Vec<Row>,
}

impl Section {
    /// Build a section, appending the sentinel when the method needs one.
    pub fn new(method: Method, mut rows: Vec<Row>) -> Self {
        if method.has_sentinel() {
            rows.push(Row::sentinel());
        }
        Self { method, rows }
    }

    /// The method this section measures.
    pub fn method(&self) -> Method {
        self.method
    }

    /// All rows, including the sentinel.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Row at `index`, if present.
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Number of rows, including the sentinel.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the section has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows read from the report.
    pub fn data_len(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_sentinel()).count()
    }
}

/// The four sections of one report, indexed by [`Method`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    sections: [Section; 4],
}

impl Sections {
    /// Assemble sections from the raw rows of each method.
    pub fn new(access: Vec<Row>, rank: Vec<Row>, select: Vec<Row>, successor: Vec<Row>) -> Self {
        Self {
            sections: [
                Section::new(Method::Access, access),
                Section::new(Method::Rank, rank),
                Section::new(Method::Select, select),
                Section::new(Method::Successor, successor),
            ],
        }
    }

    /// Section for `method`.
    pub fn get(&self, method: Method) -> &Section {
        &self.sections[method.ordinal()]
    }

    /// The Access section, which also carries every representation's size.
    pub fn access(&self) -> &Section {
        self.get(Method::Access)
    }

    /// Iterate sections in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}
