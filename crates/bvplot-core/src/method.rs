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

//! Benchmarked bit-vector operations.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the four benchmarked operations, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    /// Random bit access.
    Access,
    /// Rank of ones up to a position.
    Rank,
    /// Position of the i-th one.
    Select,
    /// Next one at or after a position (rank followed by select).
    Successor,
}

impl Method {
    /// All methods in the order sections appear in a report and figures
    /// appear in the output.
    pub const ALL: [Method; 4] = [
        Method::Access,
        Method::Rank,
        Method::Select,
        Method::Successor,
    ];

    /// Display name used in captions.
    pub fn name(self) -> &'static str {
        match self {
            Method::Access => "Access",
            Method::Rank => "Rank",
            Method::Select => "Select",
            Method::Successor => "Successor",
        }
    }

    /// Keyword following `BM_` in benchmark names.
    pub fn keyword(self) -> &'static str {
        match self {
            Method::Access => "access",
            Method::Rank => "rank",
            Method::Select => "select",
            Method::Successor => "successor",
        }
    }

    /// Parse the keyword found in a benchmark name.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.keyword().eq_ignore_ascii_case(keyword))
    }

    /// Position of the latency field, counted from the end of a row.
    ///
    /// Access rows carry three user counters after the iteration count,
    /// which pushes the wall time three fields further from the end.
    pub fn latency_offset(self) -> usize {
        match self {
            Method::Access => 8,
            Method::Rank | Method::Select | Method::Successor => 5,
        }
    }

    /// Whether the section is padded with a sentinel row.
    ///
    /// The hybrid vector has no select support, so Select and Successor
    /// sections are one row short.
    pub fn has_sentinel(self) -> bool {
        matches!(self, Method::Select | Method::Successor)
    }

    /// Index into [`Method::ALL`].
    pub(crate) fn ordinal(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
