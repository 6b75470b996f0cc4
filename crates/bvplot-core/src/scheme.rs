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

//! Bit-vector representations and the index → label schemes.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

/// A bit-vector encoding measured by the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Representation {
    /// Uncompressed `bit_vector`; the size reference.
    Plain,
    /// Simple-9 encoded runs.
    S9,
    /// Simple-18 encoded runs.
    S18,
    /// RRR blocks.
    Rrr,
    /// Elias-Fano (`sd_vector`).
    Sd,
    /// Hybrid vector.
    Hyb,
}

impl Representation {
    /// All representations, in legend order.
    pub const ALL: [Representation; 6] = [
        Representation::Plain,
        Representation::S9,
        Representation::S18,
        Representation::Rrr,
        Representation::Sd,
        Representation::Hyb,
    ];

    /// Label written in the data table and matched by scatter classes.
    pub fn label(self) -> &'static str {
        match self {
            Representation::Plain => "plain",
            Representation::S9 => "s9",
            Representation::S18 => "s18",
            Representation::Rrr => "rrr",
            Representation::Sd => "sd",
            Representation::Hyb => "hyb",
        }
    }

    /// Family token in benchmark names (`BM_access_<family>...`).
    pub fn family(self) -> &'static str {
        match self {
            Representation::Plain => "bv",
            other => other.label(),
        }
    }

    /// C++ type name shown in legends.
    pub fn type_name(self) -> &'static str {
        match self {
            Representation::Plain => "bit_vector",
            Representation::S9 => "s9_vector",
            Representation::S18 => "s18::vector",
            Representation::Rrr => "rrr_vector",
            Representation::Sd => "sd_vector",
            Representation::Hyb => "hyb_vector",
        }
    }

    /// Look a representation up by its benchmark family token.
    pub fn from_family(family: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.family() == family)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Representation {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.label() == s)
            .ok_or_else(|| PlotError::invalid_config("label", format!("unknown representation '{s}'")))
    }
}

/// Ordered mapping from row index to representation.
///
/// The mapping is positional: entry `i` labels row `i` of every section.
/// `sentinel_index` is the row that Select and Successor do not have
/// (the hybrid vector) and that is skipped for those methods.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LabelScheme {
    /// Scheme name.
    pub name: String,
    /// One label per row.
    pub labels: Vec<Representation>,
    /// Row skipped for methods padded with a sentinel.
    pub sentinel_index: usize,
}

impl LabelScheme {
    /// Build a scheme from run lengths of each representation.
    fn from_runs(name: &str, runs: &[(Representation, usize)]) -> Self {
        let labels: Vec<_> = runs
            .iter()
            .flat_map(|&(rep, n)| std::iter::repeat(rep).take(n))
            .collect();
        let sentinel_index = labels.len() - 1;
        Self {
            name: name.to_owned(),
            labels,
            sentinel_index,
        }
    }

    /// 23 rows: plain, 7 s9, 7 s18, 6 rrr, sd, hyb.
    pub fn standard() -> Self {
        Self::from_runs(
            "standard",
            &[
                (Representation::Plain, 1),
                (Representation::S9, 7),
                (Representation::S18, 7),
                (Representation::Rrr, 6),
                (Representation::Sd, 1),
                (Representation::Hyb, 1),
            ],
        )
    }

    /// 20 rows: plain, 6 s9, 5 s18, 6 rrr, sd, hyb.
    pub fn compact() -> Self {
        Self::from_runs(
            "compact",
            &[
                (Representation::Plain, 1),
                (Representation::S9, 6),
                (Representation::S18, 5),
                (Representation::Rrr, 6),
                (Representation::Sd, 1),
                (Representation::Hyb, 1),
            ],
        )
    }

    /// Look up a built-in scheme by name.
    pub fn builtin(name: &str) -> Result<Self> {
        match name {
            "standard" => Ok(Self::standard()),
            "compact" => Ok(Self::compact()),
            other => Err(PlotError::invalid_config(
                "scheme",
                format!("unknown scheme '{other}' (expected 'standard' or 'compact')"),
            )),
        }
    }

    /// Number of labelled rows.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the scheme labels no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of row `index`.
    pub fn get(&self, index: usize) -> Option<Representation> {
        self.labels.get(index).copied()
    }

    /// Check the scheme is usable: non-empty and the sentinel index in range.
    pub fn validate(&self) -> Result<()> {
        if self.labels.is_empty() {
            return Err(PlotError::invalid_config("labels", "scheme has no labels"));
        }
        if self.sentinel_index >= self.labels.len() {
            return Err(PlotError::invalid_config(
                "sentinel_index",
                format!(
                    "index {} is past the last label ({})",
                    self.sentinel_index,
                    self.labels.len() - 1
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_scheme() {
        let scheme = LabelScheme::standard();
        assert_eq!(scheme.len(), 23);
        assert_eq!(scheme.sentinel_index, 22);
        assert_eq!(scheme.get(0), Some(Representation::Plain));
        assert_eq!(scheme.get(7), Some(Representation::S9));
        assert_eq!(scheme.get(8), Some(Representation::S18));
        assert_eq!(scheme.get(15), Some(Representation::Rrr));
        assert_eq!(scheme.get(21), Some(Representation::Sd));
        assert_eq!(scheme.get(22), Some(Representation::Hyb));
        assert_eq!(scheme.get(23), None);
    }

    #[test]
    fn test_compact_scheme() {
        let scheme = LabelScheme::compact();
        assert_eq!(scheme.len(), 20);
        assert_eq!(scheme.sentinel_index, 19);
        assert_eq!(scheme.get(6), Some(Representation::S9));
        assert_eq!(scheme.get(7), Some(Representation::S18));
        assert_eq!(scheme.get(12), Some(Representation::Rrr));
        assert_eq!(scheme.get(19), Some(Representation::Hyb));
    }

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(LabelScheme::builtin("compact").unwrap(), LabelScheme::compact());
        assert!(LabelScheme::builtin("wide").is_err());
    }

    #[test]
    fn test_validate_sentinel_range() {
        let mut scheme = LabelScheme::standard();
        assert!(scheme.validate().is_ok());
        scheme.sentinel_index = 23;
        assert!(scheme.validate().is_err());
    }

    #[test]
    fn test_family_round_trip() {
        for rep in Representation::ALL {
            assert_eq!(Representation::from_family(rep.family()), Some(rep));
        }
        assert_eq!(Representation::from_family("bv"), Some(Representation::Plain));
        assert_eq!("rrr".parse::<Representation>().unwrap(), Representation::Rrr);
    }
}
