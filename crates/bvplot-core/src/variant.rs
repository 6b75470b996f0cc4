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

//! Named report configurations.
//!
//! A variant bundles everything that differs between the figure sets
//! produced from a benchmark campaign: how input files are named, the
//! case parameters they were generated with, the row labels, the figure
//! style, and whether outliers are clamped.

use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::case::CaseTable;
use crate::error::{PlotError, Result};
use crate::filter::Filter;
use crate::layout::Layout;
use crate::scheme::LabelScheme;
use crate::style::FigureStyle;

/// Names of the built-in variants.
pub const BUILTIN_VARIANTS: [&str; 3] = ["scatter", "paged", "smooth"];

/// A complete figure-set configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Variant {
    /// Variant name.
    pub name: String,
    /// One-line description for listings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Input files are `<input_prefix><case>.txt`.
    pub input_prefix: String,
    /// Case parameters.
    pub cases: CaseTable,
    /// Row labels.
    pub scheme: LabelScheme,
    /// Figure presentation.
    pub style: FigureStyle,
    /// Outlier ceilings; `None` keeps every row.
    #[cfg_attr(feature = "serde", serde(default))]
    pub filter: Option<Filter>,
    /// Section extraction strategy.
    #[cfg_attr(feature = "serde", serde(default))]
    pub layout: Layout,
    /// Render one explicitly chosen case rather than the whole table.
    #[cfg_attr(feature = "serde", serde(default))]
    pub single_case: bool,
    /// Rewrite milli sizes as decimals; when off, sizes are written as
    /// printed in the report.
    #[cfg_attr(feature = "serde", serde(default = "default_normalize_sizes"))]
    pub normalize_sizes: bool,
}

#[cfg(feature = "serde")]
fn default_normalize_sizes() -> bool {
    true
}

impl Variant {
    /// Dense vectors, average gap 127, runs of 10,000, eleven run
    /// probabilities; scatter marks.
    pub fn scatter() -> Self {
        Self {
            name: "scatter".to_owned(),
            description: "Scatter plots of every case (ru<N>.txt)".to_owned(),
            input_prefix: "ru".to_owned(),
            cases: CaseTable::flat(
                "127",
                "10{,}000",
                &[0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 0.95],
            ),
            scheme: LabelScheme::standard(),
            style: FigureStyle::scatter(),
            filter: None,
            layout: Layout::default(),
            single_case: false,
            normalize_sizes: true,
        }
    }

    /// Gap × run × probability grid rendered one case at a time, one page
    /// per figure.
    pub fn paged() -> Self {
        Self {
            name: "paged".to_owned(),
            description: "One page per figure for a single grid case (r<N>.txt)".to_owned(),
            input_prefix: "r".to_owned(),
            cases: CaseTable::new(
                vec!["4".into(), "7".into(), "31".into(), "127".into()],
                vec!["1,000".into(), "10,000".into(), "100,000".into()],
                vec![0.01, 0.001, 0.0001],
            ),
            scheme: LabelScheme::compact(),
            style: FigureStyle::paged(),
            filter: None,
            layout: Layout::default(),
            single_case: true,
            normalize_sizes: false,
        }
    }

    /// Average gap 127, runs of 100, fifteen run probabilities; smoothed
    /// per-representation lines with outliers clamped.
    pub fn smooth() -> Self {
        Self {
            name: "smooth".to_owned(),
            description: "Smoothed lines with clamped outliers (rp<N>.txt)".to_owned(),
            input_prefix: "rp".to_owned(),
            cases: CaseTable::flat(
                "127",
                "100",
                &[
                    0.01, 0.02, 0.03, 0.04, 0.05, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9,
                    0.95,
                ],
            ),
            scheme: LabelScheme::standard(),
            style: FigureStyle::smooth(),
            filter: Some(Filter::default()),
            layout: Layout::default(),
            single_case: false,
            normalize_sizes: true,
        }
    }

    /// Look up a built-in variant by name.
    ///
    /// # Errors
    ///
    /// [`PlotError::InvalidConfig`] for an unknown name.
    pub fn builtin(name: &str) -> Result<Self> {
        match name {
            "scatter" => Ok(Self::scatter()),
            "paged" => Ok(Self::paged()),
            "smooth" => Ok(Self::smooth()),
            other => Err(PlotError::invalid_config(
                "variant",
                format!(
                    "unknown variant '{other}' (expected one of: {})",
                    BUILTIN_VARIANTS.join(", ")
                ),
            )),
        }
    }

    /// All built-in variants.
    pub fn builtins() -> Vec<Self> {
        vec![Self::scatter(), Self::paged(), Self::smooth()]
    }

    /// Input file of `case` inside `dir`.
    pub fn input_path(&self, dir: &Path, case: usize) -> PathBuf {
        dir.join(format!("{}{}.txt", self.input_prefix, case))
    }

    /// Check the variant is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.input_prefix.contains(['/', '\\']) {
            return Err(PlotError::invalid_config(
                "input_prefix",
                "must be a file name prefix, not a path",
            ));
        }
        self.cases.validate()?;
        self.scheme.validate()?;
        if let Some(filter) = &self.filter {
            if !(filter.max_latency_ns > 0.0 && filter.max_ratio > 0.0) {
                return Err(PlotError::invalid_config(
                    "filter",
                    "ceilings must be positive",
                ));
            }
        }
        Ok(())
    }
}
