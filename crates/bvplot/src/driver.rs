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

//! Case iteration and document assembly.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::info;

use bvplot_core::{CaseReport, FigureData, Method, PlotError, Result, Variant};

/// How a variant is rendered.
///
/// # Examples
///
/// ```
/// use bvplot::RenderOptions;
///
/// let options = RenderOptions {
///     cases: vec![3],
///     strict: true,
///     ..Default::default()
/// };
/// assert_eq!(options.dir, std::path::PathBuf::from("."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Directory holding the `<prefix><N>.txt` reports.
    pub dir: PathBuf,
    /// Cases to render, in this order; empty means every case.
    pub cases: Vec<usize>,
    /// Check each row's benchmark name against its label.
    pub strict: bool,
    /// Load and parse case files on the rayon pool.
    pub parallel: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            cases: Vec::new(),
            strict: false,
            parallel: false,
        }
    }
}

/// Renders one variant over a set of cases.
#[derive(Debug, Clone)]
pub struct Driver<'a> {
    variant: &'a Variant,
    options: RenderOptions,
}

impl<'a> Driver<'a> {
    /// Create a driver.
    ///
    /// # Errors
    ///
    /// Fails if the variant is inconsistent, a requested case is out of
    /// range, or a single-case variant was not given exactly one case.
    pub fn new(variant: &'a Variant, options: RenderOptions) -> Result<Self> {
        variant.validate()?;
        if variant.single_case && options.cases.len() != 1 {
            return Err(PlotError::invalid_config(
                "case",
                format!(
                    "variant '{}' renders a single case; pass exactly one (got {})",
                    variant.name,
                    options.cases.len()
                ),
            ));
        }
        let cases = variant.cases.len();
        if let Some(&case) = options.cases.iter().find(|&&c| c >= cases) {
            return Err(PlotError::CaseOutOfRange { case, cases });
        }
        Ok(Self { variant, options })
    }

    /// Cases in rendering order.
    pub fn cases(&self) -> Vec<usize> {
        if self.options.cases.is_empty() {
            (0..self.variant.cases.len()).collect()
        } else {
            self.options.cases.clone()
        }
    }

    /// Load every case report, preserving case order.
    pub fn load_reports(&self) -> Result<Vec<CaseReport>> {
        let cases = self.cases();
        let dir = &self.options.dir;
        if self.options.parallel {
            cases
                .par_iter()
                .map(|&case| CaseReport::load(self.variant, dir, case))
                .collect()
        } else {
            cases
                .iter()
                .map(|&case| CaseReport::load(self.variant, dir, case))
                .collect()
        }
    }

    /// Figures of `reports`, grouped by method: every case's Access figure,
    /// then every case's Rank figure, and so on.
    pub fn figures(&self, reports: &[CaseReport]) -> Result<Vec<FigureData>> {
        let mut figures = Vec::with_capacity(reports.len() * Method::ALL.len());
        for method in Method::ALL {
            for report in reports {
                figures.push(report.figure(self.variant, method, self.options.strict)?);
            }
        }
        Ok(figures)
    }

    /// Load, assemble and render the whole document.
    pub fn render(&self) -> Result<String> {
        let reports = self.load_reports()?;
        let figures = self.figures(&reports)?;
        let tex = bvplot_tex::render_document(&figures, &self.variant.style);
        info!(
            variant = %self.variant.name,
            cases = reports.len(),
            figures = figures.len(),
            "rendered document"
        );
        Ok(tex)
    }
}

/// Render `variant` with `options`.
pub fn render_variant(variant: &Variant, options: RenderOptions) -> Result<String> {
    Driver::new(variant, options)?.render()
}
