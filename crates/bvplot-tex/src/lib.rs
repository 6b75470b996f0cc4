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

//! LaTeX/pgfplots rendering for BVPlot figures.
//!
//! Each [`FigureData`] becomes one `figure` environment holding a
//! latency-versus-compression-ratio plot. The x axis divides each size by
//! the plain vector's size inside pgfplots (`x expr`), so the data table
//! carries sizes exactly as reported.
//!
//! # Examples
//!
//! ```
//! use bvplot_core::{BenchmarkFile, CaseReport, Method, Variant};
//!
//! let variant = Variant::smooth();
//! let file = BenchmarkFile::from_text("rp0.txt", &bvplot_test::standard_report(0));
//! let report = CaseReport::from_file(&variant, 0, &file).unwrap();
//! let figures: Vec<_> = Method::ALL
//!     .into_iter()
//!     .map(|m| report.figure(&variant, m, false).unwrap())
//!     .collect();
//!
//! let tex = bvplot_tex::render_document(&figures, &variant.style);
//! assert_eq!(tex.matches(r"\begin{figure}").count(), 4);
//! ```

mod writer;

pub use writer::{data_line, FigureWriter, DATA_INDENT};

use bvplot_core::{FigureData, FigureStyle};

/// Render a single figure.
pub fn render_figure(figure: &FigureData, style: &FigureStyle) -> String {
    FigureWriter::new(style).write_figure(figure)
}

/// Render figures one after another, in the order given.
pub fn render_document(figures: &[FigureData], style: &FigureStyle) -> String {
    let mut writer = FigureWriter::new(style);
    figures.iter().map(|f| writer.write_figure(f)).collect()
}
