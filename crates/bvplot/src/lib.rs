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

//! # BVPlot - Bit-Vector Benchmark Plots
//!
//! BVPlot turns Google Benchmark reports of a compressed bit-vector suite
//! into LaTeX/pgfplots figures of operation latency versus compression
//! ratio, one figure per operation and benchmark case.
//!
//! ## Quick Start
//!
//! ```rust
//! use bvplot::{render_variant, RenderOptions, Variant};
//!
//! let dir = std::env::temp_dir().join("bvplot-quick-start");
//! bvplot_test::write_cases(&dir, "ru", 0..11, bvplot_test::standard_report).unwrap();
//!
//! let tex = render_variant(
//!     &Variant::scatter(),
//!     RenderOptions { dir: dir.clone(), ..Default::default() },
//! )
//! .unwrap();
//! assert_eq!(tex.matches(r"\begin{figure}").count(), 44);
//! # std::fs::remove_dir_all(&dir).ok();
//! ```
//!
//! ## Variants
//!
//! - `scatter`: every case of `ru<N>.txt`, scatter marks.
//! - `paged`: a single case of `r<N>.txt`, one figure per page.
//! - `smooth`: every case of `rp<N>.txt`, one smoothed line per
//!   representation, outliers above 500 ns or ratio 1.4 dropped.
//!
//! ## Modules
//!
//! - [`model`]: parsing, resolution and figure data
//! - [`tex`]: LaTeX rendering

pub use bvplot_core::{
    BenchmarkFile, CaseParams, CaseReport, CaseTable, FigureData, FigureStyle, Filter,
    LabelScheme, Layout, LayoutKind, Method, PlotError, Representation, Result, Variant,
    BUILTIN_VARIANTS,
};

mod driver;
pub use driver::{render_variant, Driver, RenderOptions};

pub mod model {
    //! Report parsing and figure data assembly
    pub use bvplot_core::*;
}

pub mod tex {
    //! LaTeX rendering
    pub use bvplot_tex::{data_line, render_document, render_figure, FigureWriter, DATA_INDENT};
}
