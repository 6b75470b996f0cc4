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

//! Benchmark report parsing and figure data assembly for BVPlot.
//!
//! The pipeline, one stage per module:
//!
//! - [`loader`] reads a report file into lines.
//! - [`Layout`] splits the lines into one [`Section`] per [`Method`],
//!   either by benchmark name ([`NamedLayout`]) or by fixed line ranges
//!   ([`OffsetLayout`]).
//! - [`Resolver`] labels each row with a [`Representation`] from a
//!   [`LabelScheme`] and pairs its latency with the size reported by the
//!   Access section.
//! - [`filter`] drops outliers and splits rows into same-label segments.
//! - [`CaseReport::figure`] ties the stages together into [`FigureData`]
//!   for one method of one case, ready for a renderer.
//!
//! A [`Variant`] bundles the per-campaign configuration: input naming,
//! case table, label scheme, figure style and filter.
//!
//! # Example
//!
//! ```
//! use bvplot_core::{BenchmarkFile, CaseReport, Method, Variant};
//!
//! let text = bvplot_test::standard_report(0);
//! let variant = Variant::scatter();
//! let file = BenchmarkFile::from_text("ru0.txt", &text);
//!
//! let report = CaseReport::from_file(&variant, 0, &file).unwrap();
//! let figure = report.figure(&variant, Method::Select, false).unwrap();
//! assert_eq!(figure.record_count(), 22);
//! assert_eq!(figure.plain_size.text(), "0.125");
//! ```

mod case;
mod error;
mod figure;
pub mod filter;
mod layout;
pub mod loader;
mod method;
mod resolve;
mod row;
mod scheme;
mod section;
pub mod size;
mod style;
mod variant;

pub use case::{CaseParams, CaseTable};
pub use error::{PlotError, Result};
pub use figure::{CaseReport, FigureData};
pub use filter::{Filter, Segment};
pub use layout::{Exclusion, Layout, LayoutKind, LineRange, NamedLayout, OffsetLayout};
pub use loader::{load, BenchmarkFile};
pub use method::Method;
pub use resolve::{PlotRecord, Resolver};
pub use row::{BenchmarkName, Row};
pub use scheme::{LabelScheme, Representation};
pub use section::{Section, Sections};
pub use size::SizeValue;
pub use style::{AxisLimits, FigureStyle, PageBreak, PlotKind};
pub use variant::{Variant, BUILTIN_VARIANTS};
