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

//! Property-based tests for the smooth variant's clamping.

use bvplot::model::{BenchmarkFile, CaseReport, Method, Variant};
use bvplot::tex::render_figure;
use bvplot_test::{Op, ReportBuilder};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: kept rows are exactly those within the latency ceiling,
    /// and they appear in row order.
    #[test]
    fn prop_smooth_keeps_rows_within_ceiling(latencies in prop::collection::vec(1u32..1000, 23)) {
        let builder = latencies
            .iter()
            .enumerate()
            .fold(ReportBuilder::standard(), |b, (i, l)| b.latency(Op::Access, i, l.to_string()));
        let file = BenchmarkFile::from_text("rp0.txt", &builder.build());

        let variant = Variant::smooth();
        let figure = CaseReport::from_file(&variant, 0, &file)
            .and_then(|r| r.figure(&variant, Method::Access, false))
            .unwrap();

        let kept: Vec<usize> = figure
            .segments
            .iter()
            .flat_map(|s| s.records.iter().map(|r| r.index))
            .collect();
        let expected: Vec<usize> = (0..23).filter(|&i| latencies[i] <= 500).collect();
        prop_assert_eq!(kept, expected);

        let tex = render_figure(&figure, &variant.style);
        let plots = tex.matches(r"\addplot[").count();
        prop_assert_eq!(plots, figure.segments.len());
        prop_assert!(figure.segments.iter().all(|s| !s.records.is_empty()));
    }
}
