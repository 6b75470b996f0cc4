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

//! Rendering whole variants from report directories.

use bvplot::{render_variant, Driver, PlotError, RenderOptions, Variant};
use bvplot_test::{standard_report, write_cases, Op, ReportBuilder};
use tempfile::TempDir;

fn report_dir(prefix: &str, cases: std::ops::Range<usize>) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_cases(dir.path(), prefix, cases, standard_report).unwrap();
    dir
}

fn captions(tex: &str) -> Vec<(String, String)> {
    tex.lines()
        .filter_map(|l| l.strip_prefix(r"    \caption[Rendimiento de \textsc{"))
        .map(|l| l.split('}').next().unwrap_or_default().to_owned())
        .zip(
            tex.lines()
                .filter_map(|l| l.split("probabilidad de $").nth(1))
                .map(|l| l.trim_end_matches("$.}").to_owned()),
        )
        .collect()
}

#[test]
fn test_scatter_is_method_major() {
    let dir = report_dir("ru", 0..11);
    let tex = render_variant(
        &Variant::scatter(),
        RenderOptions {
            dir: dir.path().to_path_buf(),
            ..Default::default()
        },
    )
    .unwrap();

    let order = captions(&tex);
    assert_eq!(order.len(), 44);
    assert_eq!(order[0], ("Access".to_owned(), "0.05".to_owned()));
    assert_eq!(order[10], ("Access".to_owned(), "0.95".to_owned()));
    assert_eq!(order[11], ("Rank".to_owned(), "0.05".to_owned()));
    assert_eq!(order[43], ("Successor".to_owned(), "0.95".to_owned()));
}

#[test]
fn test_explicit_cases_keep_given_order() {
    let dir = report_dir("rp", 0..15);
    let tex = render_variant(
        &Variant::smooth(),
        RenderOptions {
            dir: dir.path().to_path_buf(),
            cases: vec![9, 2],
            ..Default::default()
        },
    )
    .unwrap();

    let probs: Vec<_> = captions(&tex).into_iter().map(|(_, p)| p).collect();
    assert_eq!(probs, vec!["0.5", "0.03", "0.5", "0.03", "0.5", "0.03", "0.5", "0.03"]);
}

#[test]
fn test_parallel_matches_sequential() {
    let dir = tempfile::tempdir().unwrap();
    write_cases(dir.path(), "ru", 0..11, |c| {
        ReportBuilder::standard()
            .case(c)
            .latency(Op::Rank, c, "777")
            .build()
    })
    .unwrap();

    let variant = Variant::scatter();
    let sequential = RenderOptions {
        dir: dir.path().to_path_buf(),
        ..Default::default()
    };
    let parallel = RenderOptions {
        parallel: true,
        ..sequential.clone()
    };
    assert_eq!(
        render_variant(&variant, sequential).unwrap(),
        render_variant(&variant, parallel).unwrap()
    );
}

#[test]
fn test_paged_single_case() {
    let dir = tempfile::tempdir().unwrap();
    write_cases(dir.path(), "r", [20], |c| ReportBuilder::compact().case(c).build()).unwrap();

    let tex = render_variant(
        &Variant::paged(),
        RenderOptions {
            dir: dir.path().to_path_buf(),
            cases: vec![20],
            strict: true,
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(tex.matches(r"\begin{figure}").count(), 4);
    assert_eq!(tex.matches(r"\clearpage").count(), 4);
    assert!(tex.contains("gaps de largo promedio $31$, runs de largo promedio\n    $1,000$ con una probabilidad de $0.0001$.}"));
}

#[test]
fn test_missing_case_file_names_path() {
    let dir = report_dir("ru", 0..5);
    let err = render_variant(
        &Variant::scatter(),
        RenderOptions {
            dir: dir.path().to_path_buf(),
            ..Default::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::Io { .. }));
    assert!(err.to_string().contains("ru5.txt"));
}

#[test]
fn test_strict_reports_misaligned_file() {
    let dir = tempfile::tempdir().unwrap();
    write_cases(dir.path(), "r", [0], |c| ReportBuilder::standard().case(c).build()).unwrap();

    let variant = Variant::paged();
    let driver = Driver::new(
        &variant,
        RenderOptions {
            dir: dir.path().to_path_buf(),
            cases: vec![0],
            strict: true,
            ..Default::default()
        },
    )
    .unwrap();
    let err = driver.render().unwrap_err();
    assert!(err.to_string().contains("r0.txt"));
    assert!(err.to_string().contains("labelled 's18'"));
}
