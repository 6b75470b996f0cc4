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

//! Synthetic Google Benchmark reports.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Timed operation of a report section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Op {
    Access,
    Rank,
    Select,
    Successor,
}

impl Op {
    /// Sections in report order.
    pub const ALL: [Op; 4] = [Op::Access, Op::Rank, Op::Select, Op::Successor];

    /// Keyword used in benchmark names.
    pub fn keyword(self) -> &'static str {
        match self {
            Op::Access => "access",
            Op::Rank => "rank",
            Op::Select => "select",
            Op::Successor => "successor",
        }
    }

    fn base_latency(self) -> usize {
        match self {
            Op::Access => 20,
            Op::Rank => 30,
            Op::Select => 40,
            Op::Successor => 50,
        }
    }
}

/// Latency written for the plain successor rows that use alternative
/// rank/select supports.
pub const EXTRA_PLAIN_LATENCY: &str = "999";

const RULE: &str = "--------------------------------------------------------------------------";
const HEADER: &str = "Benchmark                                  Time           CPU Iterations";

#[derive(Debug, Clone, Copy)]
struct Family {
    name: &'static str,
    params: &'static [u32],
}

const STANDARD: [Family; 6] = [
    Family { name: "bv", params: &[0] },
    Family { name: "s9", params: &[8, 16, 32, 64, 128, 256, 512] },
    Family { name: "s18", params: &[1, 2, 4, 8, 16, 32, 64] },
    Family { name: "rrr", params: &[7, 15, 31, 63, 127, 255] },
    Family { name: "sd", params: &[0] },
    Family { name: "hyb", params: &[0] },
];

const COMPACT: [Family; 6] = [
    Family { name: "bv", params: &[0] },
    Family { name: "s9", params: &[8, 16, 32, 64, 128, 256] },
    Family { name: "s18", params: &[1, 2, 4, 8, 16] },
    Family { name: "rrr", params: &[7, 15, 31, 63, 127, 255] },
    Family { name: "sd", params: &[0] },
    Family { name: "hyb", params: &[0] },
];

/// Builds the text of a benchmark report with known values.
///
/// Rows are numbered the way the label schemes number them: row 0 is the
/// plain vector, the hybrid vector is last. Select and Successor have no
/// hybrid row. Successor additionally carries three plain rows with
/// alternative supports right after the first one, so a standard report
/// is exactly 105 lines with the four sections starting at lines 3, 29,
/// 55 and 80.
///
/// Defaults: row `i` has size `"{10 + 5i}m"` (plain is `"0.125"`), and
/// latency `base + i` with base 20/30/40/50 for Access/Rank/Select/Successor.
///
/// ```
/// use bvplot_test::{Op, ReportBuilder};
///
/// let text = ReportBuilder::standard()
///     .latency(Op::Rank, 3, "501")
///     .size(3, "1.5")
///     .build();
/// assert_eq!(text.lines().count(), 105);
/// ```
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    families: &'static [Family],
    case: usize,
    sizes: BTreeMap<usize, String>,
    latencies: BTreeMap<(Op, usize), String>,
}

impl ReportBuilder {
    /// 23 rows per section: plain, 7 s9, 7 s18, 6 rrr, sd, hyb.
    pub fn standard() -> Self {
        Self::with_families(&STANDARD)
    }

    /// 20 rows per section: plain, 6 s9, 5 s18, 6 rrr, sd, hyb.
    pub fn compact() -> Self {
        Self::with_families(&COMPACT)
    }

    fn with_families(families: &'static [Family]) -> Self {
        Self {
            families,
            case: 0,
            sizes: BTreeMap::new(),
            latencies: BTreeMap::new(),
        }
    }

    /// Case number appended to every benchmark name.
    pub fn case(mut self, case: usize) -> Self {
        self.case = case;
        self
    }

    /// Override the size counter of row `index`.
    pub fn size(mut self, index: usize, value: impl Into<String>) -> Self {
        self.sizes.insert(index, value.into());
        self
    }

    /// Override the latency of row `index` in the `op` section.
    pub fn latency(mut self, op: Op, index: usize, value: impl Into<String>) -> Self {
        self.latencies.insert((op, index), value.into());
        self
    }

    /// Number of labelled rows (the Access section length).
    pub fn row_count(&self) -> usize {
        self.families.iter().map(|f| f.params.len()).sum()
    }

    /// Size text of row `index`.
    pub fn size_of(&self, index: usize) -> String {
        self.sizes.get(&index).cloned().unwrap_or_else(|| {
            if index == 0 {
                "0.125".to_owned()
            } else {
                format!("{}m", 10 + 5 * index)
            }
        })
    }

    /// Latency text of row `index` in the `op` section.
    pub fn latency_of(&self, op: Op, index: usize) -> String {
        self.latencies
            .get(&(op, index))
            .cloned()
            .unwrap_or_else(|| (op.base_latency() + index).to_string())
    }

    /// Render the report.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for op in Op::ALL {
            out.push_str(RULE);
            out.push('\n');
            out.push_str(HEADER);
            out.push('\n');
            out.push_str(RULE);
            out.push('\n');
            self.write_section(&mut out, op);
        }
        out
    }

    fn write_section(&self, out: &mut String, op: Op) {
        let mut index = 0;
        for family in self.families {
            for &param in family.params {
                let skip = family.name == "hyb" && matches!(op, Op::Select | Op::Successor);
                if !skip {
                    let name = benchmark_name(op, family.name, param, self.case);
                    self.write_row(out, op, index, &name);
                    if op == Op::Successor && family.name == "bv" {
                        for extra in EXTRA_PLAIN_SUCCESSORS {
                            let name = format!("BM_successor_bv<{extra}>/{}", self.case);
                            write_timed(out, &name, EXTRA_PLAIN_LATENCY);
                        }
                    }
                }
                index += 1;
            }
        }
    }

    fn write_row(&self, out: &mut String, op: Op, index: usize, name: &str) {
        let latency = self.latency_of(op, index);
        if op == Op::Access {
            let size = self.size_of(index);
            let _ = writeln!(
                out,
                "{name:<60} {latency:>6} ns {latency:>10} ns {:>10} bits=1.37M comp={size} size={size}",
                1000 + index
            );
        } else {
            write_timed(out, name, &latency);
        }
    }
}

const EXTRA_PLAIN_SUCCESSORS: [&str; 3] = [
    "sdsl::bit_vector, sdsl::rank_support_v5<1>, sdsl::select_support_mcl<1>",
    "sdsl::bit_vector, sdsl::rank_support_scan<1>, sdsl::select_support_mcl<1>",
    "sdsl::bit_vector, sdsl::rank_support_scan<1>, sdsl::select_support_scan<1>",
];

fn write_timed(out: &mut String, name: &str, latency: &str) {
    let _ = writeln!(out, "{name:<60} {latency:>6} ns {latency:>10} ns {:>10}", 1000);
}

/// Template arguments of the sdsl types benchmarked for `family`.
fn type_args(op: Op, family: &str, param: u32) -> Option<String> {
    let vector = match family {
        "bv" => "sdsl::bit_vector".to_owned(),
        "s9" => format!("sdsl::s9_vector<{param}>"),
        "s18" => format!("sdsl::s18::vector<{param}>"),
        "rrr" => format!("sdsl::rrr_vector<{param}>"),
        "sd" => "sdsl::sd_vector<>".to_owned(),
        _ => return None,
    };
    let rank = match family {
        "bv" => "sdsl::rank_support_v<1>".to_owned(),
        "s18" => format!("sdsl::s18::rank_support<1,{param}>"),
        "sd" => "sdsl::rank_support_sd<1>".to_owned(),
        other => format!("sdsl::rank_support_{other}<1,{param}>"),
    };
    let select = match family {
        "bv" => "sdsl::select_support_mcl<1>".to_owned(),
        "s18" => format!("sdsl::s18::select_support<1,{param}>"),
        "sd" => "sdsl::select_support_sd<1>".to_owned(),
        other => format!("sdsl::select_support_{other}<1,{param}>"),
    };
    Some(match op {
        Op::Access => vector,
        Op::Rank => format!("{vector}, {rank}"),
        Op::Select => format!("{vector}, {select}"),
        Op::Successor => format!("{vector}, {rank}, {select}"),
    })
}

fn benchmark_name(op: Op, family: &str, param: u32, case: usize) -> String {
    match type_args(op, family, param) {
        Some(args) => format!("BM_{}_{family}<{args}>/{case}", op.keyword()),
        None => format!("BM_{}_{family}/{case}", op.keyword()),
    }
}

/// A standard report for `case` with default values.
pub fn standard_report(case: usize) -> String {
    ReportBuilder::standard().case(case).build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_starts(text: &str) -> Vec<usize> {
        let lines: Vec<&str> = text.lines().collect();
        lines
            .iter()
            .enumerate()
            .filter(|(i, l)| l.starts_with("BM_") && !lines[i - 1].starts_with("BM_"))
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_standard_shape() {
        let text = ReportBuilder::standard().build();
        assert_eq!(text.lines().count(), 105);
        assert_eq!(section_starts(&text), vec![3, 29, 55, 80]);
    }

    #[test]
    fn test_compact_rows() {
        let builder = ReportBuilder::compact();
        assert_eq!(builder.row_count(), 20);
        let access = builder
            .build()
            .lines()
            .filter(|l| l.starts_with("BM_access_"))
            .count();
        assert_eq!(access, 20);
    }

    #[test]
    fn test_overrides() {
        let builder = ReportBuilder::standard()
            .size(2, "1.5")
            .latency(Op::Select, 4, "777");
        assert_eq!(builder.size_of(2), "1.5");
        assert_eq!(builder.size_of(0), "0.125");
        assert_eq!(builder.latency_of(Op::Select, 4), "777");
        assert_eq!(builder.latency_of(Op::Rank, 4), "34");

        let text = builder.build();
        assert!(text.lines().any(|l| l.contains("BM_select_s9<sdsl::s9_vector<64>,")
            && l.split_whitespace().rev().nth(4) == Some("777")));
    }

    #[test]
    fn test_access_row_fields() {
        let text = standard_report(7);
        let row = text
            .lines()
            .find(|l| l.starts_with("BM_access_hyb/7"))
            .unwrap();
        let fields: Vec<_> = row.split_whitespace().collect();
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[fields.len() - 8], "42");
        assert_eq!(fields[fields.len() - 2], "comp=120m");
    }

    #[test]
    fn test_successor_extras_follow_plain() {
        let text = standard_report(0);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[80].starts_with("BM_successor_bv<sdsl::bit_vector, sdsl::rank_support_v<1>,"));
        assert!(lines[81..84].iter().all(|l| l.contains("rank_support_v5")
            || l.contains("rank_support_scan")));
        assert!(lines[84].starts_with("BM_successor_s9<"));
        assert!(lines[104].starts_with("BM_successor_sd<"));
    }
}
