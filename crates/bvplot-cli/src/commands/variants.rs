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

//! Variants command - built-in configuration listing

use crate::error::CliError;
use bvplot::Variant;
use colored::Colorize;

/// List the built-in variants.
///
/// With `json`, prints the full configurations as a JSON array that
/// `render --config` reads back.
///
/// # Errors
///
/// Returns `Err` if serialization fails.
pub fn variants(json: bool) -> Result<(), CliError> {
    let builtins = Variant::builtins();

    if json {
        println!("{}", serde_json::to_string_pretty(&builtins)?);
        return Ok(());
    }

    for variant in &builtins {
        let cases = if variant.single_case {
            format!("{} cases, one per run with --case", variant.cases.len())
        } else {
            format!("{} cases", variant.cases.len())
        };
        println!("{}  {}", variant.name.bold(), variant.description);
        println!(
            "    {} {}<N>.txt, {}, {} labels, {} layout{}",
            "input:".cyan(),
            variant.input_prefix,
            cases,
            variant.scheme.name,
            variant.layout.kind(),
            if variant.filter.is_some() { ", outliers dropped" } else { "" }
        );
    }
    Ok(())
}
