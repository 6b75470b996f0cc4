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

//! Inspect command - section and label diagnostics for one report

use crate::error::CliError;
use bvplot::model::{load, Resolver, Sections};
use bvplot::{LabelScheme, LayoutKind, Method};
use colored::Colorize;

/// Print how a report splits into sections and how its rows are labelled.
///
/// Shows the row count of every section, the plain vector's size and
/// whether each section's benchmark names agree with the scheme. With
/// `verbose`, every resolved row is listed with its size, latency and
/// compression ratio.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the layout or scheme is
/// unknown, or the report cannot be split or resolved.
pub fn inspect(file: &str, layout: &str, scheme: &str, verbose: bool) -> Result<(), CliError> {
    let report = load(file)?;
    let kind: LayoutKind = layout.parse()?;
    let scheme = LabelScheme::builtin(scheme)?;
    let sections = kind
        .layout()
        .extract(&report)
        .map_err(|e| e.in_report(file))?;
    let resolver = Resolver::new(&sections, &scheme).map_err(|e| e.in_report(file))?;
    let plain = resolver.plain_size().map_err(|e| e.in_report(file))?;

    println!("{}", "Benchmark Report".bold().underline());
    println!();
    println!("{}  {}", "File:".cyan(), file);
    println!("{}  {} ({} lines)", "Layout:".cyan(), kind, report.lines().len());
    println!("{}  {} ({} labels)", "Scheme:".cyan(), scheme.name, scheme.len());
    println!("{}  {}", "Plain size:".cyan(), plain);

    println!();
    println!("{}", "Sections".bold());
    for section in sections.iter() {
        let padding = if section.len() > section.data_len() {
            " + sentinel"
        } else {
            ""
        };
        let labels = match resolver.clone().strict(true).resolve(section.method()) {
            Ok(_) => "labels ok".green(),
            Err(e) => e.to_string().yellow(),
        };
        println!(
            "  {:<10} {:>3} rows{:<11}  {}",
            section.method().name(),
            section.data_len(),
            padding,
            labels
        );
    }

    if verbose {
        for method in Method::ALL {
            print_rows(&resolver, &sections, method, &plain)?;
        }
    }

    Ok(())
}

fn print_rows(
    resolver: &Resolver<'_>,
    sections: &Sections,
    method: Method,
    plain: &bvplot::model::SizeValue,
) -> Result<(), CliError> {
    println!();
    println!("{}", method.name().bold());
    for record in resolver.resolve(method)? {
        let name = sections
            .get(method)
            .row(record.index)
            .and_then(|row| row.name())
            .unwrap_or("?");
        println!(
            "  {:>3}  {:<6} {:>10} {:>10}  {:>6.3}  {}",
            record.index,
            record.label.label().cyan(),
            record.size.text(),
            record.latency,
            record.size.ratio_to(plain),
            name.dimmed()
        );
    }
    Ok(())
}
