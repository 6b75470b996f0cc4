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

//! Commands that read benchmark reports.

use crate::commands;
use crate::error::CliError;
use bvplot::RenderOptions;
use clap::Subcommand;
use std::path::PathBuf;

/// Core BVPlot commands.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Render the figures of a variant
    ///
    /// Reads `<prefix><N>.txt` for every requested case from the input
    /// directory and writes one LaTeX figure per operation and case, grouped
    /// by operation.
    Render {
        /// Built-in variant (scatter, paged, smooth), or a variant of --config
        #[arg(long, value_name = "NAME")]
        variant: Option<String>,

        /// JSON file with one variant or a list of variants
        #[arg(long, value_name = "FILE")]
        config: Option<String>,

        /// Directory holding the report files
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,

        /// Case to render; repeat for several (default: every case)
        #[arg(short, long = "case", value_name = "N")]
        cases: Vec<usize>,

        /// Section layout override (named, offsets)
        #[arg(long, value_name = "LAYOUT")]
        layout: Option<String>,

        /// Check each row's benchmark name against its label
        #[arg(long)]
        strict: bool,

        /// Load case files in parallel
        #[arg(long)]
        parallel: bool,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Show how a report is split into sections and labelled
    Inspect {
        /// Report file
        #[arg(value_name = "FILE")]
        file: String,

        /// Section layout (named, offsets)
        #[arg(long, default_value = "named")]
        layout: String,

        /// Label scheme (standard, compact)
        #[arg(long, default_value = "standard")]
        scheme: String,

        /// Print every resolved row
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the built-in variants
    Variants {
        /// Print the full configurations as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Render {
                variant,
                config,
                dir,
                cases,
                layout,
                strict,
                parallel,
                output,
            } => {
                let variant =
                    commands::select_variant(variant.as_deref(), config.as_deref(), layout.as_deref())?;
                let options = RenderOptions {
                    dir,
                    cases,
                    strict,
                    parallel,
                };
                commands::render(&variant, options, output.as_deref())
            }
            CoreCommands::Inspect {
                file,
                layout,
                scheme,
                verbose,
            } => commands::inspect(&file, &layout, &scheme, verbose),
            CoreCommands::Variants { json } => commands::variants(json),
        }
    }
}
