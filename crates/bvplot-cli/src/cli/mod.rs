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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: commands that read reports (render, inspect, variants)
//! - [`utility`]: shell completion

mod core;
mod utility;

use crate::error::CliError;
use clap::{Parser, Subcommand};

pub use self::core::CoreCommands;
pub use self::utility::UtilityCommands;

/// BVPlot - LaTeX figures from bit-vector benchmark reports
///
/// Reads Google Benchmark reports of a compressed bit-vector suite and
/// writes pgfplots figures of latency versus compression ratio.
#[derive(Parser)]
#[command(name = "bvplot")]
#[command(author, version, about = "BVPlot - LaTeX figures from bit-vector benchmark reports", long_about = None)]
pub struct Cli {
    /// Log more (-v info, -vv debug); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
///
/// ```text
/// Commands
/// ├── Core (render, inspect, variants)
/// └── Utility (completion)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Core commands - flattened to appear at top level
    #[command(flatten)]
    Core(CoreCommands),

    // Utility commands - flattened to appear at top level
    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a report or config cannot be read, a report does not
    /// match its variant, or the output cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
