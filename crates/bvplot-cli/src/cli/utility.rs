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

//! `completion` subcommand.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use clap_complete::Shell;

/// Commands that do not read reports.
#[derive(Subcommand)]
pub enum UtilityCommands {
    /// Print a shell completion script for bvplot
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,

        /// Print how to load the script instead of the script itself
        #[arg(short, long)]
        install: bool,
    },
}

impl UtilityCommands {
    /// Execute the utility command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if stdout cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            UtilityCommands::Completion { shell, install } => commands::completion(shell, install),
        }
    }
}
