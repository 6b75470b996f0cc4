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

//! Completion scripts for `bvplot` and how to load them.

use crate::cli::Cli;
use crate::error::CliError;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

const BIN: &str = "bvplot";

/// Write the completion script for `shell` to stdout, or with `install`
/// the commands that load it.
///
/// # Errors
///
/// Returns `Err` if stdout cannot be written.
pub fn completion(shell: Shell, install: bool) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    if install {
        stdout
            .write_all(install_hint(shell).as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e))
    } else {
        generate(shell, &mut Cli::command(), BIN, &mut stdout);
        Ok(())
    }
}

/// Commands that load the completion script of `shell`, first for the
/// running session and then for every new one.
///
/// ```
/// use bvplot_cli::commands::install_hint;
/// use clap_complete::Shell;
///
/// let hint = install_hint(Shell::Fish);
/// assert!(hint.contains("bvplot completion fish | source"));
/// assert!(hint.contains("~/.config/fish/completions/bvplot.fish"));
/// ```
pub fn install_hint(shell: Shell) -> String {
    let script = format!("{BIN} completion {shell}");
    let (session, persistent) = match shell {
        Shell::Bash => (
            format!("source <({script})"),
            format!("{script} > ~/.local/share/bash-completion/completions/{BIN}"),
        ),
        Shell::Zsh => (
            format!("source <({script})"),
            format!("{script} > \"${{fpath[1]}}/_{BIN}\""),
        ),
        Shell::Fish => (
            format!("{script} | source"),
            format!("{script} > ~/.config/fish/completions/{BIN}.fish"),
        ),
        Shell::PowerShell => (
            format!("{script} | Out-String | Invoke-Expression"),
            format!("Add-Content $PROFILE '{script} | Out-String | Invoke-Expression'"),
        ),
        Shell::Elvish => (
            format!("eval ({script} | slurp)"),
            format!("echo 'eval ({script} | slurp)' >> ~/.config/elvish/rc.elv"),
        ),
        _ => (
            script.clone(),
            format!("{script} > <{shell} completion directory>"),
        ),
    };
    format!("# {shell}: this session\n{session}\n\n# {shell}: every session\n{persistent}\n")
}
