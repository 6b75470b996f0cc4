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

//! BVPlot CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **render**: Render the figures of a variant to LaTeX
//! - **inspect**: Show how a single report is split and labelled
//! - **variants**: List the built-in variants, or dump them as JSON
//! - **completion**: Generate shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Examples
//!
//! ```bash
//! # Every case of the scatter variant, from ru0.txt .. ru10.txt
//! bvplot render --dir results/ --output scatter.tex
//!
//! # One page per figure for case 14 of the paged variant
//! bvplot render --variant paged --case 14 --strict
//!
//! # Edit a variant and render with it
//! bvplot variants --json > variants.json
//! bvplot render --config variants.json --variant smooth
//! ```

pub mod cli;
pub mod commands;
pub mod error;
