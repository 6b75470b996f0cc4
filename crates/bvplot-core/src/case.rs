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

//! Benchmark cases: the parameters each input file was generated with.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{PlotError, Result};

/// Parameters of one generated bit vector, as shown in figure captions.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseParams {
    /// Case number, also the number in the input file name.
    pub index: usize,
    /// Average gap length (LaTeX text).
    pub gap_length: String,
    /// Average run length (LaTeX text).
    pub run_length: String,
    /// Probability of starting a run instead of a gap.
    pub probability: f64,
}

/// Grid of case parameters.
///
/// Case numbers enumerate the grid with probability varying fastest,
/// then run length, then gap length:
///
/// ```text
/// gap  = gap_lengths[c / (runs * probs)]
/// run  = run_lengths[(c % (runs * probs)) / probs]
/// prob = probabilities[c % probs]
/// ```
///
/// A table with a single gap and run length is a plain list of
/// probabilities.
///
/// # Examples
///
/// ```
/// use bvplot_core::CaseTable;
///
/// let table = CaseTable::new(
///     vec!["4".into(), "7".into()],
///     vec!["1,000".into(), "10,000".into()],
///     vec![0.01, 0.001, 0.0001],
/// );
/// assert_eq!(table.len(), 12);
///
/// let case = table.get(7).unwrap();
/// assert_eq!(case.gap_length, "7");
/// assert_eq!(case.run_length, "1,000");
/// assert_eq!(case.probability, 0.001);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CaseTable {
    /// Average gap lengths.
    pub gap_lengths: Vec<String>,
    /// Average run lengths.
    pub run_lengths: Vec<String>,
    /// Run probabilities.
    pub probabilities: Vec<f64>,
}

impl CaseTable {
    /// Build a table from its three axes.
    pub fn new(gap_lengths: Vec<String>, run_lengths: Vec<String>, probabilities: Vec<f64>) -> Self {
        Self {
            gap_lengths,
            run_lengths,
            probabilities,
        }
    }

    /// A table with one gap and run length and a list of probabilities.
    pub fn flat(gap_length: &str, run_length: &str, probabilities: &[f64]) -> Self {
        Self::new(
            vec![gap_length.to_owned()],
            vec![run_length.to_owned()],
            probabilities.to_vec(),
        )
    }

    /// Number of cases.
    pub fn len(&self) -> usize {
        self.gap_lengths.len() * self.run_lengths.len() * self.probabilities.len()
    }

    /// Whether the table has no cases.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parameters of case `case`.
    ///
    /// # Errors
    ///
    /// [`PlotError::CaseOutOfRange`] if `case >= self.len()`.
    pub fn get(&self, case: usize) -> Result<CaseParams> {
        let cases = self.len();
        if case >= cases {
            return Err(PlotError::CaseOutOfRange { case, cases });
        }
        let probs = self.probabilities.len();
        let per_gap = self.run_lengths.len() * probs;
        Ok(CaseParams {
            index: case,
            gap_length: self.gap_lengths[case / per_gap].clone(),
            run_length: self.run_lengths[(case % per_gap) / probs].clone(),
            probability: self.probabilities[case % probs],
        })
    }

    /// All cases in order.
    pub fn iter(&self) -> impl Iterator<Item = CaseParams> + '_ {
        (0..self.len()).filter_map(move |c| self.get(c).ok())
    }

    /// Check the table is not degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(PlotError::invalid_config(
                "cases",
                "gap_lengths, run_lengths and probabilities must all be non-empty",
            ));
        }
        if let Some(p) = self
            .probabilities
            .iter()
            .find(|p| !(0.0..=1.0).contains(*p))
        {
            return Err(PlotError::invalid_config(
                "probabilities",
                format!("{p} is not a probability"),
            ));
        }
        Ok(())
    }
}
