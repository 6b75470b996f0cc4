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

//! Size counters and their milli suffix.
//!
//! Sizes are printed by the benchmark library with an SI suffix. A size
//! ending in `m` is written into the data table as `0.00` followed by its
//! digits with the decimal point dropped, so `5m` becomes `0.005` and
//! `167.236m` becomes `0.00167236`. The rewrite works on the text so the
//! digits in the figure are exactly the digits in the report. Any other
//! text passes through unchanged.

use std::fmt;

use crate::error::{PlotError, Result};

const MILLI_PREFIX: &str = "0.00";

/// Rewrite a size ending in `m` as `0.00` and its digits.
///
/// Text without the suffix, or whose mantissa holds anything but digits
/// and decimal points, is returned unchanged.
///
/// ```
/// use bvplot_core::size::normalize;
///
/// assert_eq!(normalize("1.500"), "1.500");
/// assert_eq!(normalize("5m"), "0.005");
/// assert_eq!(normalize("12m"), "0.0012");
/// assert_eq!(normalize("167.236m"), "0.00167236");
/// ```
pub fn normalize(raw: &str) -> String {
    let Some(mantissa) = raw.strip_suffix('m') else {
        return raw.to_owned();
    };
    let digits: String = mantissa.chars().filter(|&c| c != '.').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_owned();
    }
    format!("{MILLI_PREFIX}{digits}")
}

/// The value part of a `key=value` counter field.
///
/// ```
/// use bvplot_core::size::counter_value;
///
/// assert_eq!(counter_value("comp=1.5m"), Some("1.5m"));
/// assert_eq!(counter_value("1.5m"), None);
/// ```
pub fn counter_value(field: &str) -> Option<&str> {
    field.rsplit_once('=').map(|(_, value)| value)
}

/// A size as printed in the data table, with its numeric value.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeValue {
    text: String,
    value: f64,
}

impl SizeValue {
    /// Normalize `raw` and parse its numeric value.
    ///
    /// # Errors
    ///
    /// [`PlotError::InvalidNumber`] if the normalized text is not a number.
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, true)
    }

    /// Parse `raw`, keeping its text as printed unless `normalize_text`.
    ///
    /// The numeric value is always read from the normalized form, so
    /// ratios stay comparable whichever text the figure shows.
    ///
    /// ```
    /// use bvplot_core::size::SizeValue;
    ///
    /// let size = SizeValue::parse_with("5m", false).unwrap();
    /// assert_eq!(size.text(), "5m");
    /// assert!((size.value() - 0.005).abs() < 1e-12);
    /// ```
    ///
    /// # Errors
    ///
    /// [`PlotError::InvalidNumber`] if the normalized text is not a number.
    pub fn parse_with(raw: &str, normalize_text: bool) -> Result<Self> {
        let normalized = normalize(raw);
        let value = normalized
            .parse::<f64>()
            .map_err(|_| PlotError::invalid_number("size", raw))?;
        let text = if normalize_text { normalized } else { raw.to_owned() };
        Ok(Self { text, value })
    }

    /// Text written verbatim into the figure.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Numeric value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Compression ratio relative to `plain`.
    pub fn ratio_to(&self, plain: &SizeValue) -> f64 {
        self.value / plain.value
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
