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

//! Presentation options for rendered figures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How data points are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PlotKind {
    /// Marks only, one class per representation.
    Scatter,
    /// Marks joined by a smoothed black line.
    Smooth,
}

/// Page break written after a figure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PageBreak {
    /// Figures share pages.
    #[default]
    None,
    /// `\clearpage\newpage` on one line.
    Inline,
    /// `\clearpage` and `\newpage` on lines of their own.
    Split,
}

impl PageBreak {
    /// Lines written after `\end{figure}`.
    pub fn lines(self) -> &'static [&'static str] {
        match self {
            PageBreak::None => &[],
            PageBreak::Inline => &[r"\clearpage\newpage"],
            PageBreak::Split => &[r"\clearpage", r"\newpage"],
        }
    }
}

/// Fixed axis bounds; unset bounds are left to pgfplots.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AxisLimits {
    /// Lower x bound.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub xmin: Option<f64>,
    /// Upper x bound.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub xmax: Option<f64>,
    /// Lower y bound.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ymin: Option<f64>,
    /// Upper y bound.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ymax: Option<f64>,
}

impl AxisLimits {
    /// Limits as `(key, value)` pairs in pgfplots option order.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        [
            ("xmin", self.xmin),
            ("ymin", self.ymin),
            ("ymax", self.ymax),
            ("xmax", self.xmax),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k, v)))
        .collect()
    }
}

/// Everything about a figure that does not depend on the data.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FigureStyle {
    /// Float placement specifier, e.g. `!htbp`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub placement: Option<String>,
    /// Marks or smoothed lines.
    pub plot: PlotKind,
    /// Fixed axis bounds.
    #[cfg_attr(feature = "serde", serde(default))]
    pub axis_limits: Option<AxisLimits>,
    /// Page break after the figure.
    #[cfg_attr(feature = "serde", serde(default))]
    pub page_break: PageBreak,
    /// Draw each same-label run as its own plot.
    #[cfg_attr(feature = "serde", serde(default))]
    pub grouped: bool,
}

impl FigureStyle {
    /// Scatter marks, floated `!htbp`, several figures per page.
    pub fn scatter() -> Self {
        Self {
            placement: Some("!htbp".to_owned()),
            plot: PlotKind::Scatter,
            axis_limits: None,
            page_break: PageBreak::None,
            grouped: false,
        }
    }

    /// Scatter marks, one figure per page.
    pub fn paged() -> Self {
        Self {
            placement: None,
            plot: PlotKind::Scatter,
            axis_limits: None,
            page_break: PageBreak::Inline,
            grouped: false,
        }
    }

    /// Smoothed per-representation lines inside fixed axis bounds, floated
    /// `!htbp` with a page break after each figure.
    pub fn smooth() -> Self {
        Self {
            placement: Some("!htbp".to_owned()),
            plot: PlotKind::Smooth,
            axis_limits: Some(AxisLimits {
                xmin: Some(0.0),
                xmax: Some(1.4),
                ymin: None,
                ymax: Some(500.0),
            }),
            page_break: PageBreak::Split,
            grouped: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_limit_order() {
        let limits = FigureStyle::smooth().axis_limits.unwrap();
        assert_eq!(
            limits.entries(),
            vec![("xmin", 0.0), ("ymax", 500.0), ("xmax", 1.4)]
        );
    }

    #[test]
    fn test_builtin_styles() {
        assert_eq!(FigureStyle::scatter().placement.as_deref(), Some("!htbp"));
        assert_eq!(FigureStyle::scatter().page_break, PageBreak::None);
        assert_eq!(FigureStyle::paged().page_break, PageBreak::Inline);
        assert_eq!(FigureStyle::smooth().page_break, PageBreak::Split);
        assert!(FigureStyle::paged().placement.is_none());
        assert!(FigureStyle::smooth().grouped);
        assert_eq!(FigureStyle::smooth().plot, PlotKind::Smooth);
    }

    #[test]
    fn test_page_break_lines() {
        assert!(PageBreak::None.lines().is_empty());
        assert_eq!(PageBreak::Inline.lines(), [r"\clearpage\newpage"]);
        assert_eq!(PageBreak::Split.lines(), [r"\clearpage", r"\newpage"]);
    }
}
