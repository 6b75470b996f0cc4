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

//! pgfplots figure writer.
//!
//! Emits one `figure` environment per [`FigureData`]: an axis with one
//! `\addplot` per segment, a fixed legend and a caption naming the
//! operation and the case parameters.

use bvplot_core::{FigureData, FigureStyle, PlotKind, PlotRecord, Representation, Segment};

// ==================== Layout Constants ====================

/// Indentation of data lines inside a `table{...}` block.
pub const DATA_INDENT: usize = 16;

/// Column header of the data table.
const TABLE_HEADER: &str = "label   size    latency";

/// Initial output capacity for one figure.
const FIGURE_CAPACITY: usize = 4096;

// ==================== Axis Constants ====================

/// Fixed axis options, in output order, before any axis limits.
const AXIS_OPTIONS: [&str; 8] = [
    r"width=\textwidth",
    r"height=\textwidth",
    "legend pos=south east",
    r"xlabel={Ratio de compresión $\left[\frac{\text{bit}}{\text{bit}}\right]$}",
    r"ylabel={Latencia [ns]}",
    r"legend style={font=\scriptsize}",
    r"ticklabel style = {font=\small}",
    r"label style={font=\small}",
];

/// Scatter mark of each representation.
fn mark(rep: Representation, plot: PlotKind) -> &'static str {
    match (rep, plot) {
        (Representation::Plain, PlotKind::Scatter) => "mark=square*",
        (Representation::Plain, PlotKind::Smooth) => "mark=square*,draw=black",
        (Representation::S9, _) => "mark=o,fill=black",
        (Representation::S18, _) => "mark=triangle*",
        (Representation::Rrr, _) => "mark=x",
        (Representation::Sd, _) => "mark=square",
        (Representation::Hyb, _) => "mark=triangle",
    }
}

/// Legend entry for a representation: its type name in typewriter font.
fn legend_entry(rep: Representation) -> String {
    format!(r"\texttt{{{}}}", rep.type_name().replace('_', r"\_"))
}

/// Writes pgfplots figures for one [`FigureStyle`].
///
/// # Examples
///
/// ```
/// use bvplot_core::{BenchmarkFile, CaseReport, Method, Variant};
/// use bvplot_tex::FigureWriter;
///
/// let variant = Variant::scatter();
/// let file = BenchmarkFile::from_text("ru0.txt", &bvplot_test::standard_report(0));
/// let figure = CaseReport::from_file(&variant, 0, &file)
///     .and_then(|r| r.figure(&variant, Method::Access, false))
///     .unwrap();
///
/// let tex = FigureWriter::new(&variant.style).write_figure(&figure);
/// assert!(tex.contains(r"\begin{figure}[!htbp]"));
/// assert!(tex.contains("                plain\t0.125\t20\n"));
/// ```
#[derive(Debug, Clone)]
pub struct FigureWriter<'a> {
    style: &'a FigureStyle,
    output: String,
}

impl<'a> FigureWriter<'a> {
    /// Create a writer for `style`.
    pub fn new(style: &'a FigureStyle) -> Self {
        Self {
            style,
            output: String::with_capacity(FIGURE_CAPACITY),
        }
    }

    /// Render one figure.
    pub fn write_figure(&mut self, figure: &FigureData) -> String {
        let style = self.style;
        self.output.clear();

        self.line("");
        match &style.placement {
            Some(placement) => self.line(&format!(r"\begin{{figure}}[{placement}]")),
            None => self.line(r"\begin{figure}"),
        }
        self.line(r"    \centering");
        self.line(r"    \begin{tikzpicture}");
        self.write_axis_options();

        let plain = figure.plain_size.text();
        for segment in &figure.segments {
            self.write_segment(segment, plain);
        }

        self.write_legend();
        self.line(r"        \end{axis}");
        self.line(r"    \end{tikzpicture}");
        self.write_caption(figure);
        self.line(r"\end{figure}");
        for line in style.page_break.lines() {
            self.line(line);
        }

        std::mem::take(&mut self.output)
    }

    fn line(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn write_axis_options(&mut self) {
        let style = self.style;
        let mut options: Vec<String> = AXIS_OPTIONS.iter().map(|o| (*o).to_owned()).collect();
        if let Some(limits) = &style.axis_limits {
            options.extend(limits.entries().into_iter().map(|(k, v)| format!("{k}={v}")));
        }

        self.line(r"        \begin{axis}[");
        let last = options.len().saturating_sub(1);
        for (i, option) in options.iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            self.line(&format!("            {option}{sep}"));
        }
        self.line("        ]");
    }

    fn write_segment(&mut self, segment: &Segment, plain: &str) {
        let plot = self.style.plot;
        self.line(r"            \addplot[");
        match plot {
            PlotKind::Scatter => {
                self.line("                scatter,only marks,scatter src=explicit symbolic,")
            }
            PlotKind::Smooth => {
                self.line("                scatter,smooth,black,scatter src=explicit symbolic,")
            }
        }
        self.line("                scatter/classes={");
        let last = Representation::ALL.len() - 1;
        for (i, rep) in Representation::ALL.into_iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            self.line(&format!(
                "                    {}={{{}}}{sep}",
                rep.label(),
                mark(rep, plot)
            ));
        }
        self.line("                },");
        self.line("            ]");
        self.line(&format!(
            r"            table[x expr=\thisrow{{size}}/{plain},y=latency,meta=label]{{"
        ));
        self.line(&format!("{}{TABLE_HEADER}", " ".repeat(DATA_INDENT)));
        for record in &segment.records {
            let row = data_line(record);
            self.line(&row);
        }
        self.line("};");
    }

    fn write_legend(&mut self) {
        self.line(r"            \legend{");
        let last = Representation::ALL.len() - 1;
        for (i, rep) in Representation::ALL.into_iter().enumerate() {
            let sep = if i == last { "" } else { "," };
            self.line(&format!("                {}{sep}", legend_entry(rep)));
        }
        self.line("            }");
    }

    fn write_caption(&mut self, figure: &FigureData) {
        let method = figure.method.name();
        let case = &figure.case;
        self.line(&format!(
            r"    \caption[Rendimiento de \textsc{{{method}}} en un vector denso]{{Rendimiento de la operación"
        ));
        self.line(&format!(
            r"    \textsc{{{method}}} para un vector aleatorio con gaps de largo promedio ${}$, runs de largo promedio",
            case.gap_length
        ));
        self.line(&format!(
            "    ${}$ con una probabilidad de ${}$.}}",
            case.run_length, case.probability
        ));
    }
}

/// One tab-separated data line, indented for the table block.
pub fn data_line(record: &PlotRecord) -> String {
    format!(
        "{}{}\t{}\t{}",
        " ".repeat(DATA_INDENT),
        record.label.label(),
        record.size.text(),
        record.latency
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use bvplot_core::{CaseParams, Method, SizeValue};

    fn record(index: usize, label: Representation, size: &str, latency: &str) -> PlotRecord {
        PlotRecord {
            index,
            label,
            size: SizeValue::parse(size).unwrap(),
            latency: latency.to_owned(),
        }
    }

    fn figure(segments: Vec<Segment>) -> FigureData {
        FigureData {
            method: Method::Select,
            case: CaseParams {
                index: 2,
                gap_length: "127".into(),
                run_length: "10{,}000".into(),
                probability: 0.2,
            },
            plain_size: SizeValue::parse("1.000").unwrap(),
            segments,
        }
    }

    fn one_segment() -> Vec<Segment> {
        vec![Segment {
            records: vec![
                record(0, Representation::Plain, "1.000", "21"),
                record(1, Representation::S9, "5m", "35"),
            ],
        }]
    }

    #[test]
    fn test_data_line_format() {
        let line = data_line(&record(3, Representation::Rrr, "0.25", "118"));
        assert_eq!(line, format!("{}rrr\t0.25\t118", " ".repeat(16)));
    }

    #[test]
    fn test_scatter_figure() {
        let style = FigureStyle::scatter();
        let tex = FigureWriter::new(&style).write_figure(&figure(one_segment()));

        assert!(tex.starts_with("\n\\begin{figure}[!htbp]\n    \\centering\n"));
        assert!(tex.contains("scatter,only marks,scatter src=explicit symbolic,"));
        assert!(tex.contains("                    plain={mark=square*},\n"));
        assert!(tex.contains("                    hyb={mark=triangle}\n                },"));
        assert!(tex.contains("            label style={font=\\small}\n        ]\n"));
        assert!(tex.contains("table[x expr=\\thisrow{size}/1.000,y=latency,meta=label]{\n                label   size    latency\n"));
        assert!(tex.contains("                plain\t1.000\t21\n                s9\t0.005\t35\n};\n"));
        assert!(tex.contains("                \\texttt{s18::vector},\n"));
        assert!(tex.contains("                \\texttt{hyb\\_vector}\n            }\n"));
        assert!(tex.ends_with("$10{,}000$ con una probabilidad de $0.2$.}\n\\end{figure}\n"));
        assert!(!tex.contains("clearpage"));
        assert_eq!(tex.matches("\\addplot").count(), 1);
    }

    #[test]
    fn test_caption_names_method_twice() {
        let style = FigureStyle::paged();
        let tex = FigureWriter::new(&style).write_figure(&figure(one_segment()));
        assert!(tex.contains(
            "\\caption[Rendimiento de \\textsc{Select} en un vector denso]{Rendimiento de la operación\n    \\textsc{Select} para un vector aleatorio con gaps de largo promedio $127$, runs de largo promedio\n"
        ));
    }

    #[test]
    fn test_paged_figure_breaks_page_on_one_line() {
        let style = FigureStyle::paged();
        let tex = FigureWriter::new(&style).write_figure(&figure(one_segment()));
        assert!(tex.starts_with("\n\\begin{figure}\n"));
        assert!(tex.ends_with("\\end{figure}\n\\clearpage\\newpage\n"));
    }

    #[test]
    fn test_smooth_figure_limits_and_segments() {
        let style = FigureStyle::smooth();
        let segments = vec![
            Segment {
                records: vec![record(0, Representation::Plain, "1.000", "21")],
            },
            Segment {
                records: vec![
                    record(1, Representation::S9, "0.2", "35"),
                    record(2, Representation::S9, "0.3", "36"),
                ],
            },
        ];
        let tex = FigureWriter::new(&style).write_figure(&figure(segments));

        assert!(tex.contains(
            "            label style={font=\\small},\n            xmin=0,\n            ymax=500,\n            xmax=1.4\n        ]\n"
        ));
        assert_eq!(tex.matches("scatter,smooth,black,scatter src=explicit symbolic,").count(), 2);
        assert!(tex.contains("plain={mark=square*,draw=black},"));
        assert_eq!(tex.matches("\n};\n").count(), 2);
        assert!(tex.ends_with("\\clearpage\n\\newpage\n"));
    }

    #[test]
    fn test_no_segments_still_closes_axis() {
        let style = FigureStyle::smooth();
        let tex = FigureWriter::new(&style).write_figure(&figure(Vec::new()));
        assert!(!tex.contains("\\addplot"));
        assert!(tex.contains("\\end{axis}"));
    }

    #[test]
    fn test_writer_reuse() {
        let style = FigureStyle::scatter();
        let mut writer = FigureWriter::new(&style);
        let a = writer.write_figure(&figure(one_segment()));
        let b = writer.write_figure(&figure(one_segment()));
        assert_eq!(a, b);
    }
}
