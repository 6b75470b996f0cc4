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

//! Render command - variant selection and document output

use super::{read_file, write_output};
use crate::error::CliError;
use bvplot::{render_variant, LayoutKind, RenderOptions, Variant};
use serde::Deserialize;
use tracing::debug;

/// Variant used when neither `--variant` nor `--config` is given.
pub const DEFAULT_VARIANT: &str = "scatter";

/// A `--config` file holds one variant or the list `variants --json` prints.
#[derive(Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    One(Box<Variant>),
    Many(Vec<Variant>),
}

/// Pick the variant to render.
///
/// Without `config`, `name` selects a built-in variant. With `config`, a
/// file holding a single variant is used as is; from a list, `name` picks
/// by name and may be omitted only when the list has one entry. A `layout`
/// overrides the variant's section layout.
///
/// # Errors
///
/// Returns `Err` for an unknown name, an unreadable or malformed config,
/// or an unknown layout.
pub fn select_variant(
    name: Option<&str>,
    config: Option<&str>,
    layout: Option<&str>,
) -> Result<Variant, CliError> {
    let mut variant = match config {
        None => Variant::builtin(name.unwrap_or(DEFAULT_VARIANT))?,
        Some(path) => from_config(path, name)?,
    };
    if let Some(layout) = layout {
        variant.layout = layout.parse::<LayoutKind>()?.layout();
    }
    Ok(variant)
}

fn from_config(path: &str, name: Option<&str>) -> Result<Variant, CliError> {
    let content = read_file(path)?;
    let parsed: ConfigFile =
        serde_json::from_str(&content).map_err(|e| CliError::config(path, e.to_string()))?;

    let variant = match (parsed, name) {
        (ConfigFile::One(variant), None) => *variant,
        (ConfigFile::One(variant), Some(name)) if variant.name == name => *variant,
        (ConfigFile::One(variant), Some(name)) => {
            return Err(CliError::config(
                path,
                format!("file defines variant '{}', not '{}'", variant.name, name),
            ))
        }
        (ConfigFile::Many(mut list), None) if list.len() == 1 => list.remove(0),
        (ConfigFile::Many(list), None) => {
            return Err(CliError::config(
                path,
                format!("file defines {} variants; choose one with --variant", list.len()),
            ))
        }
        (ConfigFile::Many(list), Some(name)) => list
            .into_iter()
            .find(|v| v.name == name)
            .ok_or_else(|| CliError::config(path, format!("no variant named '{}'", name)))?,
    };
    variant.validate()?;
    debug!(variant = %variant.name, config = path, "loaded variant");
    Ok(variant)
}

/// Render `variant` and write the document.
///
/// # Errors
///
/// Returns `Err` if any case fails to load or resolve, or the output
/// cannot be written. Nothing is written on failure.
pub fn render(variant: &Variant, options: RenderOptions, output: Option<&str>) -> Result<(), CliError> {
    let tex = render_variant(variant, options)?;
    write_output(&tex, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bvplot::Layout;

    #[test]
    fn test_default_is_scatter() {
        let variant = select_variant(None, None, None).unwrap();
        assert_eq!(variant, Variant::scatter());
    }

    #[test]
    fn test_layout_override() {
        let variant = select_variant(Some("smooth"), None, Some("offsets")).unwrap();
        assert!(matches!(variant.layout, Layout::Offsets(_)));
        assert!(select_variant(None, None, Some("columns")).is_err());
    }

    #[test]
    fn test_unknown_builtin() {
        let err = select_variant(Some("dense"), None, None).unwrap_err();
        assert!(matches!(err, CliError::Plot(_)));
    }

    #[test]
    fn test_config_list_needs_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variants.json");
        std::fs::write(&path, serde_json::to_string(&Variant::builtins()).unwrap()).unwrap();
        let path = path.to_str().unwrap();

        let err = select_variant(None, Some(path), None).unwrap_err();
        assert!(err.to_string().contains("choose one with --variant"));

        let paged = select_variant(Some("paged"), Some(path), None).unwrap();
        assert_eq!(paged, Variant::paged());

        let err = select_variant(Some("dense"), Some(path), None).unwrap_err();
        assert!(err.to_string().contains("no variant named 'dense'"));
    }

    #[test]
    fn test_config_single_variant() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smooth.json");
        let mut custom = Variant::smooth();
        custom.name = "smooth-wide".to_owned();
        custom.input_prefix = "w".to_owned();
        std::fs::write(&path, serde_json::to_string_pretty(&custom).unwrap()).unwrap();

        let loaded = select_variant(None, Some(path.to_str().unwrap()), None).unwrap();
        assert_eq!(loaded, custom);
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"name\": \"x\"").unwrap();
        let err = select_variant(None, Some(path.to_str().unwrap()), None).unwrap_err();
        assert!(matches!(err, CliError::Config { .. }));
    }
}
