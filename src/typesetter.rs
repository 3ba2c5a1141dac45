//! Typesetter configuration
//!
//! The LaTeX output is handed to an external MathJax-style typesetter.
//! This module produces the configuration object that typesetter expects,
//! including macros so that hand-typed `\infinity` or `\integral` still
//! typeset.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data::symbols::{Category, SYMBOLS};
use crate::utils::error::ConversionResult;

/// Top-level typesetter configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypesetterConfig {
    pub tex: TexConfig,
    pub svg: SvgConfig,
}

/// TeX input settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TexConfig {
    pub inline_math: Vec<[String; 2]>,
    pub display_math: Vec<[String; 2]>,
    pub process_escapes: bool,
    pub process_environments: bool,
    pub macros: BTreeMap<String, String>,
}

/// SVG output settings
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgConfig {
    /// `none` keeps glyph definitions inside each rendered expression,
    /// which standalone export relies on
    pub font_cache: String,
    pub scale: f64,
}

fn pair(open: &str, close: &str) -> [String; 2] {
    [open.to_string(), close.to_string()]
}

impl Default for TypesetterConfig {
    fn default() -> Self {
        Self {
            tex: TexConfig {
                inline_math: vec![pair("$", "$"), pair("\\(", "\\)")],
                display_math: vec![pair("$$", "$$"), pair("\\[", "\\]")],
                process_escapes: true,
                process_environments: true,
                macros: constant_macros(),
            },
            svg: SvgConfig {
                font_cache: "none".to_string(),
                scale: 1.2,
            },
        }
    }
}

impl TypesetterConfig {
    pub fn to_json(&self) -> ConversionResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> ConversionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Macro definitions for constants whose name differs from their LaTeX
/// control word. `sum → \sum` would define `\sum` in terms of itself.
fn constant_macros() -> BTreeMap<String, String> {
    SYMBOLS
        .entries()
        .filter(|&(_, symbol)| symbol.category == Category::Constant)
        .filter(|&(&name, symbol)| symbol.latex.strip_prefix('\\') != Some(name))
        .map(|(name, symbol)| (name.to_string(), symbol.latex.to_string()))
        .collect()
}
