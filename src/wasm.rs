//! WASM bindings for mathnote
//!
//! This module provides JavaScript-accessible functions for notation
//! conversion, meant to sit behind a browser input field.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::options::ConvertOptions;
use crate::typesetter::TypesetterConfig;

/// Conversion result with additional metadata
#[derive(Serialize, Deserialize)]
pub struct ConvertResult {
    /// The converted output
    pub output: String,
    /// Whether the conversion was successful
    pub success: bool,
    /// Error message if conversion failed
    pub error: Option<String>,
}

impl ConvertResult {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            output: String::new(),
            success: false,
            error: Some(message),
        }
    }
}

/// Safely serialize a value to JsValue, returning an error object on failure.
///
/// This prevents panics from `unwrap()` when serialization fails.
fn to_js_value<T: Serialize>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or_else(|e| {
        let error_obj = ConvertResult::err(format!("Serialization error: {}", e));
        serde_wasm_bindgen::to_value(&error_obj).unwrap_or(JsValue::NULL)
    })
}

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Convert notation to a LaTeX fragment (without $ delimiters)
#[wasm_bindgen(js_name = toLatex)]
pub fn to_latex(input: &str) -> String {
    crate::to_latex(input)
}

/// Convert notation to a Unicode approximation
#[wasm_bindgen(js_name = toUnicodeApprox)]
pub fn to_unicode_approx(input: &str) -> String {
    crate::to_unicode_approx(input)
}

/// Convert notation with options
///
/// # Arguments
/// * `input` - Notation typed by the user
/// * `options` - `{ profile, trim, delimiters }`, all optional
///
/// # Returns
/// `{ output, success, error }`
#[wasm_bindgen(js_name = convert)]
pub fn convert(input: &str, options: JsValue) -> JsValue {
    let options: ConvertOptions = if options.is_undefined() || options.is_null() {
        ConvertOptions::default()
    } else {
        match serde_wasm_bindgen::from_value(options) {
            Ok(options) => options,
            Err(e) => return to_js_value(&ConvertResult::err(format!("Invalid options: {}", e))),
        }
    };

    let result = match crate::convert_with_options(input, &options) {
        Ok(output) => ConvertResult::ok(output),
        Err(e) => ConvertResult::err(e.to_string()),
    };
    to_js_value(&result)
}

/// Typesetter configuration object to assign to `window.MathJax`
#[wasm_bindgen(js_name = typesetterConfig)]
pub fn typesetter_config() -> JsValue {
    to_js_value(&TypesetterConfig::default())
}

/// Names of the registered profiles
#[wasm_bindgen(js_name = listProfiles)]
pub fn list_profiles() -> JsValue {
    match crate::registry() {
        Ok(registry) => to_js_value(&registry.names()),
        Err(e) => to_js_value(&ConvertResult::err(e.to_string())),
    }
}
