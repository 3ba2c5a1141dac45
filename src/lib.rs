//! mathnote - Rewrite keyboard math notation into LaTeX or Unicode text
//!
//! Informal notation such as `sum_(i=1)^(n) 1/i` or
//! `lim_x->infinity sin(x)/x` is rewritten by an ordered list of pattern
//! rules into either a LaTeX fragment for a typesetter or a Unicode
//! approximation for plain-text display.
//!
//! # Example
//!
//! ```
//! use mathnote::{to_latex, to_unicode_approx};
//!
//! assert_eq!(to_latex("(a+b)/(c-d)"), r"\frac{a+b}{c-d}");
//! assert_eq!(to_unicode_approx("alpha + beta <= gamma"), "α + β ≤ γ");
//! ```
//!
//! The engine never fails on odd input: anything no rule recognises is
//! passed through unchanged, and invalid LaTeX is left for the typesetter
//! to report.

pub mod core;
pub mod data;
pub mod options;
pub mod typesetter;
pub mod utils;

#[cfg(feature = "wasm")]
pub mod wasm;

use log::error;

pub use crate::core::profile::{
    registry, select_profile, EncodingProfile, ProfileRegistry, Target,
};
pub use crate::core::rule::Rule;
pub use crate::data::symbols::{lookup, Category, Symbol};
pub use crate::options::{ConvertOptions, MathDelimiters};
pub use crate::typesetter::TypesetterConfig;
pub use crate::utils::error::{ConversionError, ConversionResult};

/// Convert notation to a LaTeX fragment (no math delimiters).
pub fn to_latex(input: &str) -> String {
    convert_builtin(Target::Latex, input)
}

/// Convert notation to a best-effort Unicode rendering.
pub fn to_unicode_approx(input: &str) -> String {
    convert_builtin(Target::Unicode, input)
}

/// Convert notation with an explicit profile.
pub fn convert(input: &str, profile: &EncodingProfile) -> String {
    profile.convert(input)
}

/// Convert notation according to [`ConvertOptions`].
///
/// Fails only if the requested profile is not registered.
pub fn convert_with_options(input: &str, options: &ConvertOptions) -> ConversionResult<String> {
    let profile = select_profile(&options.profile)?;
    let input = if options.trim { input.trim() } else { input };
    let output = profile.convert(input);
    if output.is_empty() || profile.target() != Target::Latex {
        return Ok(output);
    }
    Ok(options.delimiters.wrap(&output))
}

/// The built-in profiles are compiled from static patterns, so this only
/// falls back to echoing the input if that compilation is broken.
fn convert_builtin(target: Target, input: &str) -> String {
    match select_profile(target.profile_name()) {
        Ok(profile) => profile.convert(input),
        Err(err) => {
            error!("{}", err);
            input.to_string()
        }
    }
}
