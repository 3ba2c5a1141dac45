//! Conversion options
//!
//! The engine itself only needs a profile. These options cover what the
//! surrounding application does around it: trimming the typed input and
//! wrapping LaTeX output in math delimiters for a typesetter.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::utils::error::ConversionError;

/// Environment variable naming the default profile
pub const PROFILE_ENV: &str = "MATHNOTE_PROFILE";
/// Environment variable naming the default delimiters
pub const DELIMITERS_ENV: &str = "MATHNOTE_DELIMITERS";

/// Math-mode delimiters wrapped around LaTeX output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MathDelimiters {
    /// Bare fragment
    #[default]
    None,
    /// `\( ... \)`
    Inline,
    /// `\[ ... \]`
    Display,
    /// `$ ... $`
    Dollar,
    /// `$$ ... $$`
    DoubleDollar,
}

impl MathDelimiters {
    /// Opening and closing delimiter strings
    pub fn pair(self) -> (&'static str, &'static str) {
        match self {
            MathDelimiters::None => ("", ""),
            MathDelimiters::Inline => ("\\(", "\\)"),
            MathDelimiters::Display => ("\\[", "\\]"),
            MathDelimiters::Dollar => ("$", "$"),
            MathDelimiters::DoubleDollar => ("$$", "$$"),
        }
    }

    pub fn wrap(self, body: &str) -> String {
        let (open, close) = self.pair();
        let mut out = String::with_capacity(body.len() + open.len() + close.len());
        out.push_str(open);
        out.push_str(body);
        out.push_str(close);
        out
    }
}

impl fmt::Display for MathDelimiters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MathDelimiters::None => "none",
            MathDelimiters::Inline => "inline",
            MathDelimiters::Display => "display",
            MathDelimiters::Dollar => "dollar",
            MathDelimiters::DoubleDollar => "double-dollar",
        };
        f.write_str(name)
    }
}

impl FromStr for MathDelimiters {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(MathDelimiters::None),
            "inline" => Ok(MathDelimiters::Inline),
            "display" => Ok(MathDelimiters::Display),
            "dollar" | "$" => Ok(MathDelimiters::Dollar),
            "double-dollar" | "dollars" | "$$" => Ok(MathDelimiters::DoubleDollar),
            other => Err(ConversionError::invalid(format!(
                "unknown delimiters '{}'",
                other
            ))),
        }
    }
}

/// Options for [`crate::convert_with_options`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Profile name (`latex`, `unicode`, or an alias)
    /// Default: "latex"
    pub profile: String,

    /// Trim surrounding whitespace before conversion
    /// Default: true
    pub trim: bool,

    /// Delimiters wrapped around non-empty LaTeX output.
    /// Ignored for the Unicode profile.
    /// Default: none
    pub delimiters: MathDelimiters,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            profile: "latex".to_string(),
            trim: true,
            delimiters: MathDelimiters::None,
        }
    }
}

impl ConvertOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Bare LaTeX fragment
    pub fn latex() -> Self {
        Self::default()
    }

    /// Unicode plain-text approximation
    pub fn unicode() -> Self {
        Self {
            profile: "unicode".to_string(),
            ..Self::default()
        }
    }

    /// LaTeX wrapped in `$$ ... $$`, ready for a display-math typesetter
    pub fn display() -> Self {
        Self {
            delimiters: MathDelimiters::DoubleDollar,
            ..Self::default()
        }
    }

    /// Defaults overridden by `MATHNOTE_PROFILE` and `MATHNOTE_DELIMITERS`.
    ///
    /// Profile names are validated at conversion time. Unparsable
    /// delimiters are logged and ignored.
    pub fn from_env() -> Self {
        let mut options = Self::default();
        if let Ok(profile) = std::env::var(PROFILE_ENV) {
            if !profile.trim().is_empty() {
                options.profile = profile;
            }
        }
        if let Ok(raw) = std::env::var(DELIMITERS_ENV) {
            match raw.parse() {
                Ok(delimiters) => options.delimiters = delimiters,
                Err(err) => warn!("ignoring {}: {}", DELIMITERS_ENV, err),
            }
        }
        options
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    pub fn with_delimiters(mut self, delimiters: MathDelimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}
