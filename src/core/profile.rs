//! Encoding profiles and the profile registry
//!
//! A profile is an immutable, ordered rule list targeting one output
//! encoding. The built-in profiles live in a process-wide registry that is
//! compiled once on first use and only ever read afterwards.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use log::{debug, trace, warn};

use crate::core::rule::Rule;
use crate::core::stages::{latex_rules, unicode_rules};
use crate::utils::error::{ConversionError, ConversionResult};

/// Output encoding of a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Target {
    /// LaTeX math fragment (no delimiters)
    #[default]
    Latex,
    /// Plain text with Unicode math glyphs
    Unicode,
}

impl Target {
    /// Registry name of the built-in profile for this target
    pub fn profile_name(self) -> &'static str {
        match self {
            Target::Latex => "latex",
            Target::Unicode => "unicode",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile_name())
    }
}

impl FromStr for Target {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match canonical_name(s).as_str() {
            "latex" => Ok(Target::Latex),
            "unicode" => Ok(Target::Unicode),
            _ => Err(ConversionError::unknown_profile(s, ["latex", "unicode"])),
        }
    }
}

/// Normalise a user-supplied profile name: trim, lowercase, resolve aliases.
fn canonical_name(name: &str) -> String {
    let name = name.trim().to_ascii_lowercase();
    match name.as_str() {
        "tex" => "latex".to_string(),
        "text" | "plain" | "utf8" | "utf-8" => "unicode".to_string(),
        _ => name,
    }
}

/// A named, ordered rule list for one output encoding
#[derive(Debug, Clone)]
pub struct EncodingProfile {
    name: &'static str,
    target: Target,
    rules: Vec<Rule>,
}

impl EncodingProfile {
    pub fn new(name: &'static str, target: Target, rules: Vec<Rule>) -> Self {
        Self {
            name,
            target,
            rules,
        }
    }

    /// The built-in LaTeX profile
    pub fn latex() -> ConversionResult<Self> {
        Ok(Self::new("latex", Target::Latex, latex_rules()?))
    }

    /// The built-in Unicode approximation profile
    pub fn unicode() -> ConversionResult<Self> {
        Ok(Self::new("unicode", Target::Unicode, unicode_rules()?))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Rule names in application order
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    /// Rewrite `input` by folding it through every rule in order.
    ///
    /// The fold is repeated until a pass leaves the text unchanged, so a
    /// construct nested inside another of its kind (`sqrt(sqrt(x))`,
    /// `1/(2/3)`) is resolved from the outside in and the output is a
    /// fixed point of the profile. Passes are bounded by the input length.
    ///
    /// Never fails: text no rule recognises is carried through verbatim.
    pub fn convert(&self, input: &str) -> String {
        if input.is_empty() {
            return String::new();
        }
        let mut text = input.to_string();
        let max_passes = input.chars().count() + 1;
        for pass in 1..=max_passes {
            match self.pass(&text) {
                Some(rewritten) => text = rewritten,
                None => {
                    debug!("[{}] {:?} -> {:?} ({} passes)", self.name, input, text, pass);
                    return text;
                }
            }
        }
        warn!("[{}] no fixed point after {} passes: {:?}", self.name, max_passes, input);
        text
    }

    /// One fold over the rule list. `None` when the text came out unchanged.
    fn pass(&self, input: &str) -> Option<String> {
        let output = self
            .rules
            .iter()
            .fold(input.to_string(), |text, rule| match rule.apply(&text) {
                Some(rewritten) if rewritten != text => {
                    trace!("[{}] {}: {:?} -> {:?}", self.name, rule.name(), text, rewritten);
                    rewritten
                }
                _ => text,
            });
        (output != input).then_some(output)
    }
}

/// Ordered set of named profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: IndexMap<String, EncodingProfile>,
}

impl ProfileRegistry {
    /// An empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the `latex` and `unicode` profiles
    pub fn with_builtin() -> ConversionResult<Self> {
        let mut registry = Self::new();
        registry.register(EncodingProfile::latex()?);
        registry.register(EncodingProfile::unicode()?);
        Ok(registry)
    }

    /// Add a profile, returning any profile previously registered under
    /// the same name.
    pub fn register(&mut self, profile: EncodingProfile) -> Option<EncodingProfile> {
        self.profiles.insert(canonical_name(profile.name()), profile)
    }

    /// Look a profile up by name (case-insensitive, `tex` and `text`
    /// aliases accepted).
    pub fn get(&self, name: &str) -> ConversionResult<&EncodingProfile> {
        self.profiles
            .get(canonical_name(name).as_str())
            .ok_or_else(|| ConversionError::unknown_profile(name, self.names()))
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.profiles.values().map(EncodingProfile::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EncodingProfile> {
        self.profiles.values()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

lazy_static! {
    static ref REGISTRY: ConversionResult<ProfileRegistry> = ProfileRegistry::with_builtin();
}

/// The process-wide registry of built-in profiles
pub fn registry() -> ConversionResult<&'static ProfileRegistry> {
    REGISTRY.as_ref().map_err(ConversionError::clone)
}

/// Select a built-in profile by name.
///
/// An unknown name is a configuration error, not a user input error.
pub fn select_profile(name: &str) -> ConversionResult<&'static EncodingProfile> {
    registry()?.get(name)
}
