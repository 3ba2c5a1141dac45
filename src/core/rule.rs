//! Rewrite rules
//!
//! A rule is a compiled pattern plus a pure replacer. Applying a rule is a
//! single leftmost, non-overlapping scan over its input; unmatched text
//! passes through untouched.

use std::fmt;

use regex::{Captures, Regex};

use crate::core::profile::Target;
use crate::data::symbols::{lookup_in, Category};
use crate::utils::error::{ConversionError, ConversionResult};

/// Replacer function. Returning `None` leaves the matched text verbatim.
pub type Replacer = fn(&Captures<'_>) -> Option<String>;

/// Replacer for a parenthesized group, given the text between the
/// balanced parentheses.
pub type GroupReplacer = fn(&str) -> Option<String>;

/// Predicate on the character immediately before a match (`None` at the
/// start of input). A match whose guard fails is left verbatim.
pub type Guard = fn(Option<char>) -> bool;

/// How a rule produces its replacement text
#[derive(Clone)]
pub enum Replace {
    /// Regex expansion template (`${1}` style group references)
    Template(&'static str),
    /// Look the whole match up in the symbol table
    Symbols {
        categories: &'static [Category],
        target: Target,
    },
    /// Arbitrary pure function of the captures
    With(Replacer),
    /// The pattern ends in `(`; the match extends to the balancing `)` and
    /// the replacer sees everything in between, at any nesting depth.
    Enclosed(GroupReplacer),
}

impl fmt::Debug for Replace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replace::Template(template) => f.debug_tuple("Template").field(template).finish(),
            Replace::Symbols { categories, target } => f
                .debug_struct("Symbols")
                .field("categories", categories)
                .field("target", target)
                .finish(),
            Replace::With(_) => f.write_str("With(..)"),
            Replace::Enclosed(_) => f.write_str("Enclosed(..)"),
        }
    }
}

/// A single rewrite rule
#[derive(Debug, Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    replace: Replace,
    guard: Option<Guard>,
}

impl Rule {
    /// Compile a rule. Fails only if `pattern` is not a valid regex.
    pub fn new(name: &'static str, pattern: &str, replace: Replace) -> ConversionResult<Self> {
        let pattern =
            Regex::new(pattern).map_err(|e| ConversionError::invalid_rule(name, e.to_string()))?;
        Ok(Self {
            name,
            pattern,
            replace,
            guard: None,
        })
    }

    pub fn template(
        name: &'static str,
        pattern: &str,
        template: &'static str,
    ) -> ConversionResult<Self> {
        Self::new(name, pattern, Replace::Template(template))
    }

    pub fn with(name: &'static str, pattern: &str, replacer: Replacer) -> ConversionResult<Self> {
        Self::new(name, pattern, Replace::With(replacer))
    }

    /// A rule over `opener(...)` with balanced parentheses. `opener` must
    /// end by matching the `(`.
    pub fn enclosed(
        name: &'static str,
        opener: &str,
        replacer: GroupReplacer,
    ) -> ConversionResult<Self> {
        Self::new(name, opener, Replace::Enclosed(replacer))
    }

    pub fn symbols(
        name: &'static str,
        pattern: &str,
        categories: &'static [Category],
        target: Target,
    ) -> ConversionResult<Self> {
        Self::new(name, pattern, Replace::Symbols { categories, target })
    }

    /// Only rewrite matches whose preceding character satisfies `guard`.
    pub fn guarded(mut self, guard: Guard) -> Self {
        self.guard = Some(guard);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Apply the rule once over `input`.
    ///
    /// Returns `None` when nothing was rewritten, so callers can keep the
    /// string they already own.
    pub fn apply(&self, input: &str) -> Option<String> {
        let mut out = String::with_capacity(input.len() + 16);
        let mut last = 0;
        let mut at = 0;
        let mut changed = false;

        while let Some(caps) = self.pattern.captures_at(input, at) {
            let Some(whole) = caps.get(0) else {
                break;
            };
            let start = whole.start();
            let accepted = self
                .guard
                .map_or(true, |guard| guard(input[..start].chars().next_back()));
            let rewritten = if accepted {
                self.rewrite(input, &caps)
            } else {
                None
            };

            let end = match rewritten {
                Some((replacement, end)) => {
                    out.push_str(&input[last..start]);
                    out.push_str(&replacement);
                    if needs_separator(&replacement, input[end..].chars().next()) {
                        out.push(' ');
                    }
                    last = end;
                    changed = true;
                    end
                }
                None => whole.end(),
            };

            at = if end > start {
                end
            } else {
                // Empty match: step over one character
                match input[start..].chars().next() {
                    Some(c) => start + c.len_utf8(),
                    None => break,
                }
            };
        }

        if !changed {
            return None;
        }
        out.push_str(&input[last..]);
        Some(out)
    }

    /// Replacement text and the byte offset where the consumed text ends
    fn rewrite(&self, input: &str, caps: &Captures<'_>) -> Option<(String, usize)> {
        let whole = caps.get(0)?;
        match &self.replace {
            Replace::Template(template) => {
                let mut dst = String::new();
                caps.expand(template, &mut dst);
                Some((dst, whole.end()))
            }
            Replace::Symbols { categories, target } => {
                lookup_in(whole.as_str(), categories, *target).map(|s| (s.to_string(), whole.end()))
            }
            Replace::With(replacer) => replacer(caps).map(|s| (s, whole.end())),
            Replace::Enclosed(replacer) => {
                let close = closing_paren(input, whole.end())?;
                let replacement = replacer(&input[whole.end()..close])?;
                Some((replacement, close + 1))
            }
        }
    }
}

/// Byte offset of the `)` that balances an already consumed `(`, scanning
/// from `from`.
fn closing_paren(input: &str, from: usize) -> Option<usize> {
    let mut depth = 1usize;
    for (offset, c) in input[from..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(from + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// A replacement ending in a control word (`\cdot`) would absorb a
/// following letter, so the two need a space between them.
fn needs_separator(replacement: &str, next: Option<char>) -> bool {
    if !next.is_some_and(|c| c.is_ascii_alphabetic()) {
        return false;
    }
    match replacement.rfind('\\') {
        Some(pos) => {
            let word = &replacement[pos + 1..];
            !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

// =============================================================================
// Guards
// =============================================================================

/// The match is not the tail of a control sequence (`\alpha`).
pub fn unescaped(prev: Option<char>) -> bool {
    prev != Some('\\')
}

/// The match starts a new word: not glued to a letter, digit or backslash.
pub fn word_start(prev: Option<char>) -> bool {
    !prev.is_some_and(|c| c.is_ascii_alphanumeric() || c == '\\')
}

/// The match follows something that can carry a script: an alphanumeric
/// character, a closing bracket, or a non-ASCII glyph such as `∫`.
pub fn after_operand(prev: Option<char>) -> bool {
    prev.is_some_and(|c| {
        c.is_alphanumeric() || matches!(c, ')' | ']' | '}') || (!c.is_ascii() && !c.is_whitespace())
    })
}
