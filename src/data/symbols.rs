//! Symbol table
//!
//! Canonical token names mapped to their LaTeX and Unicode renderings.
//! Keys are case-sensitive. Relation and operator keys are the ASCII
//! spellings users type (`<=`, `+/-`), so the matchers for those stages
//! are generated from this table.

use phf::phf_map;

use crate::core::profile::Target;

/// Which pipeline stage a symbol participates in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Greek letters
    Letter,
    /// Named constants and bounded operators (`infinity`, `sum`)
    Constant,
    /// Function names typeset upright (`sin`, `log`)
    Function,
    /// Arrows and comparison operators
    Relation,
    /// Multiplication and plus/minus shorthand
    Operator,
}

/// A single symbol table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub category: Category,
    pub latex: &'static str,
    pub unicode: &'static str,
}

impl Symbol {
    const fn new(category: Category, latex: &'static str, unicode: &'static str) -> Self {
        Self {
            category,
            latex,
            unicode,
        }
    }

    /// Rendering of this symbol for the given target
    pub fn render(&self, target: Target) -> &'static str {
        match target {
            Target::Latex => self.latex,
            Target::Unicode => self.unicode,
        }
    }
}

/// Letters, constants, functions, relations and operators
pub static SYMBOLS: phf::Map<&'static str, Symbol> = phf_map! {
    // Greek lowercase
    "alpha" => Symbol::new(Category::Letter, "\\alpha", "α"),
    "beta" => Symbol::new(Category::Letter, "\\beta", "β"),
    "gamma" => Symbol::new(Category::Letter, "\\gamma", "γ"),
    "delta" => Symbol::new(Category::Letter, "\\delta", "δ"),
    "epsilon" => Symbol::new(Category::Letter, "\\epsilon", "ε"),
    "zeta" => Symbol::new(Category::Letter, "\\zeta", "ζ"),
    "eta" => Symbol::new(Category::Letter, "\\eta", "η"),
    "theta" => Symbol::new(Category::Letter, "\\theta", "θ"),
    "iota" => Symbol::new(Category::Letter, "\\iota", "ι"),
    "kappa" => Symbol::new(Category::Letter, "\\kappa", "κ"),
    "lambda" => Symbol::new(Category::Letter, "\\lambda", "λ"),
    "mu" => Symbol::new(Category::Letter, "\\mu", "μ"),
    "nu" => Symbol::new(Category::Letter, "\\nu", "ν"),
    "xi" => Symbol::new(Category::Letter, "\\xi", "ξ"),
    // LaTeX has no \omicron; the glyph is a plain o
    "omicron" => Symbol::new(Category::Letter, "o", "ο"),
    "pi" => Symbol::new(Category::Letter, "\\pi", "π"),
    "rho" => Symbol::new(Category::Letter, "\\rho", "ρ"),
    "sigma" => Symbol::new(Category::Letter, "\\sigma", "σ"),
    "tau" => Symbol::new(Category::Letter, "\\tau", "τ"),
    "upsilon" => Symbol::new(Category::Letter, "\\upsilon", "υ"),
    "phi" => Symbol::new(Category::Letter, "\\phi", "φ"),
    "chi" => Symbol::new(Category::Letter, "\\chi", "χ"),
    "psi" => Symbol::new(Category::Letter, "\\psi", "ψ"),
    "omega" => Symbol::new(Category::Letter, "\\omega", "ω"),
    // Greek uppercase with distinct glyphs
    "Gamma" => Symbol::new(Category::Letter, "\\Gamma", "Γ"),
    "Delta" => Symbol::new(Category::Letter, "\\Delta", "Δ"),
    "Theta" => Symbol::new(Category::Letter, "\\Theta", "Θ"),
    "Lambda" => Symbol::new(Category::Letter, "\\Lambda", "Λ"),
    "Xi" => Symbol::new(Category::Letter, "\\Xi", "Ξ"),
    "Pi" => Symbol::new(Category::Letter, "\\Pi", "Π"),
    "Sigma" => Symbol::new(Category::Letter, "\\Sigma", "Σ"),
    "Upsilon" => Symbol::new(Category::Letter, "\\Upsilon", "Υ"),
    "Phi" => Symbol::new(Category::Letter, "\\Phi", "Φ"),
    "Psi" => Symbol::new(Category::Letter, "\\Psi", "Ψ"),
    "Omega" => Symbol::new(Category::Letter, "\\Omega", "Ω"),

    // Constants and bounded operators
    "infinity" => Symbol::new(Category::Constant, "\\infty", "∞"),
    "integral" => Symbol::new(Category::Constant, "\\int", "∫"),
    "sum" => Symbol::new(Category::Constant, "\\sum", "∑"),
    "prod" => Symbol::new(Category::Constant, "\\prod", "∏"),
    "lim" => Symbol::new(Category::Constant, "\\lim", "lim"),
    "partial" => Symbol::new(Category::Constant, "\\partial", "∂"),
    "nabla" => Symbol::new(Category::Constant, "\\nabla", "∇"),

    // Functions
    "sin" => Symbol::new(Category::Function, "\\sin", "sin"),
    "cos" => Symbol::new(Category::Function, "\\cos", "cos"),
    "tan" => Symbol::new(Category::Function, "\\tan", "tan"),
    "sec" => Symbol::new(Category::Function, "\\sec", "sec"),
    "csc" => Symbol::new(Category::Function, "\\csc", "csc"),
    "cot" => Symbol::new(Category::Function, "\\cot", "cot"),
    "arcsin" => Symbol::new(Category::Function, "\\arcsin", "arcsin"),
    "arccos" => Symbol::new(Category::Function, "\\arccos", "arccos"),
    "arctan" => Symbol::new(Category::Function, "\\arctan", "arctan"),
    "sinh" => Symbol::new(Category::Function, "\\sinh", "sinh"),
    "cosh" => Symbol::new(Category::Function, "\\cosh", "cosh"),
    "tanh" => Symbol::new(Category::Function, "\\tanh", "tanh"),
    "log" => Symbol::new(Category::Function, "\\log", "log"),
    "ln" => Symbol::new(Category::Function, "\\ln", "ln"),
    "exp" => Symbol::new(Category::Function, "\\exp", "exp"),

    // Relations
    "<=>" => Symbol::new(Category::Relation, "\\Leftrightarrow", "⇔"),
    "<->" => Symbol::new(Category::Relation, "\\leftrightarrow", "↔"),
    "->" => Symbol::new(Category::Relation, "\\to", "→"),
    "=>" => Symbol::new(Category::Relation, "\\Rightarrow", "⇒"),
    "<=" => Symbol::new(Category::Relation, "\\leq", "≤"),
    ">=" => Symbol::new(Category::Relation, "\\geq", "≥"),
    "!=" => Symbol::new(Category::Relation, "\\neq", "≠"),
    "~=" => Symbol::new(Category::Relation, "\\approx", "≈"),

    // Operators
    "+/-" => Symbol::new(Category::Operator, "\\pm", "±"),
    "-+" => Symbol::new(Category::Operator, "\\mp", "∓"),
    "*" => Symbol::new(Category::Operator, "\\cdot", "·"),
};

/// Look up the rendering of a canonical token for a target.
///
/// Returns `None` when the token is not in the table, which callers treat
/// as "leave the text alone".
pub fn lookup(name: &str, target: Target) -> Option<&'static str> {
    SYMBOLS.get(name).map(|symbol| symbol.render(target))
}

/// Like [`lookup`], restricted to the given categories.
pub fn lookup_in(name: &str, categories: &[Category], target: Target) -> Option<&'static str> {
    SYMBOLS
        .get(name)
        .filter(|symbol| categories.contains(&symbol.category))
        .map(|symbol| symbol.render(target))
}

/// All keys of one category, longest first, ties broken alphabetically.
///
/// Longest-first ordering lets an alternation built from these keys claim
/// `<->` before `->` and `<=>` before `<=`.
pub fn keys_in(category: Category) -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = SYMBOLS
        .entries()
        .filter(|(_, symbol)| symbol.category == category)
        .map(|(key, _)| *key)
        .collect();
    keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    keys
}

/// Build a regex alternation matching every key of a category.
pub fn alternation(category: Category) -> String {
    keys_in(category)
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}
