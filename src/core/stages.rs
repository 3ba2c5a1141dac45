//! Pipeline stages
//!
//! Rule lists for the built-in profiles. Order matters:
//!
//! 1. symbols (letters, constants)
//! 2. function names
//! 3. radicals
//! 4. fractions: parenthesized before bare
//! 5. scripts: delimited bounds before single characters
//! 6. bounded operators: limit arrows before generic arrows
//! 7. relations
//! 8. operators
//!
//! The Unicode profile keeps the same shape but drops the function,
//! fraction and bounded-operator stages.

use regex::Captures;

use crate::core::profile::Target;
use crate::core::rule::{after_operand, unescaped, word_start, Rule};
use crate::core::scripts;
use crate::data::symbols::{alternation, Category};
use crate::utils::error::ConversionResult;

const LETTERS_AND_CONSTANTS: &[Category] = &[Category::Letter, Category::Constant];
const FUNCTIONS: &[Category] = &[Category::Function];
const RELATIONS: &[Category] = &[Category::Relation];
const OPERATORS: &[Category] = &[Category::Operator];

/// Maximal ASCII alphanumeric runs, so `2pi` and `pi2` are not symbols
const WORD: &str = "[A-Za-z0-9]+";

/// Opener of `sqrt(...)`; the argument runs to the balancing `)`
const RADICAL: &str = r"sqrt\(";

/// `(A)/(B)`
const PAREN_FRACTION: &str = r"\(([^()]+)\)\s*/\s*\(([^()]+)\)";

/// `A/B` where each side is `(...)` or a word with an optional call or
/// group suffix (`\sin(x)`, `\sqrt{x}`)
const BARE_FRACTION: &str = concat!(
    r"(?:\(([^()]+)\)|(\\?[\w.]+(?:\([^()]*\)|\{[^{}]*\})?))",
    r"\s*/\s*",
    r"(?:\(([^()]+)\)|(\\?[\w.]+(?:\([^()]*\)|\{[^{}]*\})?))",
);

/// `_(...)`, `^(...)`, `_{...}`, `^{...}`
const DELIMITED_SCRIPT: &str = r"([_^])\s*(?:\(([^()]+)\)|\{([^{}]+)\})";

const SINGLE_SUBSCRIPT: &str = r"_([A-Za-z0-9])";
const SINGLE_SCRIPT: &str = r"([_^])([A-Za-z0-9])";

/// `\lim_{x}->target` or `\lim_x->target`
const LIMIT_ARROW: &str =
    r"\\lim_(?:\{\s*([A-Za-z0-9]+)\s*\}|([A-Za-z0-9]+))\s*->\s*(\\?[A-Za-z0-9]+)";

/// Bounded operator with a braced lower bound and optional upper bound
const BOUNDED_OPERATOR: &str =
    r"\\(sum|int|prod|lim)\s*_\{([^{}]*)\}(?:\s*\^(?:\{([^{}]*)\}|([A-Za-z0-9])))?";

/// Rules of the LaTeX profile, in application order
pub fn latex_rules() -> ConversionResult<Vec<Rule>> {
    let target = Target::Latex;
    Ok(vec![
        Rule::symbols("symbols", WORD, LETTERS_AND_CONSTANTS, target)?.guarded(unescaped),
        Rule::symbols("functions", WORD, FUNCTIONS, target)?.guarded(unescaped),
        Rule::enclosed("radicals", RADICAL, latex_radical)?.guarded(word_start),
        Rule::template("paren-fractions", PAREN_FRACTION, r"\frac{${1}}{${2}}")?
            .guarded(word_start),
        Rule::with("bare-fractions", BARE_FRACTION, bare_fraction)?,
        Rule::with("delimited-scripts", DELIMITED_SCRIPT, braced_script)?,
        Rule::template("single-subscripts", SINGLE_SUBSCRIPT, "_{${1}}")?.guarded(after_operand),
        Rule::with("limit-arrows", LIMIT_ARROW, limit_arrow)?,
        Rule::with("bounded-operators", BOUNDED_OPERATOR, bounded_operator)?,
        Rule::symbols("relations", &alternation(Category::Relation), RELATIONS, target)?,
        Rule::symbols("operators", &alternation(Category::Operator), OPERATORS, target)?,
    ])
}

/// Rules of the Unicode profile, in application order
pub fn unicode_rules() -> ConversionResult<Vec<Rule>> {
    let target = Target::Unicode;
    Ok(vec![
        Rule::symbols("symbols", WORD, LETTERS_AND_CONSTANTS, target)?.guarded(unescaped),
        Rule::enclosed("radicals", RADICAL, unicode_radical)?.guarded(word_start),
        Rule::with("delimited-scripts", DELIMITED_SCRIPT, scripts::raise_delimited)?,
        Rule::with("single-scripts", SINGLE_SCRIPT, scripts::raise_single)?
            .guarded(after_operand),
        Rule::symbols("relations", &alternation(Category::Relation), RELATIONS, target)?,
        Rule::symbols("operators", &alternation(Category::Operator), OPERATORS, target)?,
    ])
}

// =============================================================================
// Replacers
// =============================================================================

fn latex_radical(argument: &str) -> Option<String> {
    if argument.trim().is_empty() {
        return None;
    }
    Some(format!("\\sqrt{{{}}}", argument))
}

fn unicode_radical(argument: &str) -> Option<String> {
    if argument.trim().is_empty() {
        return None;
    }
    Some(format!("√({})", argument))
}

fn bare_fraction(caps: &Captures<'_>) -> Option<String> {
    let numerator = caps.get(1).or_else(|| caps.get(2))?.as_str();
    let denominator = caps.get(3).or_else(|| caps.get(4))?.as_str();
    Some(format!("\\frac{{{}}}{{{}}}", numerator, denominator))
}

fn braced_script(caps: &Captures<'_>) -> Option<String> {
    let marker = caps.get(1)?.as_str();
    let inner = caps.get(2).or_else(|| caps.get(3))?.as_str().trim();
    Some(format!("{}{{{}}}", marker, inner))
}

fn limit_arrow(caps: &Captures<'_>) -> Option<String> {
    let variable = caps.get(1).or_else(|| caps.get(2))?.as_str();
    let target = caps.get(3)?.as_str();
    Some(format!("\\lim_{{{} \\to {}}}", variable, target))
}

fn bounded_operator(caps: &Captures<'_>) -> Option<String> {
    let operator = caps.get(1)?.as_str();
    let lower = caps.get(2)?.as_str().trim();
    let mut fused = format!("\\{}_{{{}}}", operator, lower);
    if let Some(upper) = caps.get(3).or_else(|| caps.get(4)) {
        fused.push_str(&format!("^{{{}}}", upper.as_str().trim()));
    }
    Some(fused)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rule(rules: &[Rule], name: &str) -> Rule {
        rules
            .iter()
            .find(|r| r.name() == name)
            .cloned()
            .unwrap_or_else(|| panic!("no rule named {}", name))
    }

    fn apply(rule: &Rule, input: &str) -> String {
        rule.apply(input).unwrap_or_else(|| input.to_string())
    }

    #[test]
    fn test_latex_stage_order() {
        let names: Vec<_> = latex_rules().unwrap().iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec![
                "symbols",
                "functions",
                "radicals",
                "paren-fractions",
                "bare-fractions",
                "delimited-scripts",
                "single-subscripts",
                "limit-arrows",
                "bounded-operators",
                "relations",
                "operators",
            ]
        );
    }

    #[test]
    fn test_unicode_stage_order() {
        let names: Vec<_> = unicode_rules().unwrap().iter().map(Rule::name).collect();
        assert_eq!(
            names,
            vec![
                "symbols",
                "radicals",
                "delimited-scripts",
                "single-scripts",
                "relations",
                "operators",
            ]
        );
    }

    #[test]
    fn test_symbols_leave_longer_words_alone() {
        let rules = latex_rules().unwrap();
        let symbols = rule(&rules, "symbols");
        assert_eq!(apply(&symbols, "alphabet"), "alphabet");
        assert_eq!(apply(&symbols, "2pi r"), "2pi r");
        assert_eq!(apply(&symbols, "pi2 + pi"), r"pi2 + \pi");
        assert_eq!(apply(&symbols, "x_alpha"), r"x_\alpha");
    }

    #[test]
    fn test_functions_are_separate_from_letters() {
        let rules = latex_rules().unwrap();
        assert_eq!(apply(&rule(&rules, "symbols"), "sin(x)"), "sin(x)");
        assert_eq!(apply(&rule(&rules, "functions"), "sin(x)"), r"\sin(x)");
        assert_eq!(apply(&rule(&rules, "functions"), "sinx"), "sinx");
    }

    #[test]
    fn test_radical_with_nested_call() {
        let rules = latex_rules().unwrap();
        let radicals = rule(&rules, "radicals");
        assert_eq!(apply(&radicals, r"sqrt(\sin(x))"), r"\sqrt{\sin(x)}");
        assert_eq!(apply(&radicals, "xsqrt(2)"), "xsqrt(2)");
        assert_eq!(
            apply(&radicals, r"sqrt(\sin(\cos(x)))"),
            r"\sqrt{\sin(\cos(x))}"
        );
        assert_eq!(apply(&radicals, "sqrt(x"), "sqrt(x");
        assert_eq!(apply(&radicals, "sqrt( )"), "sqrt( )");
    }

    #[test]
    fn test_unicode_radical_keeps_parentheses() {
        let rules = unicode_rules().unwrap();
        let radicals = rule(&rules, "radicals");
        assert_eq!(apply(&radicals, "sqrt(sin(cos(x)))"), "√(sin(cos(x)))");
    }

    #[test]
    fn test_paren_fraction_skips_function_calls() {
        let rules = latex_rules().unwrap();
        let paren = rule(&rules, "paren-fractions");
        assert_eq!(apply(&paren, "(a+b)/(c-d)"), r"\frac{a+b}{c-d}");
        assert_eq!(apply(&paren, r"\sin(x)/(x+1)"), r"\sin(x)/(x+1)");
    }

    #[test]
    fn test_bare_fraction_operands() {
        let rules = latex_rules().unwrap();
        let bare = rule(&rules, "bare-fractions");
        assert_eq!(apply(&bare, "1/2"), r"\frac{1}{2}");
        assert_eq!(apply(&bare, r"\sqrt{x}/2"), r"\frac{\sqrt{x}}{2}");
        assert_eq!(apply(&bare, r"\sin(x)/x"), r"\frac{\sin(x)}{x}");
        assert_eq!(apply(&bare, r"\sin(x)/(x+1)"), r"\frac{\sin(x)}{x+1}");
        assert_eq!(apply(&bare, "(a+b)/c"), r"\frac{a+b}{c}");
        assert_eq!(apply(&bare, "1.5 / n"), r"\frac{1.5}{n}");
    }

    #[test]
    fn test_delimited_scripts() {
        let rules = latex_rules().unwrap();
        let scripts = rule(&rules, "delimited-scripts");
        assert_eq!(apply(&scripts, r"\sum_(i=1)^(n)"), r"\sum_{i=1}^{n}");
        assert_eq!(apply(&scripts, "x_{ ij }"), "x_{ij}");
        assert_eq!(apply(&scripts, "x^{2}"), "x^{2}");
    }

    #[test]
    fn test_single_subscripts() {
        let rules = latex_rules().unwrap();
        let single = rule(&rules, "single-subscripts");
        assert_eq!(apply(&single, "a_1"), "a_{1}");
        assert_eq!(apply(&single, "a_b_c"), "a_{b}_{c}");
        assert_eq!(apply(&single, "x^2"), "x^2");
        assert_eq!(apply(&single, "_1"), "_1");
    }

    #[test]
    fn test_limit_arrow_fusion() {
        let rules = latex_rules().unwrap();
        let limits = rule(&rules, "limit-arrows");
        assert_eq!(apply(&limits, r"\lim_{x}->\infty"), r"\lim_{x \to \infty}");
        assert_eq!(apply(&limits, r"\lim_n -> 0"), r"\lim_{n \to 0}");
        // Compound bounds are a known gap and stay unfused
        assert_eq!(apply(&limits, r"\lim_{x->0^+}"), r"\lim_{x->0^+}");
    }

    #[test]
    fn test_bounded_operator_composition() {
        let rules = latex_rules().unwrap();
        let bounded = rule(&rules, "bounded-operators");
        assert_eq!(apply(&bounded, r"\int_{0}^1"), r"\int_{0}^{1}");
        assert_eq!(apply(&bounded, r"\sum _{i=1} ^{n}"), r"\sum_{i=1}^{n}");
        assert_eq!(apply(&bounded, r"\int_{0}^\infty"), r"\int_{0}^\infty");
        assert_eq!(apply(&bounded, r"\intop_{0}"), r"\intop_{0}");
    }

    #[test]
    fn test_relations_prefer_longest_key() {
        let rules = latex_rules().unwrap();
        let relations = rule(&rules, "relations");
        assert_eq!(apply(&relations, "a <-> b"), r"a \leftrightarrow b");
        assert_eq!(apply(&relations, "p <=> q"), r"p \Leftrightarrow q");
        assert_eq!(apply(&relations, "a->b"), r"a\to b");
        assert_eq!(apply(&relations, "x != 0"), r"x \neq 0");
    }

    #[test]
    fn test_operators() {
        let rules = unicode_rules().unwrap();
        let operators = rule(&rules, "operators");
        assert_eq!(apply(&operators, "a +/- b"), "a ± b");
        assert_eq!(apply(&operators, "a -+ b"), "a ∓ b");
        assert_eq!(apply(&operators, "2*x"), "2·x");
    }
}
