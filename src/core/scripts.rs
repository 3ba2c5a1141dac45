//! Unicode sub/superscript replacers
//!
//! A script is raised only when every character in it has a Unicode form;
//! otherwise the notation is left as typed (`x_y` stays `x_y`).

use regex::Captures;

use crate::data::scripts::{map_all, subscript, superscript};

fn mapper(marker: &str) -> fn(char) -> Option<char> {
    if marker == "^" {
        superscript
    } else {
        subscript
    }
}

/// `_(...)`, `_{...}`, `^(...)`, `^{...}`
pub fn raise_delimited(caps: &Captures<'_>) -> Option<String> {
    let marker = caps.get(1)?.as_str();
    let inner = caps.get(2).or_else(|| caps.get(3))?.as_str();
    map_all(inner, mapper(marker))
}

/// `_x`, `^2`
pub fn raise_single(caps: &Captures<'_>) -> Option<String> {
    let marker = caps.get(1)?.as_str();
    let body = caps.get(2)?.as_str();
    map_all(body, mapper(marker))
}
