//! Static data tables
//!
//! - `symbols`: canonical token → LaTeX / Unicode rendering
//! - `scripts`: Unicode sub/superscript code points

pub mod scripts;
pub mod symbols;

pub use symbols::{lookup, lookup_in, Category, Symbol, SYMBOLS};
