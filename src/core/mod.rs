//! Notation rewriting engine
//!
//! Input is folded through an ordered list of [`rule::Rule`]s selected by
//! an [`profile::EncodingProfile`]. Each rule is one left-to-right scan
//! producing a new string for the next rule.

pub mod profile;
pub mod rule;
mod scripts;
pub mod stages;

pub use profile::{registry, select_profile, EncodingProfile, ProfileRegistry, Target};
pub use rule::{GroupReplacer, Guard, Replace, Replacer, Rule};
