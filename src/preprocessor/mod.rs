//! Source preprocessing.
//!
//! Turns raw shader text into the cleaned text the splitter works on:
//!
//! - Block and trailing line comments are removed
//! - Doubled logical-not markers (`!!`) are collapsed
//! - `#define` macros are recorded and substituted into later lines
//! - Directive lines, comment lines and blank lines are discarded

pub mod preprocessor;

#[cfg(test)]
mod tests;
