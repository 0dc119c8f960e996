//! Structural splitting of cleaned source text.
//!
//! The splitter partitions text into a tree of token groups: plain text
//! fragments, and nested groups for every bracketed region. Quoted string
//! and character literals are skipped, so brackets inside them are inert.
//! It runs once with curly braces to find blocks, and again per statement
//! with parentheses to find sub-expressions.

pub mod splitter;

#[cfg(test)]
mod tests;
