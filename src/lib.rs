//! Front end for a GLSL-like shading language.
//!
//! Source text goes through three stages on its way to an AST:
//!
//! - `preprocessor`: comment removal and `#define` expansion
//! - `splitter`: bracket-aware splitting into a tree of token groups
//! - `resolver`: operator splitting and declaration parsing into `ast` nodes
//!
//! `parser` drives all three over a whole source.

#![allow(clippy::module_inception)]

pub mod ast;
pub mod errors;
pub mod parser;
pub mod preprocessor;
pub mod resolver;
pub mod splitter;
