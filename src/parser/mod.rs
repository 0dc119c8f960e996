//! Parser module, the entry point from source text to AST.
//!
//! The parser runs the whole pipeline over a shader source:
//!
//! - Preprocessing (comments, macros, directives)
//! - Splitting into curly-brace blocks, then into `;`-separated statements
//! - Splitting each statement on parentheses
//! - Resolving each statement into a node
//!
//! Every statement is resolved against the parser's scope. Declarations are
//! only added to that scope when `ParserOptions::declare_into_scope` is set.

pub mod parser;
