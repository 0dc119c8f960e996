//! Error types and error handling for the shader front end.
//!
//! The front end is permissive: most odd input still produces a tree.
//! The few conditions that are reported are:
//!
//! - Malformed `#define` directives
//! - Assignments to something that is not a variable
//! - Nesting deeper than the configured recursion limit

pub mod errors;
