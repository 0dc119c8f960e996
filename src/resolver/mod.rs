//! Expression and declaration resolution.
//!
//! This module turns the token-group tree of a single statement into AST
//! nodes. Nested groups are resolved first; the flat sequence left over is
//! then split at its root operator, chosen from a fixed table of
//! precedence classes:
//!
//! - `lookups`: the operator symbols and their split eligibility
//! - `declaration`: leaves, i.e. declarations, literals and names
//! - `resolver`: root selection and operand assembly

pub mod declaration;
pub mod lookups;
pub mod resolver;
