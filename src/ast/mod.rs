/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - node: The node sum type, literals and the scope mapping
/// - operation: Arithmetic, logical, comparison and bitwise operations
/// - variable: Typed variable bindings and their metadata
pub mod node;
pub mod operation;
pub mod variable;
