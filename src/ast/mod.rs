/// AST (Abstract Syntax Tree) module
/// Contains the syntax tree the checker consumes. The tree is built by an
/// external parser and is never mutated by the checker.
///
/// Submodules:
/// - ast: Program, class, method and variable declarations
/// - expressions: Definitions for various expression types
/// - statements: Definitions for various statement types
/// - types: Definitions for type representations in the AST
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
