//! Type checking and semantic analysis module.
//!
//! This module performs semantic analysis on a parsed program. It builds
//! the class table once, then walks every class and method while:
//!
//! - Verifying type correctness of declarations, expressions and statements
//! - Resolving fields and methods through the inheritance chain
//! - Checking method call arity and argument types
//! - Resetting scopes at every class and method boundary
//! - Detecting methods that may finish without returning a value
//!
//! Checking stops at the first error.

pub mod class_table;
pub mod expr;
pub mod returns;
pub mod stmt;
pub mod type_checker;
pub mod types;
