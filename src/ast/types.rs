//! Type system definitions for the AST.
//!
//! This module defines the types a program can declare:
//!
//! - Primitive types (integers, booleans)
//! - Arrays of any element type
//! - Objects, named by their class
//!
//! Types are plain values. Two `Int`s (or two `Bool`s) are always the same
//! type; arrays and objects are related by the compatibility rules in
//! `type_checker::types`.

use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Int,
    Bool,
    Array(Box<Type>),
    Object(String),
}

impl Type {
    pub fn array_of(element: Type) -> Self {
        Type::Array(Box::new(element))
    }

    pub fn object(class_name: &str) -> Self {
        Type::Object(class_name.to_string())
    }

    /// Returns true when both types are the same variant, ignoring element
    /// types and class names.
    pub fn same_variant(&self, other: &Type) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Type::Int | Type::Bool)
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Type::Int => write!(f, "int"),
            Type::Bool => write!(f, "boolean"),
            Type::Array(element) => write!(f, "{}[]", element),
            Type::Object(name) => write!(f, "{}", name),
        }
    }
}
