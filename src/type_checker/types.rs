//! Type compatibility rules.
//!
//! Arrays are compared structurally and objects nominally: an object type
//! accepts its own class and every subclass of it, never a parent or a
//! sibling.

use crate::ast::types::Type;

use super::class_table::ClassTable;

/// Returns true if a value of type `src` may be stored where `dst` is expected.
pub fn assignable(classes: &ClassTable, dst: &Type, src: &Type) -> bool {
    match (dst, src) {
        (Type::Int, Type::Int) | (Type::Bool, Type::Bool) => true,
        (Type::Array(dst_element), Type::Array(src_element)) => {
            assignable(classes, dst_element, src_element)
        }
        (Type::Object(dst_class), Type::Object(src_class)) => {
            dst_class == src_class || classes.is_ancestor_or_self(dst_class, src_class)
        }
        _ => false,
    }
}

/// Returns true if either type is assignable to the other.
pub fn comparable(classes: &ClassTable, a: &Type, b: &Type) -> bool {
    assignable(classes, a, b) || assignable(classes, b, a)
}
