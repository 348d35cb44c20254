#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod type_checker;

pub use type_checker::type_checker::check;

pub fn display_error(error: &Error) {
    /*
        Error: TypeMismatch (Expected type `int`, received `boolean`)
        -> (In Assign) types don't match: expected int, received boolean
    */

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", error);
}
