//! Error types and error handling for the checker.
//!
//! This module defines the error types produced by semantic analysis.
//! It includes:
//!
//! - One error variant per kind of semantic failure
//! - A context tag naming the construct that failed
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;
