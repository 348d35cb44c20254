//! Definite-return analysis.
//!
//! This is not a reachability analysis. While a method body is checked, each
//! `if`, `while` and top-level `return` appends a record describing whether
//! it returns directly. At method exit the records are folded, in order, into
//! a single verdict.
//!
//! The fold is approximate. In particular a
//! `while` whose body returns resets the verdict to `false`, so a method
//! whose only return sits inside a loop is rejected.

use crate::ast::statements::Stmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Evidence {
    Return,
    While { body_has_return: bool },
    If { branch_has_return: bool },
    Else { branch_has_return: bool },
    NestedIf,
    NestedElse,
}

/// What a branch of an `if` looks like from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BranchShape {
    Returns,
    Nested,
    FallsThrough,
}

fn branch_shape(branch: &Stmt) -> BranchShape {
    match branch {
        Stmt::Return(_) => BranchShape::Returns,
        Stmt::If { .. } => BranchShape::Nested,
        Stmt::Block(body) => {
            if body.iter().any(Stmt::is_return) {
                BranchShape::Returns
            } else if body.iter().any(Stmt::is_if) {
                BranchShape::Nested
            } else {
                BranchShape::FallsThrough
            }
        }
        _ => BranchShape::FallsThrough,
    }
}

/// Record for the `then` branch of an `if`.
pub fn then_evidence(branch: &Stmt) -> Evidence {
    match branch_shape(branch) {
        BranchShape::Returns => Evidence::If { branch_has_return: true },
        BranchShape::Nested => Evidence::NestedIf,
        BranchShape::FallsThrough => Evidence::If { branch_has_return: false },
    }
}

/// Record for the `else` branch of an `if`.
pub fn else_evidence(branch: &Stmt) -> Evidence {
    match branch_shape(branch) {
        BranchShape::Returns => Evidence::Else { branch_has_return: true },
        BranchShape::Nested => Evidence::NestedElse,
        BranchShape::FallsThrough => Evidence::Else { branch_has_return: false },
    }
}

/// Records for a `while` loop: one per `return` directly in its body.
pub fn while_evidence(body: &Stmt) -> Vec<Evidence> {
    let returns = match body {
        Stmt::Return(_) => 1,
        Stmt::Block(body) => body.iter().filter(|stmt| stmt.is_return()).count(),
        _ => 0,
    };

    vec![Evidence::While { body_has_return: true }; returns]
}

/// Folds the records of one method into a verdict.
#[derive(Debug, Default)]
pub struct ReturnFlow {
    success: bool,
    pending_if_return: bool,
    pending_nested_return: bool,
}

impl ReturnFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, evidence: Evidence) {
        match evidence {
            Evidence::Return => self.success = true,
            Evidence::While { body_has_return } => self.success = !body_has_return,
            Evidence::NestedIf | Evidence::NestedElse => self.pending_nested_return = true,
            Evidence::If { branch_has_return } => {
                if !branch_has_return {
                    self.success = false;
                } else if self.pending_nested_return {
                    // Both branches of the nested if returned.
                    self.pending_nested_return = true;
                } else {
                    self.pending_if_return = true;
                }
            }
            Evidence::Else { branch_has_return } => {
                if !branch_has_return {
                    self.success = false;
                } else if self.pending_if_return {
                    self.success = true;
                    self.pending_if_return = false;
                } else if self.pending_nested_return {
                    self.pending_if_return = true;
                }
            }
        }
    }

    pub fn succeeded(&self) -> bool {
        self.success
    }
}

/// Returns true when the records show the method always returns.
pub fn verify_returns(evidence: &[Evidence]) -> bool {
    let mut flow = ReturnFlow::new();
    for record in evidence {
        flow.apply(*record);
    }
    flow.succeeded()
}
