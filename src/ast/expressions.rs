use std::fmt::Display;

use super::types::Type;

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl BinaryOp {
    pub fn is_arithmetic(&self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div)
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        };
        write!(f, "{}", symbol)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnaryOp::Neg => write!(f, "-"),
            UnaryOp::Not => write!(f, "!"),
        }
    }
}

/// Expressions
///
/// Every expression the parser can produce. `StrLit` is only meaningful as
/// the argument of a print statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binop {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unop {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Call {
        receiver: Box<Expr>,
        method: String,
        args: Vec<Expr>,
    },
    NewArray {
        element: Type,
        length: i64,
    },
    ArrayElem {
        array: Box<Expr>,
        index: Box<Expr>,
    },
    NewObject(String),
    Field {
        receiver: Box<Expr>,
        name: String,
    },
    Id(String),
    This,
    IntLit(i64),
    BoolLit(bool),
    StrLit(String),
}

impl Expr {
    pub fn binop(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binop {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn unop(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unop {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn call(receiver: Expr, method: &str, args: Vec<Expr>) -> Self {
        Expr::Call {
            receiver: Box::new(receiver),
            method: method.to_string(),
            args,
        }
    }

    pub fn new_array(element: Type, length: i64) -> Self {
        Expr::NewArray { element, length }
    }

    pub fn array_elem(array: Expr, index: Expr) -> Self {
        Expr::ArrayElem {
            array: Box::new(array),
            index: Box::new(index),
        }
    }

    pub fn new_object(class_name: &str) -> Self {
        Expr::NewObject(class_name.to_string())
    }

    pub fn field(receiver: Expr, name: &str) -> Self {
        Expr::Field {
            receiver: Box::new(receiver),
            name: name.to_string(),
        }
    }

    pub fn id(name: &str) -> Self {
        Expr::Id(name.to_string())
    }

    pub fn str_lit(value: &str) -> Self {
        Expr::StrLit(value.to_string())
    }

    /// Short name of the expression kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Binop { .. } => "Binop",
            Expr::Unop { .. } => "Unop",
            Expr::Call { .. } => "Call",
            Expr::NewArray { .. } => "NewArray",
            Expr::ArrayElem { .. } => "ArrayElm",
            Expr::NewObject(_) => "NewObj",
            Expr::Field { .. } => "Field",
            Expr::Id(_) => "Id",
            Expr::This => "This",
            Expr::IntLit(_) => "IntLit",
            Expr::BoolLit(_) => "BoolLit",
            Expr::StrLit(_) => "StrLit",
        }
    }
}
