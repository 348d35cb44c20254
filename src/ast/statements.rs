use super::expressions::Expr;

/// Statements
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Block(Vec<Stmt>),
    Assign {
        target: Expr,
        value: Expr,
    },
    CallStmt {
        receiver: Expr,
        method: String,
        args: Vec<Expr>,
    },
    If {
        condition: Expr,
        then_body: Box<Stmt>,
        else_body: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
    Print(Option<Expr>),
    Return(Option<Expr>),
}

impl Stmt {
    pub fn block(body: Vec<Stmt>) -> Self {
        Stmt::Block(body)
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Stmt::Assign { target, value }
    }

    pub fn call(receiver: Expr, method: &str, args: Vec<Expr>) -> Self {
        Stmt::CallStmt {
            receiver,
            method: method.to_string(),
            args,
        }
    }

    pub fn if_then(condition: Expr, then_body: Stmt) -> Self {
        Stmt::If {
            condition,
            then_body: Box::new(then_body),
            else_body: None,
        }
    }

    pub fn if_else(condition: Expr, then_body: Stmt, else_body: Stmt) -> Self {
        Stmt::If {
            condition,
            then_body: Box::new(then_body),
            else_body: Some(Box::new(else_body)),
        }
    }

    pub fn while_loop(condition: Expr, body: Stmt) -> Self {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn print(arg: Expr) -> Self {
        Stmt::Print(Some(arg))
    }

    pub fn ret(value: Expr) -> Self {
        Stmt::Return(Some(value))
    }

    pub fn ret_void() -> Self {
        Stmt::Return(None)
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Stmt::Return(_))
    }

    pub fn is_if(&self) -> bool {
        matches!(self, Stmt::If { .. })
    }
}
