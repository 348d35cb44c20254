use std::fmt::Display;

use thiserror::Error;

/// The construct being checked when an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Program,
    ClassDecl,
    MethodDecl,
    Param,
    VarDecl,
    Assign,
    CallStmt,
    If,
    While,
    Print,
    Return,
    Binop,
    Unop,
    Call,
    NewArray,
    ArrayElm,
    NewObj,
    Field,
    Id,
    This,
    Exp,
}

impl Display for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "In {:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    context: Context,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, context: Context) -> Self {
        Error {
            internal_error: error_impl,
            context,
        }
    }

    pub fn get_context(&self) -> Context {
        self.context
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnknownClass { .. } => "UnknownClass",
            ErrorImpl::UnknownField { .. } => "UnknownField",
            ErrorImpl::UnknownMethod { .. } => "UnknownMethod",
            ErrorImpl::UnknownName { .. } => "UnknownName",
            ErrorImpl::ArityMismatch { .. } => "ArityMismatch",
            ErrorImpl::TypeMismatch { .. } => "TypeMismatch",
            ErrorImpl::ConditionNotBoolean { .. } => "ConditionNotBoolean",
            ErrorImpl::IndexNotInteger { .. } => "IndexNotInteger",
            ErrorImpl::NegativeArrayLength { .. } => "NegativeArrayLength",
            ErrorImpl::MissingReturn { .. } => "MissingReturn",
            ErrorImpl::MissingReturnValue { .. } => "MissingReturnValue",
            ErrorImpl::UnexpectedReturnValue => "UnexpectedReturnValue",
            ErrorImpl::CyclicHierarchy { .. } => "CyclicHierarchy",
            ErrorImpl::DuplicateClass { .. } => "DuplicateClass",
            ErrorImpl::UnrecognizedNode { .. } => "UnrecognizedNode",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnknownClass { class } => {
                ErrorTip::Suggestion(format!("Class `{}` is not declared", class))
            }
            ErrorImpl::UnknownField { class, field } => ErrorTip::Suggestion(format!(
                "Class `{}` and its ancestors have no field `{}`",
                class, field
            )),
            ErrorImpl::UnknownMethod { class, method } => ErrorTip::Suggestion(format!(
                "Class `{}` and its ancestors have no method `{}`",
                class, method
            )),
            ErrorImpl::UnknownName { name } => ErrorTip::Suggestion(format!(
                "`{}` is not a parameter, local or field",
                name
            )),
            ErrorImpl::ArityMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::TypeMismatch { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ConditionNotBoolean { received } => ErrorTip::Suggestion(format!(
                "Conditions must be `boolean`, received `{}`",
                received
            )),
            ErrorImpl::IndexNotInteger { received } => ErrorTip::Suggestion(format!(
                "Array indices must be `int`, received `{}`",
                received
            )),
            ErrorImpl::NegativeArrayLength { .. } => ErrorTip::None,
            ErrorImpl::MissingReturn { method } => ErrorTip::Suggestion(format!(
                "Add a `return` that every path through `{}` reaches",
                method
            )),
            ErrorImpl::MissingReturnValue { expected } => {
                ErrorTip::Suggestion(format!("Return a value of type `{}`", expected))
            }
            ErrorImpl::UnexpectedReturnValue => {
                ErrorTip::Suggestion(String::from("Void methods cannot return a value"))
            }
            ErrorImpl::CyclicHierarchy { classes } => ErrorTip::Suggestion(format!(
                "Classes `{}` inherit from each other",
                classes.join("`, `")
            )),
            ErrorImpl::DuplicateClass { class } => {
                ErrorTip::Suggestion(format!("Rename one of the classes named `{}`", class))
            }
            ErrorImpl::UnrecognizedNode { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}) {}", self.context, self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("can't find class {class}")]
    UnknownClass { class: String },
    #[error("can't find field {field} in class {class}")]
    UnknownField { class: String, field: String },
    #[error("can't find method {method} in class {class}")]
    UnknownMethod { class: String, method: String },
    #[error("can't find variable {name}")]
    UnknownName { name: String },
    #[error("param and arg counts don't match: {expected} vs. {received}")]
    ArityMismatch { expected: usize, received: usize },
    #[error("types don't match: expected {expected}, received {received}")]
    TypeMismatch { expected: String, received: String },
    #[error("cond exp type is not boolean: {received}")]
    ConditionNotBoolean { received: String },
    #[error("index is not integer: {received}")]
    IndexNotInteger { received: String },
    #[error("array length cannot be negative: {length}")]
    NegativeArrayLength { length: i64 },
    #[error("missing return statement in method {method}")]
    MissingReturn { method: String },
    #[error("missing return value of type {expected}")]
    MissingReturnValue { expected: String },
    #[error("unexpected return value")]
    UnexpectedReturnValue,
    #[error("cyclic class hierarchy: {classes:?}")]
    CyclicHierarchy { classes: Vec<String> },
    #[error("class {class} is declared more than once")]
    DuplicateClass { class: String },
    #[error("illegal ast node: {node}")]
    UnrecognizedNode { node: String },
}

impl ErrorImpl {
    /// Builds a `TypeMismatch` from anything that renders as a type.
    pub fn mismatch(expected: impl Display, received: impl Display) -> Self {
        ErrorImpl::TypeMismatch {
            expected: expected.to_string(),
            received: received.to_string(),
        }
    }
}
