use crate::{
    ast::{expressions::Expr, statements::Stmt, types::Type},
    errors::errors::{Context, Error, ErrorImpl},
};

use super::{
    expr::{expect_value, type_check_call, type_check_expr},
    returns::{else_evidence, then_evidence, while_evidence},
    type_checker::TypeChecker,
    types::assignable,
};

pub fn type_check_stmt(type_checker: &mut TypeChecker, stmt: &Stmt) -> Result<(), Error> {
    match stmt {
        Stmt::Block(body) => {
            for stmt in body.iter() {
                type_check_stmt(type_checker, stmt)?;
            }
            Ok(())
        }
        Stmt::Assign { target, value } => {
            let target_type = type_check_expr(type_checker, target)?;
            // No compatibility check when the right-hand side has no type.
            let Some(value_type) = type_check_expr(type_checker, value)? else {
                return Ok(());
            };

            match target_type {
                Some(target_type)
                    if assignable(&type_checker.classes, &target_type, &value_type) =>
                {
                    Ok(())
                }
                Some(target_type) => Err(Error::new(
                    ErrorImpl::mismatch(target_type, value_type),
                    Context::Assign,
                )),
                None => Err(Error::new(
                    ErrorImpl::mismatch("void", value_type),
                    Context::Assign,
                )),
            }
        }
        Stmt::CallStmt {
            receiver,
            method,
            args,
        } => type_check_call(type_checker, receiver, method, args, Context::CallStmt).map(|_| ()),
        Stmt::If {
            condition,
            then_body,
            else_body,
        } => {
            type_check_condition(type_checker, condition, Context::If)?;

            type_checker.record(then_evidence(then_body));
            type_check_stmt(type_checker, then_body)?;

            if let Some(else_body) = else_body {
                type_checker.record(else_evidence(else_body));
                type_check_stmt(type_checker, else_body)?;
            }
            Ok(())
        }
        Stmt::While { condition, body } => {
            type_check_condition(type_checker, condition, Context::While)?;

            for evidence in while_evidence(body) {
                type_checker.record(evidence);
            }
            type_check_stmt(type_checker, body)
        }
        Stmt::Print(arg) => match arg {
            None | Some(Expr::StrLit(_)) => Ok(()),
            Some(arg) => match expect_value(type_checker, arg, Context::Print)? {
                Type::Int | Type::Bool => Ok(()),
                other => Err(Error::new(
                    ErrorImpl::mismatch("int, boolean or string", other),
                    Context::Print,
                )),
            },
        },
        Stmt::Return(value) => type_check_return(type_checker, value.as_ref()),
    }
}

fn type_check_condition(
    type_checker: &mut TypeChecker,
    condition: &Expr,
    context: Context,
) -> Result<(), Error> {
    let received = match condition {
        Expr::StrLit(_) => String::from("String"),
        _ => match type_check_expr(type_checker, condition)? {
            Some(Type::Bool) => return Ok(()),
            Some(other) => other.to_string(),
            None => String::from("void"),
        },
    };

    Err(Error::new(
        ErrorImpl::ConditionNotBoolean { received },
        context,
    ))
}

/// Only the variant of the returned value is compared with the declared
/// return type; class names and element types are not.
fn type_check_return(type_checker: &mut TypeChecker, value: Option<&Expr>) -> Result<(), Error> {
    match (value, type_checker.current_return_type()) {
        (None, None) => Ok(()),
        (None, Some(expected)) => Err(Error::new(
            ErrorImpl::MissingReturnValue {
                expected: expected.to_string(),
            },
            Context::Return,
        )),
        (Some(_), None) => Err(Error::new(
            ErrorImpl::UnexpectedReturnValue,
            Context::Return,
        )),
        (Some(value), Some(expected)) => {
            let received = expect_value(type_checker, value, Context::Return)?;
            if expected.same_variant(&received) {
                Ok(())
            } else {
                Err(Error::new(
                    ErrorImpl::mismatch(expected, received),
                    Context::Return,
                ))
            }
        }
    }
}
