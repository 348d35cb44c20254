use crate::{
    ast::{
        expressions::{BinaryOp, Expr, UnaryOp},
        types::Type,
    },
    errors::errors::{Context, Error, ErrorImpl},
};

use super::{
    type_checker::TypeChecker,
    types::{assignable, comparable},
};

/// Infers the type of an expression.
///
/// Returns `Ok(None)` only for a call to a void method, which has no value.
pub fn type_check_expr(
    type_checker: &mut TypeChecker,
    expr: &Expr,
) -> Result<Option<Type>, Error> {
    match expr {
        Expr::IntLit(_) => Ok(Some(Type::Int)),
        Expr::BoolLit(_) => Ok(Some(Type::Bool)),
        // Only legal as a print argument, which never reaches here.
        Expr::StrLit(_) => Err(Error::new(
            ErrorImpl::UnrecognizedNode {
                node: String::from(expr.kind_name()),
            },
            Context::Exp,
        )),
        Expr::Id(name) => type_check_id(type_checker, name).map(Some),
        Expr::This => {
            let class = type_checker.current_class_name(Context::This)?;
            Ok(Some(Type::object(class)))
        }
        Expr::Field { receiver, name } => type_check_field(type_checker, receiver, name).map(Some),
        Expr::Call {
            receiver,
            method,
            args,
        } => type_check_call(type_checker, receiver, method, args, Context::Call),
        Expr::NewObject(class) => {
            if type_checker.classes.contains(class) {
                Ok(Some(Type::object(class)))
            } else {
                Err(Error::new(
                    ErrorImpl::UnknownClass {
                        class: class.clone(),
                    },
                    Context::NewObj,
                ))
            }
        }
        Expr::NewArray { element, length } => {
            if !element.is_primitive() {
                return Err(Error::new(
                    ErrorImpl::mismatch("int or boolean", element),
                    Context::NewArray,
                ));
            }
            if *length < 0 {
                return Err(Error::new(
                    ErrorImpl::NegativeArrayLength { length: *length },
                    Context::NewArray,
                ));
            }
            Ok(Some(Type::array_of(element.clone())))
        }
        Expr::ArrayElem { array, index } => {
            type_check_array_elem(type_checker, array, index).map(Some)
        }
        Expr::Binop { op, left, right } => {
            type_check_binop(type_checker, *op, left, right).map(Some)
        }
        Expr::Unop { op, operand } => type_check_unop(type_checker, *op, operand).map(Some),
    }
}

/// Infers the type of an expression that must produce a value.
pub fn expect_value(
    type_checker: &mut TypeChecker,
    expr: &Expr,
    context: Context,
) -> Result<Type, Error> {
    type_check_expr(type_checker, expr)?
        .ok_or_else(|| Error::new(ErrorImpl::mismatch("value", "void"), context))
}

/// Parameters and locals first, then fields of the current class and its
/// ancestors.
fn type_check_id(type_checker: &TypeChecker, name: &str) -> Result<Type, Error> {
    if let Some(ty) = type_checker.type_env.get(name) {
        return Ok(ty.clone());
    }

    type_checker
        .find_own_field(name)
        .map(|field| field.ty.clone())
        .ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownName {
                    name: name.to_string(),
                },
                Context::Id,
            )
        })
}

fn type_check_field(
    type_checker: &mut TypeChecker,
    receiver: &Expr,
    name: &str,
) -> Result<Type, Error> {
    let receiver_type = match receiver {
        Expr::Id(_) | Expr::This | Expr::Field { .. } => {
            expect_value(type_checker, receiver, Context::Field)?
        }
        other => {
            return Err(Error::new(
                ErrorImpl::mismatch("object reference", other.kind_name()),
                Context::Field,
            ))
        }
    };

    let class = match receiver_type {
        Type::Object(class) => class,
        other => {
            return Err(Error::new(
                ErrorImpl::mismatch("object", other),
                Context::Field,
            ))
        }
    };
    if !type_checker.classes.contains(&class) {
        return Err(Error::new(ErrorImpl::UnknownClass { class }, Context::Field));
    }

    match type_checker.classes.find_field(&class, name) {
        Some(field) => Ok(field.ty.clone()),
        None => Err(Error::new(
            ErrorImpl::UnknownField {
                class,
                field: name.to_string(),
            },
            Context::Field,
        )),
    }
}

/// Resolves and checks a method call, shared by call expressions and call
/// statements. Returns the method's declared return type.
pub fn type_check_call(
    type_checker: &mut TypeChecker,
    receiver: &Expr,
    method: &str,
    args: &[Expr],
    context: Context,
) -> Result<Option<Type>, Error> {
    let class = match receiver {
        Expr::This => type_checker.current_class_name(context)?.to_string(),
        Expr::Id(name) => match type_checker.object_classes.get(name) {
            Some(class) => class.clone(),
            None => {
                return Err(Error::new(
                    ErrorImpl::UnknownName { name: name.clone() },
                    context,
                ))
            }
        },
        other => {
            return Err(Error::new(
                ErrorImpl::mismatch("object reference", other.kind_name()),
                context,
            ))
        }
    };

    let Some(declaration) = type_checker.classes.find_method(&class, method) else {
        return Err(Error::new(
            ErrorImpl::UnknownMethod {
                class,
                method: method.to_string(),
            },
            context,
        ));
    };

    if declaration.params.len() != args.len() {
        return Err(Error::new(
            ErrorImpl::ArityMismatch {
                expected: declaration.params.len(),
                received: args.len(),
            },
            context,
        ));
    }

    for (param, arg) in declaration.params.iter().zip(args) {
        let arg_type = expect_value(type_checker, arg, context)?;

        if !param.ty.same_variant(&arg_type) {
            return Err(Error::new(
                ErrorImpl::mismatch(&param.ty, &arg_type),
                context,
            ));
        }

        match &param.ty {
            Type::Object(_) => {
                type_checker.require_class(&param.ty, context)?;
                type_checker.require_class(&arg_type, context)?;
                if !assignable(&type_checker.classes, &param.ty, &arg_type) {
                    return Err(Error::new(
                        ErrorImpl::mismatch(&param.ty, &arg_type),
                        context,
                    ));
                }
            }
            Type::Array(_) => {
                if !assignable(&type_checker.classes, &param.ty, &arg_type) {
                    return Err(Error::new(
                        ErrorImpl::mismatch(&param.ty, &arg_type),
                        context,
                    ));
                }
            }
            Type::Int | Type::Bool => {}
        }
    }

    Ok(declaration.return_type.clone())
}

fn type_check_array_elem(
    type_checker: &mut TypeChecker,
    array: &Expr,
    index: &Expr,
) -> Result<Type, Error> {
    let Expr::Id(name) = array else {
        return Err(Error::new(
            ErrorImpl::mismatch("array identifier", array.kind_name()),
            Context::ArrayElm,
        ));
    };

    let array_type = match type_checker.type_env.get(name) {
        Some(ty) => ty.clone(),
        None => match type_checker.find_own_field(name) {
            Some(field) => field.ty.clone(),
            None => {
                return Err(Error::new(
                    ErrorImpl::UnknownName { name: name.clone() },
                    Context::ArrayElm,
                ))
            }
        },
    };

    let element = match array_type {
        Type::Array(element) => *element,
        other => {
            return Err(Error::new(
                ErrorImpl::mismatch("array", other),
                Context::ArrayElm,
            ))
        }
    };

    let received = match index {
        Expr::IntLit(_) => None,
        Expr::StrLit(_) => Some(String::from("String")),
        _ => match type_check_expr(type_checker, index)? {
            Some(Type::Int) => None,
            Some(other) => Some(other.to_string()),
            None => Some(String::from("void")),
        },
    };

    if let Some(received) = received {
        return Err(Error::new(
            ErrorImpl::IndexNotInteger { received },
            Context::ArrayElm,
        ));
    }

    Ok(element)
}

fn type_check_binop(
    type_checker: &mut TypeChecker,
    op: BinaryOp,
    left: &Expr,
    right: &Expr,
) -> Result<Type, Error> {
    let left = expect_value(type_checker, left, Context::Binop)?;
    let right = expect_value(type_checker, right, Context::Binop)?;

    if !comparable(&type_checker.classes, &left, &right) {
        return Err(Error::new(
            ErrorImpl::mismatch(&left, &right),
            Context::Binop,
        ));
    }

    // Comparable primitives are identical, so checking the left side is enough.
    if op.is_arithmetic() {
        if left == Type::Int {
            Ok(Type::Int)
        } else {
            Err(Error::new(ErrorImpl::mismatch(Type::Int, &left), Context::Binop))
        }
    } else if op.is_logical() && left == Type::Int {
        Err(Error::new(ErrorImpl::mismatch(Type::Bool, &left), Context::Binop))
    } else {
        Ok(Type::Bool)
    }
}

fn type_check_unop(
    type_checker: &mut TypeChecker,
    op: UnaryOp,
    operand: &Expr,
) -> Result<Type, Error> {
    let operand = expect_value(type_checker, operand, Context::Unop)?;

    let expected = match op {
        UnaryOp::Neg => Type::Int,
        UnaryOp::Not => Type::Bool,
    };

    if operand == expected {
        Ok(expected)
    } else {
        Err(Error::new(ErrorImpl::mismatch(expected, operand), Context::Unop))
    }
}
