use rustc_hash::FxHashMap;

use crate::{
    ast::{
        ast::{MethodDecl, Param, Program, VarDecl},
        types::Type,
    },
    errors::errors::{Context, Error, ErrorImpl},
};

use super::{
    class_table::{ClassInfo, ClassTable},
    expr::expect_value,
    returns::{verify_returns, Evidence},
    stmt::type_check_stmt,
    types::assignable,
};

/// Mutable state for one check run.
///
/// The class table is fixed for the whole run. Everything else is scoped:
/// cleared when a class is entered and again when a method is entered, so
/// nothing one method binds is visible to the next.
#[derive(Debug)]
pub struct TypeChecker<'a> {
    pub classes: ClassTable<'a>,
    /// Parameters and locals of the method being checked.
    pub type_env: FxHashMap<String, Type>,
    /// Object-typed names to the class they were declared with.
    pub object_classes: FxHashMap<String, String>,
    pub current_class: Option<ClassInfo<'a>>,
    pub current_method: Option<&'a MethodDecl>,
    pub return_evidence: Vec<Evidence>,
}

impl<'a> TypeChecker<'a> {
    pub fn new(classes: ClassTable<'a>) -> Self {
        TypeChecker {
            classes,
            type_env: FxHashMap::default(),
            object_classes: FxHashMap::default(),
            current_class: None,
            current_method: None,
            return_evidence: vec![],
        }
    }

    pub fn enter_class(&mut self, class: ClassInfo<'a>) {
        self.current_class = Some(class);
        self.current_method = None;
        self.type_env.clear();
        self.object_classes.clear();
    }

    pub fn enter_method(&mut self, method: &'a MethodDecl) {
        self.current_method = Some(method);
        self.type_env.clear();
        self.object_classes.clear();
        self.return_evidence.clear();
    }

    pub fn declare_variable(&mut self, name: &str, ty: &Type) {
        self.type_env.insert(name.to_string(), ty.clone());
    }

    pub fn record(&mut self, evidence: Evidence) {
        self.return_evidence.push(evidence);
    }

    pub fn current_class_name(&self, context: Context) -> Result<&'a str, Error> {
        self.current_class.map(|class| class.name()).ok_or_else(|| {
            Error::new(
                ErrorImpl::UnknownName {
                    name: String::from("this"),
                },
                context,
            )
        })
    }

    /// The declared return type of the current method, `None` when void.
    pub fn current_return_type(&self) -> Option<&'a Type> {
        self.current_method
            .and_then(|method| method.return_type.as_ref())
    }

    /// Looks a field up on the current class and its ancestors.
    pub fn find_own_field(&self, name: &str) -> Option<&'a VarDecl> {
        let class = self.current_class?;
        self.classes.find_field(class.name(), name)
    }

    /// Fails with `UnknownClass` when `ty` names a class that isn't declared.
    pub fn require_class(&self, ty: &Type, context: Context) -> Result<(), Error> {
        match ty {
            Type::Object(class) if !self.classes.contains(class) => Err(Error::new(
                ErrorImpl::UnknownClass {
                    class: class.clone(),
                },
                context,
            )),
            _ => Ok(()),
        }
    }
}

/// Checks a whole program, stopping at the first error.
pub fn check(program: &Program) -> Result<(), Error> {
    let classes = ClassTable::build(&program.classes)?;
    let order: Vec<ClassInfo> = classes.iter().copied().collect();

    let mut type_checker = TypeChecker::new(classes);
    for class in order {
        type_check_class(&mut type_checker, class)?;
    }

    Ok(())
}

pub fn type_check_class<'a>(
    type_checker: &mut TypeChecker<'a>,
    class: ClassInfo<'a>,
) -> Result<(), Error> {
    type_checker.enter_class(class);

    for field in class.decl.fields.iter() {
        type_checker.declare_variable(&field.name, &field.ty);
        type_check_var_decl(type_checker, field)?;
    }

    for method in class.decl.methods.iter() {
        type_check_method(type_checker, method)?;
    }

    Ok(())
}

pub fn type_check_method<'a>(
    type_checker: &mut TypeChecker<'a>,
    method: &'a MethodDecl,
) -> Result<(), Error> {
    type_checker.enter_method(method);

    for param in method.params.iter() {
        type_checker.declare_variable(&param.name, &param.ty);
        type_check_param(type_checker, param)?;
    }

    for local in method.locals.iter() {
        type_checker.declare_variable(&local.name, &local.ty);
        type_check_var_decl(type_checker, local)?;
    }

    for stmt in method.body.iter() {
        type_check_stmt(type_checker, stmt)?;
        if stmt.is_return() {
            type_checker.record(Evidence::Return);
        }
    }

    if method.return_type.is_some() && !verify_returns(&type_checker.return_evidence) {
        return Err(Error::new(
            ErrorImpl::MissingReturn {
                method: method.name.clone(),
            },
            Context::MethodDecl,
        ));
    }

    Ok(())
}

pub fn type_check_param(type_checker: &mut TypeChecker, param: &Param) -> Result<(), Error> {
    type_checker.require_class(&param.ty, Context::Param)?;

    if let Type::Object(class) = &param.ty {
        type_checker
            .object_classes
            .insert(param.name.clone(), class.clone());
    }

    Ok(())
}

pub fn type_check_var_decl(type_checker: &mut TypeChecker, var: &VarDecl) -> Result<(), Error> {
    type_checker.require_class(&var.ty, Context::VarDecl)?;

    if let Type::Object(class) = &var.ty {
        type_checker
            .object_classes
            .insert(var.name.clone(), class.clone());
    }

    if let Some(init) = &var.init {
        let init_type = expect_value(type_checker, init, Context::VarDecl)?;
        type_checker.require_class(&init_type, Context::VarDecl)?;

        if !assignable(&type_checker.classes, &var.ty, &init_type) {
            return Err(Error::new(
                ErrorImpl::mismatch(&var.ty, &init_type),
                Context::VarDecl,
            ));
        }
    }

    Ok(())
}
