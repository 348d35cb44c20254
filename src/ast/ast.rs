use super::{expressions::Expr, statements::Stmt, types::Type};

/// A whole program: a set of class declarations in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub classes: Vec<ClassDecl>,
}

impl Program {
    pub fn new(classes: Vec<ClassDecl>) -> Self {
        Program { classes }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    pub parent: Option<String>,
    pub fields: Vec<VarDecl>,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn new(name: &str, parent: Option<&str>) -> Self {
        ClassDecl {
            name: name.to_string(),
            parent: parent.map(String::from),
            fields: vec![],
            methods: vec![],
        }
    }

    pub fn with_field(mut self, field: VarDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }
}

/// A method declaration. `return_type` is `None` for void methods.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub return_type: Option<Type>,
    pub name: String,
    pub params: Vec<Param>,
    pub locals: Vec<VarDecl>,
    pub body: Vec<Stmt>,
}

impl MethodDecl {
    pub fn new(return_type: Option<Type>, name: &str) -> Self {
        MethodDecl {
            return_type,
            name: name.to_string(),
            params: vec![],
            locals: vec![],
            body: vec![],
        }
    }

    pub fn with_param(mut self, ty: Type, name: &str) -> Self {
        self.params.push(Param::new(ty, name));
        self
    }

    pub fn with_local(mut self, local: VarDecl) -> Self {
        self.locals.push(local);
        self
    }

    pub fn with_body(mut self, body: Vec<Stmt>) -> Self {
        self.body = body;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub ty: Type,
    pub name: String,
}

impl Param {
    pub fn new(ty: Type, name: &str) -> Self {
        Param {
            ty,
            name: name.to_string(),
        }
    }
}

/// A field or local variable declaration, with an optional initializer.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: Type,
    pub name: String,
    pub init: Option<Expr>,
}

impl VarDecl {
    pub fn new(ty: Type, name: &str) -> Self {
        VarDecl {
            ty,
            name: name.to_string(),
            init: None,
        }
    }

    pub fn with_init(ty: Type, name: &str, init: Expr) -> Self {
        VarDecl {
            ty,
            name: name.to_string(),
            init: Some(init),
        }
    }
}
