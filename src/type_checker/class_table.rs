use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    ast::ast::{ClassDecl, MethodDecl, VarDecl},
    errors::errors::{Context, Error, ErrorImpl},
};

/// One declared class. The parent is held by name and resolved through the
/// owning `ClassTable`, so the table stays the only owner of class records.
#[derive(Debug, Clone, Copy)]
pub struct ClassInfo<'a> {
    pub decl: &'a ClassDecl,
    pub parent: Option<&'a str>,
}

impl<'a> ClassInfo<'a> {
    pub fn name(&self) -> &'a str {
        &self.decl.name
    }

    fn own_method(&self, name: &str) -> Option<&'a MethodDecl> {
        self.decl.methods.iter().find(|method| method.name == name)
    }

    fn own_field(&self, name: &str) -> Option<&'a VarDecl> {
        self.decl.fields.iter().find(|field| field.name == name)
    }
}

/// Class name to `ClassInfo` mapping, built once per program.
#[derive(Debug, Default)]
pub struct ClassTable<'a> {
    classes: FxHashMap<&'a str, ClassInfo<'a>>,
    order: Vec<&'a str>,
}

impl<'a> ClassTable<'a> {
    /// Builds the table, inserting parents before their children.
    pub fn build(classes: &'a [ClassDecl]) -> Result<Self, Error> {
        let mut table = ClassTable::default();

        for decl in sort_by_hierarchy(classes)? {
            table.insert(decl);
        }

        Ok(table)
    }

    fn insert(&mut self, decl: &'a ClassDecl) {
        let parent = decl.parent.as_deref();
        debug_assert!(parent.map_or(true, |parent| self.classes.contains_key(parent)));

        self.classes.insert(&decl.name, ClassInfo { decl, parent });
        self.order.push(&decl.name);
    }

    pub fn get(&self, name: &str) -> Option<&ClassInfo<'a>> {
        self.classes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Class records in the order they were inserted (parents first).
    pub fn iter(&self) -> impl Iterator<Item = &ClassInfo<'a>> + '_ {
        self.order.iter().filter_map(|name| self.classes.get(name))
    }

    /// Walks from `name` up to the root, starting with `name` itself.
    pub fn ancestors(&self, name: &str) -> Ancestors<'_, 'a> {
        Ancestors {
            table: self,
            next: self.classes.get(name).copied(),
        }
    }

    /// Finds a method on `class` or the closest ancestor declaring it.
    pub fn find_method(&self, class: &str, method: &str) -> Option<&'a MethodDecl> {
        self.ancestors(class).find_map(|info| info.own_method(method))
    }

    /// Finds a field on `class` or the closest ancestor declaring it.
    pub fn find_field(&self, class: &str, field: &str) -> Option<&'a VarDecl> {
        self.ancestors(class).find_map(|info| info.own_field(field))
    }

    /// True when `ancestor` is `class` or one of its ancestors.
    pub fn is_ancestor_or_self(&self, ancestor: &str, class: &str) -> bool {
        self.ancestors(class).any(|info| info.name() == ancestor)
    }
}

pub struct Ancestors<'t, 'a> {
    table: &'t ClassTable<'a>,
    next: Option<ClassInfo<'a>>,
}

impl<'t, 'a> Iterator for Ancestors<'t, 'a> {
    type Item = ClassInfo<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current
            .parent
            .and_then(|parent| self.table.classes.get(parent).copied());
        Some(current)
    }
}

/// Orders declarations so every class comes after its parent.
///
/// Repeatedly scans the remaining declarations, placing any whose parent is
/// absent or already placed. A scan that places nothing means the rest form
/// a cycle, unless one of them names a parent that is never declared. Class
/// names must be unique.
pub fn sort_by_hierarchy(classes: &[ClassDecl]) -> Result<Vec<&ClassDecl>, Error> {
    let mut declared: FxHashSet<&str> = FxHashSet::default();
    for class in classes {
        if !declared.insert(class.name.as_str()) {
            return Err(Error::new(
                ErrorImpl::DuplicateClass {
                    class: class.name.clone(),
                },
                Context::ClassDecl,
            ));
        }
    }

    if let Some(class) = classes
        .iter()
        .find(|class| matches!(&class.parent, Some(parent) if !declared.contains(parent.as_str())))
    {
        return Err(Error::new(
            ErrorImpl::UnknownClass {
                class: class.parent.clone().unwrap_or_default(),
            },
            Context::ClassDecl,
        ));
    }

    let mut sorted = Vec::with_capacity(classes.len());
    let mut done: FxHashSet<&str> = FxHashSet::default();
    let mut remaining: Vec<&ClassDecl> = classes.iter().collect();

    while !remaining.is_empty() {
        let before = remaining.len();

        remaining.retain(|class| {
            let class: &ClassDecl = *class;
            let ready = match &class.parent {
                None => true,
                Some(parent) => done.contains(parent.as_str()),
            };
            if ready {
                done.insert(class.name.as_str());
                sorted.push(class);
            }
            !ready
        });

        if remaining.len() == before {
            return Err(Error::new(
                ErrorImpl::CyclicHierarchy {
                    classes: remaining.iter().map(|class| class.name.clone()).collect(),
                },
                Context::Program,
            ));
        }
    }

    Ok(sorted)
}
