//! Type term representation.
//!
//! Terms form a mutable graph: variables carry an instance cell that
//! unification fills in, and sum terms carry a resolution cell that commits
//! them to one alternative. `Type` is a cheap handle; cloning it aliases the
//! same cell.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A handle to a type term.
#[derive(Debug, Clone)]
pub struct Type(Rc<TypeKind>);

/// The term behind a handle.
#[derive(Debug)]
pub(crate) enum TypeKind {
    /// A variable, unbound until unification writes its instance.
    Var(RefCell<Option<Type>>),
    /// A type constant such as `int` or `bool`.
    Con(String),
    /// A function from domain to codomain.
    Fun(Type, Type),
    /// A product of component types.
    Tuple(Vec<Type>),
    /// A sum of two alternatives with a memoized resolution.
    Sum(SumParts),
}

#[derive(Debug)]
pub(crate) struct SumParts {
    pub(crate) left: Type,
    pub(crate) right: Type,
    /// Once unification commits to an alternative it is recorded here and
    /// the sum behaves as that alternative from then on.
    pub(crate) resolved: RefCell<Option<Type>>,
}

/// A structural view of a term's current representative.
///
/// Resolved sums and bound variables never show up here; [`Type::view`]
/// prunes before deconstructing.
#[derive(Debug, Clone)]
pub enum TypeView {
    Var,
    Con(String),
    Fun(Type, Type),
    Tuple(Vec<Type>),
    Sum(Type, Type),
}

impl Type {
    /// A fresh, unbound type variable.
    pub fn var() -> Type {
        Type(Rc::new(TypeKind::Var(RefCell::new(None))))
    }

    /// A type constant.
    pub fn con(name: impl Into<String>) -> Type {
        Type(Rc::new(TypeKind::Con(name.into())))
    }

    pub fn bool() -> Type {
        Type::con("bool")
    }

    pub fn int() -> Type {
        Type::con("int")
    }

    /// A function type from `domain` to `codomain`.
    pub fn fun(domain: Type, codomain: Type) -> Type {
        Type(Rc::new(TypeKind::Fun(domain, codomain)))
    }

    /// A product of component types.
    pub fn tuple(items: Vec<Type>) -> Type {
        Type(Rc::new(TypeKind::Tuple(items)))
    }

    /// An unresolved sum of two alternatives.
    pub fn sum(left: Type, right: Type) -> Type {
        Type(Rc::new(TypeKind::Sum(SumParts {
            left,
            right,
            resolved: RefCell::new(None),
        })))
    }

    /// Whether two handles alias the same cell.
    pub fn same_cell(&self, other: &Type) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn kind(&self) -> &TypeKind {
        &self.0
    }

    /// A stable identity for the cell, usable as a map key.
    pub(crate) fn cell_id(&self) -> usize {
        Rc::as_ptr(&self.0) as usize
    }

    /// Follow instance links and committed resolutions to the term's
    /// current representative.
    pub fn prune(&self) -> Type {
        match self.kind() {
            TypeKind::Var(instance) => {
                let bound = instance.borrow().clone();
                match bound {
                    Some(target) => {
                        let repr = target.prune();
                        // Path compression: point straight at the representative.
                        *instance.borrow_mut() = Some(repr.clone());
                        repr
                    }
                    None => self.clone(),
                }
            }
            TypeKind::Sum(parts) => {
                let committed = parts.resolved.borrow().clone();
                match committed {
                    Some(alternative) => {
                        let repr = alternative.prune();
                        *parts.resolved.borrow_mut() = Some(repr.clone());
                        repr
                    }
                    None => self.clone(),
                }
            }
            _ => self.clone(),
        }
    }

    /// Deconstruct the term's current representative.
    pub fn view(&self) -> TypeView {
        let repr = self.prune();
        match repr.kind() {
            TypeKind::Var(_) => TypeView::Var,
            TypeKind::Con(name) => TypeView::Con(name.clone()),
            TypeKind::Fun(domain, codomain) => TypeView::Fun(domain.clone(), codomain.clone()),
            TypeKind::Tuple(items) => TypeView::Tuple(items.clone()),
            TypeKind::Sum(parts) => TypeView::Sum(parts.left.clone(), parts.right.clone()),
        }
    }
}

/// Whether `var` occurs anywhere in `term`.
///
/// Both sides are pruned along the way, so bindings made earlier are seen
/// through. Unresolved sums are checked in both alternatives.
pub fn occurs_in(var: &Type, term: &Type) -> bool {
    let term = term.prune();
    if var.same_cell(&term) {
        return true;
    }
    match term.kind() {
        TypeKind::Var(_) | TypeKind::Con(_) => false,
        TypeKind::Fun(domain, codomain) => occurs_in(var, domain) || occurs_in(var, codomain),
        TypeKind::Tuple(items) => items.iter().any(|item| occurs_in(var, item)),
        TypeKind::Sum(parts) => occurs_in(var, &parts.left) || occurs_in(var, &parts.right),
    }
}

/// Copy a type term, replacing its generic variables with fresh ones.
///
/// A variable is generic unless it occurs in one of the `non_generic` terms.
/// Each distinct generic variable maps to one fresh variable across the
/// whole copy; non-generic variables and constants are shared unchanged.
pub fn fresh(term: &Type, non_generic: &[Type]) -> Type {
    freshen(term, non_generic, &mut HashMap::new())
}

fn freshen(term: &Type, non_generic: &[Type], mapping: &mut HashMap<usize, Type>) -> Type {
    let term = term.prune();
    match term.kind() {
        TypeKind::Var(_) => {
            if non_generic.iter().any(|bound| occurs_in(&term, bound)) {
                term.clone()
            } else {
                mapping
                    .entry(term.cell_id())
                    .or_insert_with(Type::var)
                    .clone()
            }
        }
        TypeKind::Con(_) => term.clone(),
        TypeKind::Fun(domain, codomain) => Type::fun(
            freshen(domain, non_generic, mapping),
            freshen(codomain, non_generic, mapping),
        ),
        TypeKind::Tuple(items) => Type::tuple(
            items
                .iter()
                .map(|item| freshen(item, non_generic, mapping))
                .collect(),
        ),
        TypeKind::Sum(parts) => Type::sum(
            freshen(&parts.left, non_generic, mapping),
            freshen(&parts.right, non_generic, mapping),
        ),
    }
}
