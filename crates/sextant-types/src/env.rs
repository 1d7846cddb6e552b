//! Typing environments.

use std::collections::HashMap;

use crate::types::{fresh, occurs_in, Type};

/// A lexically scoped typing environment.
///
/// Scopes form a chain: [`TypeEnv::child`] snapshots the current environment
/// as the parent of a new empty scope, so bindings added to the child never
/// touch the outer scope. Each scope also records which type variables were
/// introduced non-generic in it (function parameters, recursive definitions
/// while they are being checked); [`TypeEnv::instantiate`] consults the
/// whole chain.
#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    bindings: HashMap<String, Type>,
    non_generic: Vec<Type>,
    parent: Option<Box<TypeEnv>>,
}

impl TypeEnv {
    pub fn new() -> TypeEnv {
        TypeEnv::default()
    }

    /// An environment with the built-in operations installed.
    pub fn with_builtins() -> TypeEnv {
        let mut env = TypeEnv::new();
        env.register_builtins();
        env
    }

    /// A new empty scope with this environment as its parent.
    pub fn child(&self) -> TypeEnv {
        TypeEnv {
            bindings: HashMap::new(),
            non_generic: Vec::new(),
            parent: Some(Box::new(self.clone())),
        }
    }

    /// Bind `name` to a type scheme in this scope.
    pub fn define(&mut self, name: impl Into<String>, scheme: Type) {
        self.bindings.insert(name.into(), scheme);
    }

    /// Look up a name in this scope or any enclosing one.
    pub fn lookup(&self, name: &str) -> Option<&Type> {
        self.bindings
            .get(name)
            .or_else(|| self.parent.as_ref().and_then(|parent| parent.lookup(name)))
    }

    /// Whether this scope itself binds `name`, ignoring enclosing scopes.
    pub(crate) fn binds_locally(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Record a variable as non-generic in this scope.
    pub fn mark_non_generic(&mut self, var: &Type) {
        self.non_generic.push(var.clone());
    }

    /// Whether a variable may be copied on instantiation.
    ///
    /// A variable is generic unless it occurs in a term marked non-generic
    /// in this scope or any enclosing one.
    pub fn is_generic(&self, var: &Type) -> bool {
        let mut scope = Some(self);
        while let Some(current) = scope {
            if current.non_generic.iter().any(|term| occurs_in(var, term)) {
                return false;
            }
            scope = current.parent.as_deref();
        }
        true
    }

    /// Copy a scheme for one use, freshening its generic variables.
    pub fn instantiate(&self, scheme: &Type) -> Type {
        fresh(scheme, &self.non_generic_terms())
    }

    fn non_generic_terms(&self) -> Vec<Type> {
        let mut terms = Vec::new();
        let mut scope = Some(self);
        while let Some(current) = scope {
            terms.extend(current.non_generic.iter().cloned());
            scope = current.parent.as_deref();
        }
        terms
    }

    /// Install the built-in operations.
    pub fn register_builtins(&mut self) {
        // Arithmetic on int
        self.define("succ", Type::fun(Type::int(), Type::int()));
        self.define("pred", Type::fun(Type::int(), Type::int()));
        self.define(
            "times",
            Type::fun(Type::int(), Type::fun(Type::int(), Type::int())),
        );
        self.define("zero", Type::fun(Type::int(), Type::bool()));

        // Pairing, polymorphic in both components
        let first = Type::var();
        let second = Type::var();
        self.define(
            "pair",
            Type::fun(
                first.clone(),
                Type::fun(second.clone(), Type::tuple(vec![first, second])),
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TypeView;

    #[test]
    fn test_define_and_lookup() {
        let mut env = TypeEnv::new();
        env.define("x", Type::int());
        assert_eq!(env.lookup("x").map(|t| t.to_string()), Some("int".into()));
        assert!(env.lookup("y").is_none());
    }

    #[test]
    fn test_child_scope_inherits() {
        let mut env = TypeEnv::new();
        env.define("x", Type::int());
        let child = env.child();
        assert!(child.lookup("x").is_some());
    }

    #[test]
    fn test_child_scope_shadows_without_leaking() {
        let mut env = TypeEnv::new();
        env.define("x", Type::int());
        let mut child = env.child();
        child.define("x", Type::bool());

        assert_eq!(child.lookup("x").map(|t| t.to_string()), Some("bool".into()));
        assert_eq!(env.lookup("x").map(|t| t.to_string()), Some("int".into()));
    }

    #[test]
    fn test_non_generic_marks_seen_through_chain() {
        let env = TypeEnv::new();
        let v = Type::var();

        let mut inner = env.child();
        inner.mark_non_generic(&v);
        assert!(!inner.is_generic(&v));
        assert!(!inner.child().is_generic(&v));

        // A sibling scope never saw the mark.
        assert!(env.child().is_generic(&v));
    }

    #[test]
    fn test_instantiate_copies_generic_scheme_per_use() {
        let env = TypeEnv::new();
        let v = Type::var();
        let scheme = Type::fun(v.clone(), v.clone());

        let first = env.instantiate(&scheme);
        let second = env.instantiate(&scheme);
        match (first.view(), second.view()) {
            (TypeView::Fun(d1, c1), TypeView::Fun(d2, _)) => {
                assert!(!d1.same_cell(&v));
                assert!(d1.same_cell(&c1));
                assert!(!d1.same_cell(&d2));
            }
            other => panic!("Expected two function types, got {:?}", other),
        }
    }

    #[test]
    fn test_instantiate_shares_non_generic_vars() {
        let mut env = TypeEnv::new();
        let v = Type::var();
        env.mark_non_generic(&v);

        let instance = env.instantiate(&Type::fun(v.clone(), v.clone()));
        match instance.view() {
            TypeView::Fun(domain, _) => assert!(domain.same_cell(&v)),
            other => panic!("Expected a function type, got {:?}", other),
        }
    }

    #[test]
    fn test_builtins_registered() {
        let env = TypeEnv::with_builtins();
        assert_eq!(
            env.lookup("times").map(|t| t.to_string()),
            Some("int → int → int".into())
        );
        assert_eq!(
            env.lookup("zero").map(|t| t.to_string()),
            Some("int → bool".into())
        );
        assert_eq!(
            env.lookup("pair").map(|t| t.to_string()),
            Some("α → β → (α × β)".into())
        );
    }
}
