//! Arithmetic term definitions.

use std::fmt;

/// An arithmetic term over integer literals and free names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    Int(i64),
    Name(String),
    Add(Box<Term>, Box<Term>),
    Mul(Box<Term>, Box<Term>),
}

/// The binary operators of a term tree.
///
/// Both operators are associative and commutative; multiplication
/// additionally distributes over addition. The normalizer relies on all
/// three properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Add,
    Mul,
}

impl Term {
    pub fn int(value: i64) -> Term {
        Term::Int(value)
    }

    pub fn name(name: impl Into<String>) -> Term {
        Term::Name(name.into())
    }

    pub fn add(x: Term, y: Term) -> Term {
        Term::Add(Box::new(x), Box::new(y))
    }

    pub fn mul(x: Term, y: Term) -> Term {
        Term::Mul(Box::new(x), Box::new(y))
    }

    /// The operator at this node, if it is a binary node.
    pub fn op(&self) -> Option<OpKind> {
        match self {
            Term::Add(_, _) => Some(OpKind::Add),
            Term::Mul(_, _) => Some(OpKind::Mul),
            _ => None,
        }
    }

    /// Take a binary node apart, or get the leaf back.
    pub(crate) fn into_parts(self) -> Result<(OpKind, Term, Term), Term> {
        match self {
            Term::Add(x, y) => Ok((OpKind::Add, *x, *y)),
            Term::Mul(x, y) => Ok((OpKind::Mul, *x, *y)),
            leaf => Err(leaf),
        }
    }
}

impl OpKind {
    /// The operator's identity element.
    pub fn identity(self) -> Term {
        match self {
            OpKind::Add => Term::Int(0),
            OpKind::Mul => Term::Int(1),
        }
    }

    /// Build a node of this operator.
    pub fn node(self, x: Term, y: Term) -> Term {
        match self {
            OpKind::Add => Term::add(x, y),
            OpKind::Mul => Term::mul(x, y),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Int(value) => write!(f, "{}", value),
            Term::Name(name) => write!(f, "{}", name),
            Term::Add(x, y) => write!(f, "({} + {})", x, y),
            Term::Mul(x, y) => write!(f, "({} × {})", x, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_terms() {
        let term = Term::add(
            Term::mul(Term::name("x"), Term::int(2)),
            Term::name("y"),
        );
        assert_eq!(term.to_string(), "((x × 2) + y)");
    }

    #[test]
    fn op_distinguishes_nodes_from_leaves() {
        assert_eq!(Term::add(Term::int(1), Term::int(2)).op(), Some(OpKind::Add));
        assert_eq!(Term::mul(Term::int(1), Term::int(2)).op(), Some(OpKind::Mul));
        assert_eq!(Term::name("x").op(), None);
    }
}
