//! Inference failures.

use thiserror::Error;

use crate::render::Namer;
use crate::types::Type;

/// An error produced during type inference.
///
/// Mismatch and recursion errors carry the offending type terms themselves;
/// their messages render both terms through one shared [`Namer`], so a
/// variable that appears on both sides keeps one name.
#[derive(Error, Debug, Clone)]
pub enum TypeError {
    #[error("undefined symbol: {name}")]
    UndefinedSymbol { name: String },

    #[error("{}", mismatch_message(.expected, .found))]
    TypeMismatch { expected: Type, found: Type },

    #[error("{}", recursive_message(.var, .term))]
    RecursiveUnification { var: Type, term: Type },

    #[error("invalid binding target: {pattern}")]
    InvalidBindingTarget { pattern: String },
}

impl TypeError {
    pub fn undefined(name: impl Into<String>) -> TypeError {
        TypeError::UndefinedSymbol { name: name.into() }
    }

    pub fn mismatch(expected: &Type, found: &Type) -> TypeError {
        TypeError::TypeMismatch {
            expected: expected.clone(),
            found: found.clone(),
        }
    }

    pub fn recursive(var: &Type, term: &Type) -> TypeError {
        TypeError::RecursiveUnification {
            var: var.clone(),
            term: term.clone(),
        }
    }

    pub fn invalid_binding(pattern: impl Into<String>) -> TypeError {
        TypeError::InvalidBindingTarget {
            pattern: pattern.into(),
        }
    }
}

fn mismatch_message(expected: &Type, found: &Type) -> String {
    let mut namer = Namer::new();
    format!(
        "type mismatch: expected {}, found {}",
        namer.format(expected),
        namer.format(found)
    )
}

fn recursive_message(var: &Type, term: &Type) -> String {
    let mut namer = Namer::new();
    format!(
        "recursive unification: {} occurs in {}",
        namer.format(var),
        namer.format(term)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undefined_message() {
        let error = TypeError::undefined("pear");
        assert_eq!(error.to_string(), "undefined symbol: pear");
    }

    #[test]
    fn test_mismatch_message_shares_variable_names() {
        let v = Type::var();
        let error = TypeError::mismatch(&v, &Type::fun(v.clone(), Type::int()));
        assert_eq!(
            error.to_string(),
            "type mismatch: expected α, found α → int"
        );
    }

    #[test]
    fn test_recursive_message() {
        let v = Type::var();
        let error = TypeError::recursive(&v, &Type::fun(v.clone(), Type::int()));
        assert_eq!(
            error.to_string(),
            "recursive unification: α occurs in α → int"
        );
    }

    #[test]
    fn test_invalid_binding_message() {
        let error = TypeError::invalid_binding("5");
        assert_eq!(error.to_string(), "invalid binding target: 5");
    }
}
