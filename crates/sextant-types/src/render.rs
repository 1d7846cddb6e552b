//! Deterministic rendering of type terms.
//!
//! Variable names are assigned in first-appearance order from an explicit
//! [`NameSource`] owned by the caller's [`Namer`]; nothing is process-global,
//! so the same term always renders the same way through a fresh namer. To
//! render several terms with consistent variable names, reuse one namer
//! across them.

use std::collections::HashMap;
use std::fmt;

use crate::types::{Type, TypeKind};

const ALPHABET: [char; 24] = [
    'α', 'β', 'γ', 'δ', 'ε', 'ζ', 'η', 'θ', 'ι', 'κ', 'λ', 'μ', 'ν', 'ξ', 'ο', 'π', 'ρ', 'σ',
    'τ', 'υ', 'φ', 'χ', 'ψ', 'ω',
];

/// A counter over the variable-name stream: `α`, `β`, …, `ω`, `α1`, `β1`, …
#[derive(Debug, Clone, Default)]
pub struct NameSource {
    next: usize,
}

impl NameSource {
    pub fn new() -> NameSource {
        NameSource::default()
    }

    pub fn next_name(&mut self) -> String {
        let index = self.next;
        self.next += 1;
        let letter = ALPHABET[index % ALPHABET.len()];
        let round = index / ALPHABET.len();
        if round == 0 {
            letter.to_string()
        } else {
            format!("{}{}", letter, round)
        }
    }
}

/// Renders type terms, remembering which name each variable was given.
#[derive(Debug, Default)]
pub struct Namer {
    source: NameSource,
    names: HashMap<usize, String>,
}

impl Namer {
    pub fn new() -> Namer {
        Namer::default()
    }

    /// Render a term, naming any variables not seen by this namer before.
    pub fn format(&mut self, term: &Type) -> String {
        self.format_term(term, false)
    }

    fn format_term(&mut self, term: &Type, guard: bool) -> String {
        let term = term.prune();
        match term.kind() {
            TypeKind::Var(_) => self.name_of(&term),
            TypeKind::Con(name) => name.clone(),
            TypeKind::Fun(domain, codomain) => {
                let domain = self.format_term(domain, true);
                let codomain = self.format_term(codomain, false);
                if guard {
                    format!("({} → {})", domain, codomain)
                } else {
                    format!("{} → {}", domain, codomain)
                }
            }
            TypeKind::Tuple(items) => {
                let items: Vec<String> = items
                    .iter()
                    .map(|item| self.format_term(item, true))
                    .collect();
                format!("({})", items.join(" × "))
            }
            TypeKind::Sum(parts) => {
                let left = self.format_term(&parts.left, true);
                let right = self.format_term(&parts.right, true);
                format!("({} + {})", left, right)
            }
        }
    }

    fn name_of(&mut self, term: &Type) -> String {
        let id = term.cell_id();
        if let Some(existing) = self.names.get(&id) {
            return existing.clone();
        }
        let name = self.source.next_name();
        self.names.insert(id, name.clone());
        name
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut namer = Namer::new();
        write!(f, "{}", namer.format(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bind(var: &Type, to: &Type) {
        match var.kind() {
            TypeKind::Var(cell) => *cell.borrow_mut() = Some(to.clone()),
            _ => panic!("Expected a variable"),
        }
    }

    #[test]
    fn test_renders_function_arrow() {
        let v1 = Type::var();
        let v2 = Type::var();
        let ty = Type::fun(v1.clone(), Type::fun(v2, v1));
        assert_eq!(ty.to_string(), "α → β → α");
    }

    #[test]
    fn test_parenthesizes_function_domain() {
        let inner = Type::fun(Type::var(), Type::var());
        let ty = Type::fun(inner, Type::var());
        assert_eq!(ty.to_string(), "(α → β) → γ");
    }

    #[test]
    fn test_renders_tuple() {
        let ty = Type::tuple(vec![Type::int(), Type::bool()]);
        assert_eq!(ty.to_string(), "(int × bool)");
    }

    #[test]
    fn test_renders_sum() {
        let ty = Type::sum(Type::int(), Type::var());
        assert_eq!(ty.to_string(), "(int + α)");
    }

    #[test]
    fn test_resolved_sum_renders_alternative() {
        let ty = Type::sum(Type::int(), Type::bool());
        match ty.kind() {
            TypeKind::Sum(parts) => *parts.resolved.borrow_mut() = Some(Type::bool()),
            _ => panic!("Expected a sum"),
        }
        assert_eq!(ty.to_string(), "bool");
    }

    #[test]
    fn test_bound_variable_renders_instance() {
        let v = Type::var();
        bind(&v, &Type::int());
        assert_eq!(v.to_string(), "int");
    }

    #[test]
    fn test_namer_shared_across_terms() {
        let v1 = Type::var();
        let v2 = Type::var();
        let mut namer = Namer::new();
        assert_eq!(namer.format(&v1), "α");
        assert_eq!(namer.format(&Type::fun(v1, v2)), "α → β");
    }

    #[test]
    fn test_name_stream_wraps_with_round_suffix() {
        let mut source = NameSource::new();
        let names: Vec<String> = (0..25).map(|_| source.next_name()).collect();
        assert_eq!(names[0], "α");
        assert_eq!(names[1], "β");
        assert_eq!(names[23], "ω");
        assert_eq!(names[24], "α1");
    }
}
