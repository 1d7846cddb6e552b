//! Expression tree definitions for sextant.

use std::fmt;

/// An expression.
///
/// Binding forms (`Let`, `Letrec`, `Func`) carry their binding pattern as an
/// ordinary sub-expression: a bare `Name`, an `Assign` pairing a pattern with
/// a value, or a `Prod`/`Sum` grouping several of those.
#[derive(Debug, Clone)]
pub enum Expr {
    // Literals
    Name(String),
    Bool(bool),
    Int(i64),

    // Functions
    Func(Box<Expr>, Box<Expr>),
    Apply(Box<Expr>, Box<Expr>),

    // Structured values
    Prod(Box<Expr>, Box<Expr>),
    Sum(Box<Expr>, Box<Expr>),
    Case(Box<Expr>, Box<Expr>),

    // Bindings
    Assign(Box<Expr>, Box<Expr>),
    Let(Box<Expr>, Box<Expr>),
    Letrec(Box<Expr>, Box<Expr>),

    // Control
    Cond(Box<Expr>, Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Expr {
        Expr::Name(name.into())
    }

    pub fn bool(value: bool) -> Expr {
        Expr::Bool(value)
    }

    pub fn int(value: i64) -> Expr {
        Expr::Int(value)
    }

    /// A function with an arbitrary binding pattern as its parameter.
    pub fn func(param: Expr, body: Expr) -> Expr {
        Expr::Func(Box::new(param), Box::new(body))
    }

    /// A function over a single named parameter.
    pub fn lambda(param: impl Into<String>, body: Expr) -> Expr {
        Expr::func(Expr::name(param), body)
    }

    pub fn apply(function: Expr, argument: Expr) -> Expr {
        Expr::Apply(Box::new(function), Box::new(argument))
    }

    pub fn prod(left: Expr, right: Expr) -> Expr {
        Expr::Prod(Box::new(left), Box::new(right))
    }

    pub fn sum(left: Expr, right: Expr) -> Expr {
        Expr::Sum(Box::new(left), Box::new(right))
    }

    /// A two-armed handler over the alternatives of a sum.
    pub fn case(left: Expr, right: Expr) -> Expr {
        Expr::Case(Box::new(left), Box::new(right))
    }

    pub fn assign(pattern: Expr, value: Expr) -> Expr {
        Expr::Assign(Box::new(pattern), Box::new(value))
    }

    /// An `Assign` whose pattern is a single name.
    pub fn binding(name: impl Into<String>, value: Expr) -> Expr {
        Expr::assign(Expr::name(name), value)
    }

    pub fn cond(condition: Expr, then: Expr, otherwise: Expr) -> Expr {
        Expr::Cond(Box::new(condition), Box::new(then), Box::new(otherwise))
    }

    pub fn let_in(binding: Expr, body: Expr) -> Expr {
        Expr::Let(Box::new(binding), Box::new(body))
    }

    pub fn letrec_in(binding: Expr, body: Expr) -> Expr {
        Expr::Letrec(Box::new(binding), Box::new(body))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Name(name) => write!(f, "{}", name),
            Expr::Bool(value) => write!(f, "{}", value),
            Expr::Int(value) => write!(f, "{}", value),
            Expr::Func(param, body) => write!(f, "(fun {} {})", param, body),
            Expr::Apply(function, argument) => write!(f, "({} {})", function, argument),
            Expr::Prod(left, right) => write!(f, "({}, {})", left, right),
            Expr::Sum(left, right) => write!(f, "({} + {})", left, right),
            Expr::Case(left, right) => write!(f, "(case {} {})", left, right),
            Expr::Assign(pattern, value) => write!(f, "{} = {}", pattern, value),
            Expr::Let(binding, body) => write!(f, "(let {} in {})", binding, body),
            Expr::Letrec(binding, body) => write!(f, "(letrec {} in {})", binding, body),
            Expr::Cond(condition, then, otherwise) => {
                write!(f, "(if {} then {} else {})", condition, then, otherwise)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lambda_and_application() {
        let expr = Expr::apply(Expr::lambda("x", Expr::name("x")), Expr::int(5));
        assert_eq!(expr.to_string(), "((fun x x) 5)");
    }

    #[test]
    fn renders_let_binding() {
        let expr = Expr::let_in(
            Expr::binding("flag", Expr::bool(true)),
            Expr::name("flag"),
        );
        assert_eq!(expr.to_string(), "(let flag = true in flag)");
    }

    #[test]
    fn renders_structured_values() {
        let pair = Expr::prod(Expr::int(1), Expr::bool(false));
        assert_eq!(pair.to_string(), "(1, false)");

        let alt = Expr::sum(Expr::int(1), Expr::bool(false));
        assert_eq!(alt.to_string(), "(1 + false)");

        let handler = Expr::case(Expr::name("f"), Expr::name("g"));
        assert_eq!(handler.to_string(), "(case f g)");
    }

    #[test]
    fn renders_cond() {
        let expr = Expr::cond(Expr::name("p"), Expr::int(1), Expr::int(0));
        assert_eq!(expr.to_string(), "(if p then 1 else 0)");
    }
}
