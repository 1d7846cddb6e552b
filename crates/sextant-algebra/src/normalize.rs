//! Normalization of arithmetic terms.

use crate::term::{OpKind, Term};

/// Normalize a term.
///
/// At each node, operands equal to the operator's identity are dropped,
/// products are distributed over sums, and after the children are
/// normalized the node's chain is rotated left-leaning and its operands put
/// in canonical order. Operands are ordered by their rendered text, so the
/// order matches what the chain prints as.
pub fn normalize(term: Term) -> Term {
    let (op, x, y) = match term.into_parts() {
        Ok(parts) => parts,
        Err(leaf) => return leaf,
    };

    // x + 0 => x, x * 1 => x
    let identity = op.identity();
    if x == identity || y == identity {
        let kept = if y == identity { x } else { y };
        return normalize(kept);
    }

    let (op, x, y) = match distribute(op.node(x, y)).into_parts() {
        Ok(parts) => parts,
        Err(leaf) => return leaf,
    };

    let rebuilt = op.node(normalize(x), normalize(y));
    sort_operands(rotate_left(rebuilt))
}

/// Expand distributivity at the root; deeper opportunities surface when
/// the new children are normalized.
fn distribute(term: Term) -> Term {
    // x * (a + b) => x*a + x*b
    let term = match term {
        Term::Mul(x, y) => match *y {
            Term::Add(a, b) => Term::Add(
                Box::new(Term::Mul(x.clone(), a)),
                Box::new(Term::Mul(x, b)),
            ),
            other => Term::Mul(x, Box::new(other)),
        },
        other => other,
    };
    // (a + b) * y => a*y + b*y
    match term {
        Term::Mul(x, y) => match *x {
            Term::Add(a, b) => Term::Add(
                Box::new(Term::Mul(a, y.clone())),
                Box::new(Term::Mul(b, y)),
            ),
            other => Term::Mul(Box::new(other), y),
        },
        other => other,
    }
}

/// Rotate an associative chain left-leaning: a + (b + c) => (a + b) + c.
fn rotate_left(term: Term) -> Term {
    match term {
        Term::Add(x, y) => match *y {
            Term::Add(y_left, y_right) => {
                let left = rotate_left(Term::Add(x, y_left));
                rotate_left(Term::Add(Box::new(left), y_right))
            }
            other => Term::Add(x, Box::new(other)),
        },
        Term::Mul(x, y) => match *y {
            Term::Mul(y_left, y_right) => {
                let left = rotate_left(Term::Mul(x, y_left));
                rotate_left(Term::Mul(Box::new(left), y_right))
            }
            other => Term::Mul(x, Box::new(other)),
        },
        leaf => leaf,
    }
}

/// Put the operands of a commutative chain in canonical order.
fn sort_operands(term: Term) -> Term {
    let op = match term.op() {
        Some(op) => op,
        None => return term,
    };
    let mut operands = Vec::new();
    collect_operands(term, op, &mut operands);
    operands.sort_by_cached_key(|operand| operand.to_string());
    rebuild_chain(op, operands)
}

/// Flatten a chain of `op` nodes into its operand sequence, left to right.
/// Nodes of the other operator stay whole.
fn collect_operands(term: Term, op: OpKind, out: &mut Vec<Term>) {
    if term.op() != Some(op) {
        out.push(term);
        return;
    }
    match term.into_parts() {
        Ok((_, x, y)) => {
            collect_operands(x, op, out);
            collect_operands(y, op, out);
        }
        Err(leaf) => out.push(leaf),
    }
}

/// Rebuild a left-leaning chain from an operand sequence.
fn rebuild_chain(op: OpKind, operands: Vec<Term>) -> Term {
    let mut operands = operands.into_iter();
    let first = match operands.next() {
        Some(first) => first,
        None => return op.identity(),
    };
    operands.fold(first, |chain, operand| op.node(chain, operand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_pass_through() {
        assert_eq!(normalize(Term::int(5)), Term::int(5));
        assert_eq!(normalize(Term::name("x")), Term::name("x"));
    }

    #[test]
    fn identity_operands_are_dropped() {
        // x + 0 => x
        let term = Term::add(Term::name("x"), Term::int(0));
        assert_eq!(normalize(term), Term::name("x"));

        // (x * 1) + 0 => x
        let term = Term::add(Term::mul(Term::name("x"), Term::int(1)), Term::int(0));
        assert_eq!(normalize(term), Term::name("x"));
    }

    #[test]
    fn commutative_operands_are_reordered() {
        // b * a => a * b
        let term = Term::mul(Term::name("b"), Term::name("a"));
        assert_eq!(normalize(term), Term::mul(Term::name("a"), Term::name("b")));

        // z + 2 => 2 + z
        let term = Term::add(Term::name("z"), Term::int(2));
        assert_eq!(normalize(term), Term::add(Term::int(2), Term::name("z")));
    }

    #[test]
    fn chains_rotate_left_leaning() {
        // a + (b + (c + d)) => ((a + b) + c) + d
        let term = Term::add(
            Term::name("a"),
            Term::add(Term::name("b"), Term::add(Term::name("c"), Term::name("d"))),
        );
        let expected = Term::add(
            Term::add(Term::add(Term::name("a"), Term::name("b")), Term::name("c")),
            Term::name("d"),
        );
        assert_eq!(normalize(term), expected);
    }

    #[test]
    fn products_distribute_over_sums() {
        // x * (a + b) => (a * x) + (b * x), operand order included
        let term = Term::mul(
            Term::name("x"),
            Term::add(Term::name("a"), Term::name("b")),
        );
        let expected = Term::add(
            Term::mul(Term::name("a"), Term::name("x")),
            Term::mul(Term::name("b"), Term::name("x")),
        );
        assert_eq!(normalize(term), expected);
    }

    #[test]
    fn distribution_reaches_a_fixed_point() {
        // (a + b) * (c + d) expands to four products.
        let term = Term::mul(
            Term::add(Term::name("a"), Term::name("b")),
            Term::add(Term::name("c"), Term::name("d")),
        );
        let expected = Term::add(
            Term::add(
                Term::add(
                    Term::mul(Term::name("a"), Term::name("c")),
                    Term::mul(Term::name("a"), Term::name("d")),
                ),
                Term::mul(Term::name("b"), Term::name("c")),
            ),
            Term::mul(Term::name("b"), Term::name("d")),
        );
        assert_eq!(normalize(term), expected);
    }

    #[test]
    fn sample_expression_normalizes() {
        // ((1 * (x * z)) * y) => (x * y) * z
        let term = Term::mul(
            Term::mul(Term::int(1), Term::mul(Term::name("x"), Term::name("z"))),
            Term::name("y"),
        );
        let expected = Term::mul(
            Term::mul(Term::name("x"), Term::name("y")),
            Term::name("z"),
        );
        assert_eq!(normalize(term), expected);
    }
}
