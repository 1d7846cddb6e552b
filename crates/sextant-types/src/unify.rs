//! Unification of type terms.

use crate::error::TypeError;
use crate::types::{occurs_in, SumParts, Type, TypeKind};

/// Make two type terms equal, binding variables as needed.
///
/// Mutations happen in place through the terms' cells. On failure some
/// bindings may already have been made; inference treats any failure as
/// fatal, so partial progress is never observed.
///
/// In a reported mismatch the right operand is the expected type and the
/// left the found one, so call sites pass the required type second.
pub fn unify(a: &Type, b: &Type) -> Result<(), TypeError> {
    let a = a.prune();
    let b = b.prune();

    if a.same_cell(&b) {
        return Ok(());
    }

    match (a.kind(), b.kind()) {
        (TypeKind::Var(instance), _) => {
            if occurs_in(&a, &b) {
                return Err(TypeError::recursive(&a, &b));
            }
            *instance.borrow_mut() = Some(b.clone());
            Ok(())
        }
        // A variable on the right binds the same way; flip once. This also
        // means a variable meeting a sum binds to the sum term itself,
        // leaving resolution for when the sum meets a concrete term.
        (_, TypeKind::Var(_)) => unify(&b, &a),
        (TypeKind::Sum(parts), _) => {
            if resolve_sum(parts, &b) {
                Ok(())
            } else {
                Err(TypeError::mismatch(&b, &a))
            }
        }
        (_, TypeKind::Sum(parts)) => {
            if resolve_sum(parts, &a) {
                Ok(())
            } else {
                Err(TypeError::mismatch(&b, &a))
            }
        }
        (TypeKind::Con(x), TypeKind::Con(y)) if x == y => Ok(()),
        (TypeKind::Fun(a_dom, a_cod), TypeKind::Fun(b_dom, b_cod)) => {
            unify(a_dom, b_dom)?;
            unify(a_cod, b_cod)
        }
        (TypeKind::Tuple(a_items), TypeKind::Tuple(b_items))
            if a_items.len() == b_items.len() =>
        {
            for (a_item, b_item) in a_items.iter().zip(b_items) {
                unify(a_item, b_item)?;
            }
            Ok(())
        }
        _ => Err(TypeError::mismatch(&b, &a)),
    }
}

/// Try to commit an unresolved sum to whichever alternative unifies with
/// `other`.
///
/// Alternatives are tried left first, then right. A failed left attempt may
/// leave bindings behind; there is no rollback. Once an alternative
/// succeeds it is recorded in the resolution cell and the sum behaves as
/// that alternative from then on.
fn resolve_sum(parts: &SumParts, other: &Type) -> bool {
    if unify(&parts.left, other).is_ok() {
        *parts.resolved.borrow_mut() = Some(parts.left.clone());
        return true;
    }
    if unify(&parts.right, other).is_ok() {
        *parts.resolved.borrow_mut() = Some(parts.right.clone());
        return true;
    }
    false
}
