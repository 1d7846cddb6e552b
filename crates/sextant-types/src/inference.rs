//! Type inference over expression trees.

use sextant_ast::Expr;

use crate::env::TypeEnv;
use crate::error::TypeError;
use crate::types::Type;
use crate::unify::unify;

/// Infer the type of `expr` in `env`.
///
/// The environment is borrowed and never modified; binding forms work in
/// child scopes, so an outer environment can be reused across calls.
pub fn infer(expr: &Expr, env: &TypeEnv) -> Result<Type, TypeError> {
    match expr {
        // Literals
        Expr::Name(name) => {
            let scheme = env
                .lookup(name)
                .ok_or_else(|| TypeError::undefined(name.clone()))?;
            Ok(env.instantiate(scheme))
        }
        Expr::Bool(_) => Ok(Type::bool()),
        Expr::Int(_) => Ok(Type::int()),

        // Functions
        Expr::Func(param, body) => {
            let mut scope = env.child();
            let introduced = declare_pattern(param, &mut scope)?;
            // Parameters stay monomorphic for the whole body.
            for var in &introduced {
                scope.mark_non_generic(var);
            }
            let domain = pattern_type(param, &scope)?;
            let codomain = infer(body, &scope)?;
            Ok(Type::fun(domain, codomain))
        }
        Expr::Apply(function, argument) => {
            let function_type = infer(function, env)?;
            let argument_type = infer(argument, env)?;
            let result = Type::var();
            unify(&function_type, &Type::fun(argument_type, result.clone()))?;
            Ok(result)
        }

        // Structured values
        Expr::Prod(left, right) => {
            Ok(Type::tuple(vec![infer(left, env)?, infer(right, env)?]))
        }
        Expr::Sum(left, right) => Ok(Type::sum(infer(left, env)?, infer(right, env)?)),
        Expr::Case(left, right) => {
            let left_type = infer(left, env)?;
            let right_type = infer(right, env)?;
            unify(&left_type, &right_type)?;
            Ok(left_type)
        }

        // Bindings
        Expr::Assign(pattern, _) => Err(TypeError::invalid_binding(pattern.to_string())),
        Expr::Let(binding, body) => {
            let scope = bind_group(binding, env, false)?;
            infer(body, &scope)
        }
        Expr::Letrec(binding, body) => {
            let scope = bind_group(binding, env, true)?;
            infer(body, &scope)
        }

        // Control
        Expr::Cond(condition, then, otherwise) => {
            let condition_type = infer(condition, env)?;
            unify(&condition_type, &Type::bool())?;
            let then_type = infer(then, env)?;
            let otherwise_type = infer(otherwise, env)?;
            unify(&then_type, &otherwise_type)?;
            Ok(then_type)
        }
    }
}

/// Check a binding group and produce the scope its body sees.
///
/// Checking runs in two phases. Declaration walks the group's patterns and
/// gives every name a fresh variable in a new scope. Binding then unifies
/// each value's type against its pattern's declared type: for a recursive
/// group the values are checked inside that scope with the declared
/// variables marked non-generic, otherwise they are checked in the outer
/// environment. The returned body scope carries no such marks, so the
/// bound names generalize.
fn bind_group(binding: &Expr, env: &TypeEnv, recursive: bool) -> Result<TypeEnv, TypeError> {
    let mut scope = env.child();
    let introduced = declare_pattern(binding, &mut scope)?;

    let mut value_scope = scope.child();
    for var in &introduced {
        value_scope.mark_non_generic(var);
    }

    if recursive {
        bind_values(binding, &value_scope, &value_scope)?;
    } else {
        bind_values(binding, env, &value_scope)?;
    }

    Ok(scope)
}

/// Introduce a fresh variable for every name in a binding pattern,
/// returning the variables introduced.
///
/// A name this scope already declares keeps its variable, so a group that
/// mentions one name twice constrains a single variable.
fn declare_pattern(pattern: &Expr, scope: &mut TypeEnv) -> Result<Vec<Type>, TypeError> {
    let mut introduced = Vec::new();
    declare_names(pattern, scope, &mut introduced)?;
    Ok(introduced)
}

fn declare_names(
    pattern: &Expr,
    scope: &mut TypeEnv,
    introduced: &mut Vec<Type>,
) -> Result<(), TypeError> {
    match pattern {
        Expr::Name(name) => {
            if !scope.binds_locally(name) {
                let var = Type::var();
                scope.define(name.clone(), var.clone());
                introduced.push(var);
            }
            Ok(())
        }
        Expr::Prod(left, right) | Expr::Sum(left, right) => {
            declare_names(left, scope, introduced)?;
            declare_names(right, scope, introduced)
        }
        Expr::Assign(target, _) => declare_names(target, scope, introduced),
        other => Err(TypeError::invalid_binding(other.to_string())),
    }
}

/// The type a binding pattern declares, assembled from the scope.
fn pattern_type(pattern: &Expr, scope: &TypeEnv) -> Result<Type, TypeError> {
    match pattern {
        Expr::Name(name) => scope
            .lookup(name)
            .cloned()
            .ok_or_else(|| TypeError::undefined(name.clone())),
        Expr::Prod(left, right) => Ok(Type::tuple(vec![
            pattern_type(left, scope)?,
            pattern_type(right, scope)?,
        ])),
        Expr::Sum(left, right) => Ok(Type::sum(
            pattern_type(left, scope)?,
            pattern_type(right, scope)?,
        )),
        Expr::Assign(target, _) => pattern_type(target, scope),
        other => Err(TypeError::invalid_binding(other.to_string())),
    }
}

/// Unify each bound value's type against its pattern's declared type.
fn bind_values(binding: &Expr, value_env: &TypeEnv, scope: &TypeEnv) -> Result<(), TypeError> {
    match binding {
        Expr::Assign(target, value) => {
            let declared = pattern_type(target, scope)?;
            let actual = infer(value, value_env)?;
            unify(&actual, &declared)
        }
        // A product groups simultaneous bindings.
        Expr::Prod(left, right) => {
            bind_values(left, value_env, scope)?;
            bind_values(right, value_env, scope)
        }
        // A bare name declares without constraining.
        Expr::Name(_) => Ok(()),
        other => Err(TypeError::invalid_binding(other.to_string())),
    }
}
