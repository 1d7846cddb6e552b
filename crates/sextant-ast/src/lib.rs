//! Expression trees for the sextant language.
//!
//! The tree is deliberately small: literals, functions, pair-like structured
//! values, binding forms, and a conditional. Inference over these trees
//! lives in `sextant-types`.

pub mod expr;

pub use expr::Expr;
