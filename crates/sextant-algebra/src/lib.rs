//! Algebraic normalization of arithmetic terms.
//!
//! A self-contained rewriting layer over sum/product terms: identity
//! elimination, distribution of products over sums, and a canonical
//! left-leaning, sorted chain shape. Type inference never calls into it.

pub mod normalize;
pub mod term;

pub use normalize::normalize;
pub use term::{OpKind, Term};
