//! Hindley-Milner type inference for sextant expression trees.
//!
//! The engine lives in four pieces: mutable type terms ([`types`]),
//! unification over them ([`unify`]), scoped environments with
//! generalization ([`env`]), and the inference driver itself
//! ([`inference`]). [`render`] turns terms into deterministic text for
//! diagnostics.

pub mod env;
pub mod error;
pub mod inference;
pub mod render;
pub mod types;
pub mod unify;

pub use env::TypeEnv;
pub use error::TypeError;
pub use inference::infer;
pub use render::{NameSource, Namer};
pub use types::{fresh, occurs_in, Type, TypeView};
pub use unify::unify;
