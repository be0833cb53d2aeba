//! Combinators that build new constraint kinds out of existing ones.

pub(crate) mod not;

pub use not::{Not, not};
