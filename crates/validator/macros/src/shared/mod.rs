//! Helpers shared by the derive implementations.

pub(crate) mod validation;
