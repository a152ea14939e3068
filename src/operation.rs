// src/operation.rs
//! The [`Operation`] trait and operand-arity helpers.

use crate::element::Element;
use crate::error::{Error, Result};

/// A named, stateless computation over a fixed number of operands.
///
/// Implementations are unit values constructed once and reused for every
/// call; `Send + Sync` so a registry of boxed operations can be shared
/// across threads.
pub trait Operation<T: Element>: Send + Sync {
    /// Unique registry tag, e.g. `"Add"` or `"Cos"`.
    fn name(&self) -> &'static str;

    /// Run the operation on `operands`.
    fn execute(&self, operands: &[T]) -> Result<T>;
}

/// Split a two-operand list, rejecting any other arity.
pub(crate) fn binary<T: Element>(name: &str, operands: &[T]) -> Result<(T, T)> {
    match *operands {
        [a, b] => Ok((a, b)),
        _ => Err(Error::InvalidArgument(format!(
            "{name} expects exactly 2 operands, got {}",
            operands.len()
        ))),
    }
}

/// Extract the single operand of a unary operation.
pub(crate) fn unary<T: Element>(name: &str, operands: &[T]) -> Result<T> {
    match *operands {
        [x] => Ok(x),
        _ => Err(Error::InvalidArgument(format!(
            "{name} expects exactly 1 operand, got {}",
            operands.len()
        ))),
    }
}
