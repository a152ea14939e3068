// src/calculator.rs
//! Name-keyed dispatch over a set of registered operations.

use std::collections::HashMap;
use std::fmt;

use crate::arithmetic::{Addition, Division, Multiplication, Subtraction};
use crate::element::{Element, RealElement};
use crate::error::{Error, Result};
use crate::operation::Operation;
use crate::trig::{Cosine, Sine, Tangent};

/// Immutable registry mapping operation names to implementations.
///
/// Built once from a collection of operations and never mutated afterwards;
/// a later registration of an already-used name replaces the earlier one.
/// Lookups take `&self` only, so a `Calculator` behind a shared reference
/// can serve concurrent callers.
pub struct Calculator<T: Element> {
    operations: HashMap<String, Box<dyn Operation<T>>>,
}

impl<T: Element> Calculator<T> {
    /// Build a registry from `operations`. Construction is total: an empty
    /// collection and duplicate names are both accepted, the last operation
    /// registered under a name wins.
    pub fn new<I>(operations: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn Operation<T>>>,
    {
        let operations = operations
            .into_iter()
            .map(|op| (op.name().to_string(), op))
            .collect();
        Self { operations }
    }

    /// Registry with the four binary arithmetic operations.
    pub fn arithmetic() -> Self {
        Self::new(vec![
            Box::new(Addition) as Box<dyn Operation<T>>,
            Box::new(Subtraction),
            Box::new(Multiplication),
            Box::new(Division),
        ])
    }

    /// Look up `name` and run the matching operation on `operands`.
    ///
    /// A blank name is rejected up front; an unknown name reports every
    /// registered name to aid diagnosis. Errors raised by the operation
    /// itself (a zero divisor, a wrong operand count) propagate unchanged.
    pub fn calculate(&self, name: &str, operands: &[T]) -> Result<T> {
        if name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "operation name cannot be empty".to_string(),
            ));
        }

        let op = self
            .operations
            .get(name)
            .ok_or_else(|| Error::UnsupportedOperation {
                name: name.to_string(),
                supported: self.supported_operations().join(", "),
            })?;

        op.execute(operands)
    }

    /// Every registered name, in lexicographic order (not insertion order).
    pub fn supported_operations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<T: RealElement> Calculator<T> {
    /// Registry with arithmetic plus the trigonometric operations.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(Addition) as Box<dyn Operation<T>>,
            Box::new(Subtraction),
            Box::new(Multiplication),
            Box::new(Division),
            Box::new(Sine),
            Box::new(Cosine),
            Box::new(Tangent),
        ])
    }
}

impl<T: RealElement> Default for Calculator<T> {
    fn default() -> Self {
        Self::standard()
    }
}

impl<T: Element> fmt::Debug for Calculator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Calculator")
            .field("operations", &self.supported_operations())
            .finish()
    }
}
