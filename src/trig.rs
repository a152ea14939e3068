// src/trig.rs
//! Unary trigonometric operations: `sin`, `Cos`, `Tan`.
//!
//! Arguments are angles in radians. Results follow the host float's
//! semantics: an infinite or NaN argument yields NaN.

use crate::element::RealElement;
use crate::error::Result;
use crate::operation::{unary, Operation};

/// Sine, registered as `"sin"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sine;

impl Sine {
    /// Sine of an angle in radians.
    #[inline(always)]
    pub fn apply<T: RealElement>(&self, x: T) -> T {
        x.sin()
    }
}

impl<T: RealElement> Operation<T> for Sine {
    fn name(&self) -> &'static str {
        "sin"
    }

    fn execute(&self, operands: &[T]) -> Result<T> {
        Ok(self.apply(unary(Operation::<T>::name(self), operands)?))
    }
}

/// Cosine, registered as `"Cos"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Cosine;

impl Cosine {
    /// Cosine of an angle in radians.
    #[inline(always)]
    pub fn apply<T: RealElement>(&self, x: T) -> T {
        x.cos()
    }
}

impl<T: RealElement> Operation<T> for Cosine {
    fn name(&self) -> &'static str {
        "Cos"
    }

    fn execute(&self, operands: &[T]) -> Result<T> {
        Ok(self.apply(unary(Operation::<T>::name(self), operands)?))
    }
}

/// Tangent, registered as `"Tan"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Tangent;

impl Tangent {
    /// Tangent of an angle in radians.
    #[inline(always)]
    pub fn apply<T: RealElement>(&self, x: T) -> T {
        x.tan()
    }
}

impl<T: RealElement> Operation<T> for Tangent {
    fn name(&self) -> &'static str {
        "Tan"
    }

    fn execute(&self, operands: &[T]) -> Result<T> {
        Ok(self.apply(unary(Operation::<T>::name(self), operands)?))
    }
}
