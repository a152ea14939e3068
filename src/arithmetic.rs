// src/arithmetic.rs
//! The four binary arithmetic operations: `Add`, `Sub`, `Mul`, `Div`.
//!
//! Each operation is a unit struct with an inherent `apply` taking the two
//! elements directly; the [`Operation`] impl wraps `apply` with the
//! operand-arity check. The vector operators in [`crate::vec2`] and
//! [`crate::vec3`] go through `apply` component-wise.

use crate::element::Element;
use crate::error::{Error, Result};
use crate::operation::{binary, Operation};

/// Addition, registered as `"Add"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Addition;

impl Addition {
    /// Sum of two elements.
    #[inline(always)]
    pub fn apply<T: Element>(&self, a: T, b: T) -> T {
        a + b
    }
}

impl<T: Element> Operation<T> for Addition {
    fn name(&self) -> &'static str {
        "Add"
    }

    fn execute(&self, operands: &[T]) -> Result<T> {
        let (a, b) = binary(Operation::<T>::name(self), operands)?;
        Ok(self.apply(a, b))
    }
}

/// Subtraction, registered as `"Sub"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Subtraction;

impl Subtraction {
    /// Difference of two elements.
    #[inline(always)]
    pub fn apply<T: Element>(&self, a: T, b: T) -> T {
        a - b
    }
}

impl<T: Element> Operation<T> for Subtraction {
    fn name(&self) -> &'static str {
        "Sub"
    }

    fn execute(&self, operands: &[T]) -> Result<T> {
        let (a, b) = binary(Operation::<T>::name(self), operands)?;
        Ok(self.apply(a, b))
    }
}

/// Multiplication, registered as `"Mul"`.
#[derive(Debug, Default, Clone, Copy)]
pub struct Multiplication;

impl Multiplication {
    /// Product of two elements.
    #[inline(always)]
    pub fn apply<T: Element>(&self, a: T, b: T) -> T {
        a * b
    }
}

impl<T: Element> Operation<T> for Multiplication {
    fn name(&self) -> &'static str {
        "Mul"
    }

    fn execute(&self, operands: &[T]) -> Result<T> {
        let (a, b) = binary(Operation::<T>::name(self), operands)?;
        Ok(self.apply(a, b))
    }
}

/// Division, registered as `"Div"`.
///
/// The divisor is checked before the division happens, so a zero divisor is
/// an error for floating-point elements too rather than IEEE ±infinity or
/// NaN.
#[derive(Debug, Default, Clone, Copy)]
pub struct Division;

impl Division {
    /// Quotient of two elements; integer elements truncate.
    #[inline]
    pub fn apply<T: Element>(&self, a: T, b: T) -> Result<T> {
        if b.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(a / b)
    }
}

impl<T: Element> Operation<T> for Division {
    fn name(&self) -> &'static str {
        "Div"
    }

    fn execute(&self, operands: &[T]) -> Result<T> {
        let (a, b) = binary(Operation::<T>::name(self), operands)?;
        self.apply(a, b)
    }
}
