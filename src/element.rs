// src/element.rs
//! Numeric element bounds shared by operands and results.

use std::fmt;

use num_traits::{Float, Num};

/// Numeric element type an operation computes over.
///
/// `Num` supplies the arithmetic operators plus `zero()`/`one()`, which is
/// everything the binary operations need; the divide-by-zero guard goes
/// through `Zero::is_zero` so integer and floating-point elements are
/// checked the same way.
pub trait Element:
    Num + Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

impl<T> Element for T where
    T: Num + Copy + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

/// Element types with real-valued transcendental functions.
///
/// Integer elements implement [`Element`] but not `RealElement`; the
/// trigonometric operations are only available to floating-point
/// calculators.
pub trait RealElement: Element + Float {}

impl<T> RealElement for T where T: Element + Float {}
