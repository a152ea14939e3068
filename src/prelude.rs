// src/prelude.rs
//! The "everything" import for CalcEngine.
//!
//! Brings you the most commonly used types and traits with one glob:
//! ```rust
//! use calc_engine::prelude::*;
//! ```

// core data types
pub use crate::calculator::Calculator;
pub use crate::metric::{AnyVector, Metric};
pub use crate::vec2::Vec2;
pub use crate::vec3::Vec3;

// scalar operations
pub use crate::arithmetic::{Addition, Division, Multiplication, Subtraction};
pub use crate::trig::{Cosine, Sine, Tangent};

// dispatch plumbing
pub use crate::element::{Element, RealElement};
pub use crate::error::{Error, Result};
pub use crate::operation::Operation;
