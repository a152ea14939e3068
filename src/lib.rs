//! # CalcEngine Quickstart
//!
//! ```rust
//! use calc_engine::prelude::*;
//!
//! // Dispatch arithmetic by name through the registry
//! let calc = Calculator::<f64>::standard();
//! assert_eq!(calc.calculate("Mul", &[6.0, 7.0]), Ok(42.0));
//!
//! // Vector geometry built on the same operations
//! let v = Vec2::new(3.0, 4.0);
//! assert_eq!(v.magnitude(), 5.0);
//! assert_eq!(v + Vec2::new(1.0, 2.0), Vec2::new(4.0, 6.0));
//! ```
//!
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

// Core modules
pub mod arithmetic;
pub mod calculator;
pub mod element;
pub mod error;
pub mod metric;
pub mod operation;
pub mod prelude;
pub mod trig;
pub mod vec2;
pub mod vec3;

// --- Public API exports ---

// Dispatch
pub use calculator::Calculator;
pub use error::{Error, Result};
pub use operation::Operation;

// Scalar operations
pub use arithmetic::{Addition, Division, Multiplication, Subtraction};
pub use trig::{Cosine, Sine, Tangent};

// Element bounds
pub use element::{Element, RealElement};

// Vector types
pub use metric::{AnyVector, Metric};
pub use vec2::Vec2;
pub use vec3::Vec3;
