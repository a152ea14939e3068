// src/metric.rs
//! Shared geometric contract for the vector types, plus a runtime-dimension
//! wrapper.
//!
//! [`Vec2`] and [`Vec3`] deliberately do not share a base type. [`Metric`]
//! is the common surface for code generic over either dimensionality, and
//! [`AnyVector`] covers callers that only learn the dimensionality at
//! runtime; mixing dimensions there is a reported error, never a silent
//! coercion.

use std::fmt;

use crate::error::{Error, Result};
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// Euclidean capabilities shared by [`Vec2`] and [`Vec3`].
pub trait Metric: Sized {
    /// Number of components.
    const DIM: usize;

    /// Euclidean norm (length).
    fn magnitude(&self) -> f64;

    /// Euclidean distance to `other`.
    fn distance(&self, other: &Self) -> f64;

    /// Unit-length vector in the same direction; fails on a zero vector.
    fn normalize(&self) -> Result<Self>;
}

impl Metric for Vec2 {
    const DIM: usize = 2;

    fn magnitude(&self) -> f64 {
        Vec2::magnitude(self)
    }

    fn distance(&self, other: &Self) -> f64 {
        Vec2::distance(self, other)
    }

    fn normalize(&self) -> Result<Self> {
        Vec2::normalize(self)
    }
}

impl Metric for Vec3 {
    const DIM: usize = 3;

    fn magnitude(&self) -> f64 {
        Vec3::magnitude(self)
    }

    fn distance(&self, other: &Self) -> f64 {
        Vec3::distance(self, other)
    }

    fn normalize(&self) -> Result<Self> {
        Vec3::normalize(self)
    }
}

/// A vector of either dimensionality.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnyVector {
    /// Two-dimensional vector.
    V2(Vec2),
    /// Three-dimensional vector.
    V3(Vec3),
}

impl AnyVector {
    /// Number of components of the wrapped vector.
    #[inline]
    pub fn dim(&self) -> usize {
        match self {
            AnyVector::V2(_) => Vec2::DIM,
            AnyVector::V3(_) => Vec3::DIM,
        }
    }

    /// Euclidean norm of the wrapped vector.
    pub fn magnitude(&self) -> f64 {
        match self {
            AnyVector::V2(v) => v.magnitude(),
            AnyVector::V3(v) => v.magnitude(),
        }
    }

    /// Euclidean distance to `other`.
    ///
    /// Fails with [`Error::DimensionMismatch`] when the two vectors have
    /// different dimensionality.
    pub fn distance(&self, other: &AnyVector) -> Result<f64> {
        match (self, other) {
            (AnyVector::V2(a), AnyVector::V2(b)) => Ok(a.distance(b)),
            (AnyVector::V3(a), AnyVector::V3(b)) => Ok(a.distance(b)),
            _ => Err(Error::DimensionMismatch {
                expected: self.dim(),
                actual: other.dim(),
            }),
        }
    }

    /// Unit-length vector in the same direction; fails on a zero vector.
    pub fn normalize(&self) -> Result<AnyVector> {
        match self {
            AnyVector::V2(v) => Ok(AnyVector::V2(v.normalize()?)),
            AnyVector::V3(v) => Ok(AnyVector::V3(v.normalize()?)),
        }
    }
}

impl From<Vec2> for AnyVector {
    fn from(v: Vec2) -> AnyVector {
        AnyVector::V2(v)
    }
}

impl From<Vec3> for AnyVector {
    fn from(v: Vec3) -> AnyVector {
        AnyVector::V3(v)
    }
}

impl fmt::Display for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyVector::V2(v) => v.fmt(f),
            AnyVector::V3(v) => v.fmt(f),
        }
    }
}
