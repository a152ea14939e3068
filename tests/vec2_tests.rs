// tests/vec2_tests.rs

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use calc_engine::{Error, Vec2};

const EPS: f64 = 1e-12;

fn hash_of(v: &Vec2) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn test_new_and_fields() {
    let v = Vec2::new(1.0, 2.0);
    assert_eq!(v.x, 1.0);
    assert_eq!(v.y, 2.0);
}

#[test]
fn test_add() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, 4.0);
    assert_eq!(a + b, Vec2::new(4.0, 6.0));
}

#[test]
fn test_sub() {
    let a = Vec2::new(4.0, 6.0);
    let b = Vec2::new(1.0, 2.0);
    assert_eq!(a - b, Vec2::new(3.0, 4.0));
    assert_eq!(a - a, Vec2::new(0.0, 0.0));
}

#[test]
fn test_mul_scalar_both_orders() {
    let v = Vec2::new(2.0, -3.0);
    assert_eq!(v * 3.0, Vec2::new(6.0, -9.0));
    assert_eq!(3.0 * v, v * 3.0);
    assert_eq!(v * 0.0, Vec2::new(0.0, 0.0));
}

#[test]
fn test_neg() {
    assert_eq!(-Vec2::new(1.5, -2.0), Vec2::new(-1.5, 2.0));
}

#[test]
fn test_magnitude() {
    assert_eq!(Vec2::new(3.0, 4.0).magnitude(), 5.0);
    assert_eq!(Vec2::new(0.0, 0.0).magnitude(), 0.0);
    assert!((Vec2::new(1.0, 0.0).magnitude() - 1.0).abs() < EPS);
}

#[test]
fn test_distance() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(4.0, 6.0);
    // 3-4-5 triangle
    assert!((a.distance(&b) - 5.0).abs() < EPS);
    assert_eq!(a.distance(&a), 0.0);
    assert_eq!(a.distance(&b), (a - b).magnitude());
}

#[test]
fn test_dot() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(3.0, 4.0);
    assert!((a.dot(&b) - 11.0).abs() < EPS);
    // orthogonal
    assert_eq!(Vec2::new(1.0, 0.0).dot(&Vec2::new(0.0, 1.0)), 0.0);
}

#[test]
fn test_normalize() {
    let v = Vec2::new(3.0, 4.0).normalize().unwrap();
    assert_eq!(v, Vec2::new(0.6, 0.8));
    assert!((v.magnitude() - 1.0).abs() < EPS);
}

#[test]
fn test_normalize_zero_vector_fails() {
    let err = Vec2::new(0.0, 0.0).normalize().unwrap_err();
    assert_eq!(err, Error::ZeroVector);
    assert_eq!(err.to_string(), "cannot normalize a zero vector");
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", Vec2::new(1.5, -2.0)), "(1.5, -2)");
    assert_eq!(format!("{}", Vec2::new(4.0, 6.0)), "(4, 6)");
}

#[test]
fn test_equality_is_exact() {
    assert_eq!(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0));
    assert_ne!(Vec2::new(1.0, 2.0), Vec2::new(1.0, 2.0 + 1e-12));
}

#[test]
fn test_hash_consistent_with_equality() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(1.0, 2.0);
    assert_eq!(hash_of(&a), hash_of(&b));

    // -0.0 == 0.0, so the hashes must agree too
    let pos = Vec2::new(0.0, 0.0);
    let neg = Vec2::new(-0.0, -0.0);
    assert_eq!(pos, neg);
    assert_eq!(hash_of(&pos), hash_of(&neg));
}

#[test]
fn test_default_and_conversions() {
    assert_eq!(Vec2::default(), Vec2::new(0.0, 0.0));
    let v = Vec2::from([1.0, 2.0]);
    assert_eq!(v, Vec2::new(1.0, 2.0));
    let arr: [f64; 2] = v.into();
    assert_eq!(arr, [1.0, 2.0]);
}
