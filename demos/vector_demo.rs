//! Vector geometry built on the calculator operations.
//!
//! Run with: `cargo run --example vector_demo`

use calc_engine::prelude::*;

fn main() -> Result<()> {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(1.0, 2.0);
    println!("a = {a}, b = {b}");
    println!("a + b = {}", a + b);
    println!("a - b = {}", a - b);
    println!("a * 2 = {}, 2 * a = {}", a * 2.0, 2.0 * a);
    println!("|a| = {}", a.magnitude());
    println!("a · b = {}", a.dot(&b));
    println!("distance(a, b) = {}", a.distance(&b));
    println!("normalize(a) = {}", a.normalize()?);

    let u = Vec3::new(1.0, 0.0, 0.0);
    let v = Vec3::new(0.0, 1.0, 0.0);
    println!("u × v = {}", u.cross(&v));
    println!("u · v = {}", u.dot(&v));

    // Runtime-dimension vectors report mismatches instead of coercing
    let p = AnyVector::from(a);
    let q = AnyVector::from(u);
    match p.distance(&q) {
        Ok(d) => println!("distance = {d}"),
        Err(e) => println!("distance(p, q) -> error: {e}"),
    }

    // Normalizing a zero vector is an error, not a NaN vector
    match Vec3::default().normalize() {
        Ok(n) => println!("normalized = {n}"),
        Err(e) => println!("normalize(0) -> error: {e}"),
    }

    Ok(())
}
