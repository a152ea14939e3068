//! Dispatching arithmetic by name through the registry.
//!
//! Run with: `cargo run --example calculator_demo`

use std::f64::consts::FRAC_PI_2;

use calc_engine::prelude::*;

fn main() -> Result<()> {
    let calc = Calculator::<f64>::standard();
    println!(
        "supported operations: {}",
        calc.supported_operations().join(", ")
    );

    for (name, operands) in [
        ("Add", vec![2.0, 3.0]),
        ("Sub", vec![10.0, 4.5]),
        ("Mul", vec![6.0, 7.0]),
        ("Div", vec![7.5, 2.5]),
        ("sin", vec![FRAC_PI_2]),
        ("Cos", vec![0.0]),
    ] {
        let result = calc.calculate(name, &operands)?;
        println!("{name} {operands:?} = {result}");
    }

    // Errors are ordinary values, reported where they happen
    match calc.calculate("Div", &[1.0, 0.0]) {
        Ok(v) => println!("1 / 0 = {v}"),
        Err(e) => println!("1 / 0 -> error: {e}"),
    }
    match calc.calculate("Pow", &[2.0, 8.0]) {
        Ok(v) => println!("Pow = {v}"),
        Err(e) => println!("Pow -> error: {e}"),
    }

    // Integer calculators carry arithmetic only
    let ints = Calculator::<i64>::arithmetic();
    println!(
        "integer operations: {}",
        ints.supported_operations().join(", ")
    );
    println!("Div [7, 2] = {}", ints.calculate("Div", &[7, 2])?);

    Ok(())
}
