//! Fixed demonstration sequence (`quadfit demo`).
//!
//! Exercises each building block on known inputs: the raw bitset functions on
//! a 20-bit buffer, the 3x3 determinant and inverse, and a fit that recovers a
//! reference curve.

use crate::bits::{clear, format_bits, set, size_for, write};
use crate::domain::QuadraticCurve;
use crate::fit::fit_quadratic;
use crate::math::{Matrix3, determinant_3x3, format_matrix, inverse_3x3};
use crate::models::evaluate;

const DEMO_BITS: usize = 20;

const DEMO_MATRIX: Matrix3 = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 2.0, 9.0]];

const DEMO_CURVE: QuadraticCurve = QuadraticCurve::new(5.0, 10.0, 15.0);

/// Build the full demonstration report.
pub fn demo_report() -> String {
    let mut out = String::new();
    out.push_str(&bitset_section());
    out.push('\n');
    out.push_str(&matrix_section());
    out.push('\n');
    out.push_str(&quadratic_section());
    out
}

fn bitset_section() -> String {
    let mut bits = [0u8; size_for(DEMO_BITS)];
    let mut out = format!("Initial: {}\n", format_bits(&bits, DEMO_BITS));

    for bit in [1, 4, 5, 6, 9, 10, 11, 16, 19] {
        set(&mut bits, bit);
    }
    out.push_str(&format!("Set:     {}\n", format_bits(&bits, DEMO_BITS)));

    for bit in [4, 6, 19] {
        clear(&mut bits, bit);
    }
    out.push_str(&format!("Clear:   {}\n", format_bits(&bits, DEMO_BITS)));

    for bit in 0..DEMO_BITS {
        write(&mut bits, bit, bit % 2 == 1);
    }
    out.push_str(&format!("Write:   {}\n", format_bits(&bits, DEMO_BITS)));
    out
}

fn matrix_section() -> String {
    let mut out = format!("Determinant: {:.6}\n", determinant_3x3(&DEMO_MATRIX));
    out.push_str(&format_matrix(&inverse_3x3(&DEMO_MATRIX)));
    out
}

fn quadratic_section() -> String {
    let x = [0.0, 50.0, 100.0];
    let y = evaluate(&DEMO_CURVE, &x);
    let fitted = fit_quadratic(&x, &y);
    format!("A: {:.6}\nB: {:.6}\nC: {:.6}\n", fitted.a, fitted.b, fitted.c)
}
