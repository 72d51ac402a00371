//! Power sums for the degree-2 normal equations.
//!
//! For samples `(x_i, y_i)` the least-squares system is
//!
//! ```text
//! | S4  S3  S2 |   | a |   | T2 |
//! | S3  S2  S1 | · | b | = | T1 |
//! | S2  S1  S0 |   | c |   | T0 |
//! ```
//!
//! with `S_k = Σ x_i^k` and `T_k = Σ x_i^k * y_i`. Only `T0..T2` enter the
//! system, so higher weighted sums are not accumulated.

use crate::math::{Matrix3, Vector3};

/// Accumulated sums over a sample set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PowerSums {
    /// Number of samples.
    pub n: usize,
    /// `x[k] = Σ x_i^k` for `k = 0..=4`.
    pub x: [f64; 5],
    /// `xy[k] = Σ x_i^k * y_i` for `k = 0..=2`.
    pub xy: [f64; 3],
}

impl PowerSums {
    /// Accumulate sums over paired samples.
    ///
    /// # Panics
    /// Panics if `xs` and `ys` differ in length.
    pub fn accumulate(xs: &[f64], ys: &[f64]) -> Self {
        assert_eq!(xs.len(), ys.len(), "power sums need one y per x");

        let mut sums = PowerSums {
            n: xs.len(),
            ..PowerSums::default()
        };
        for (&x, &y) in xs.iter().zip(ys) {
            for (k, s) in sums.x.iter_mut().enumerate() {
                *s += x.powi(k as i32);
            }
            for (k, t) in sums.xy.iter_mut().enumerate() {
                *t += x.powi(k as i32) * y;
            }
        }
        sums
    }

    /// Symmetric normal-equations matrix.
    pub fn normal_matrix(&self) -> Matrix3 {
        let s = &self.x;
        [
            [s[4], s[3], s[2]],
            [s[3], s[2], s[1]],
            [s[2], s[1], self.n as f64],
        ]
    }

    /// Right-hand side `(T2, T1, T0)`.
    pub fn rhs(&self) -> Vector3 {
        [self.xy[2], self.xy[1], self.xy[0]]
    }
}
