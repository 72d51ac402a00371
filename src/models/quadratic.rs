//! Evaluation and random construction of quadratic curves.

use rand::Rng;

use crate::domain::QuadraticCurve;

/// Predict `y(x) = a*x^2 + b*x + c`.
pub fn predict(curve: &QuadraticCurve, x: f64) -> f64 {
    curve.a * x * x + curve.b * x + curve.c
}

/// Evaluate the curve at every x, returning one y per x.
pub fn evaluate(curve: &QuadraticCurve, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x| predict(curve, x)).collect()
}

/// Evaluate into a caller-provided buffer.
///
/// # Panics
/// Panics if `out` and `xs` differ in length.
pub fn evaluate_into(curve: &QuadraticCurve, xs: &[f64], out: &mut [f64]) {
    assert_eq!(xs.len(), out.len(), "evaluate_into: output length must match input length");
    for (y, &x) in out.iter_mut().zip(xs) {
        *y = predict(curve, x);
    }
}

/// Scale factor(s) for random curve coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveScale {
    /// Same scale for `a`, `b` and `c`.
    Uniform(f64),
    /// Separate scales for `(a, b, c)`.
    PerCoefficient([f64; 3]),
}

impl CurveScale {
    fn factors(self) -> [f64; 3] {
        match self {
            CurveScale::Uniform(s) => [s; 3],
            CurveScale::PerCoefficient(s) => s,
        }
    }
}

impl Default for CurveScale {
    fn default() -> Self {
        CurveScale::Uniform(100.0)
    }
}

/// Draw a random curve with each coefficient in `[-scale/2, scale/2)`.
pub fn random_curve<R: Rng + ?Sized>(rng: &mut R, scale: CurveScale) -> QuadraticCurve {
    let [sa, sb, sc] = scale.factors();
    let mut draw = |s: f64| (rng.r#gen::<f64>() - 0.5) * s;
    let a = draw(sa);
    let b = draw(sb);
    let c = draw(sc);
    QuadraticCurve::new(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn predict_reference_curve() {
        let curve = QuadraticCurve::new(5.0, 10.0, 15.0);
        assert_eq!(predict(&curve, 0.0), 15.0);
        assert_eq!(predict(&curve, 50.0), 13_015.0);
        assert_eq!(predict(&curve, -1.0), 10.0);
    }

    #[test]
    fn evaluate_preserves_length_and_order() {
        let curve = QuadraticCurve::new(1.0, 0.0, -1.0);
        assert_eq!(evaluate(&curve, &[-2.0, 0.0, 3.0]), vec![3.0, -1.0, 8.0]);
        assert!(evaluate(&curve, &[]).is_empty());

        let mut out = [0.0; 3];
        evaluate_into(&curve, &[-2.0, 0.0, 3.0], &mut out);
        assert_eq!(out, [3.0, -1.0, 8.0]);
    }

    #[test]
    #[should_panic]
    fn evaluate_into_rejects_short_buffer() {
        let mut out = [0.0; 1];
        evaluate_into(&QuadraticCurve::default(), &[1.0, 2.0], &mut out);
    }

    #[test]
    fn random_curve_respects_scale() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let curve = random_curve(&mut rng, CurveScale::PerCoefficient([1.0, 50.0, 200.0]));
            assert!(curve.a.abs() <= 0.5);
            assert!(curve.b.abs() <= 25.0);
            assert!(curve.c.abs() <= 100.0);
        }
    }

    #[test]
    fn random_curve_is_reproducible_for_a_seed() {
        let a = random_curve(&mut StdRng::seed_from_u64(42), CurveScale::default());
        let b = random_curve(&mut StdRng::seed_from_u64(42), CurveScale::default());
        assert_eq!(a, b);
    }
}
