//! Synthetic samples drawn from a reference curve.
//!
//! x-values are evenly spaced over `[from, to]`; y-values come from the
//! reference curve plus optional Gaussian noise. The RNG is seeded so a given
//! `SampleSpec` always produces the same samples.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};

use crate::domain::QuadraticCurve;
use crate::error::AppError;
use crate::models::predict;

/// How to lay out and perturb a synthetic sample.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSpec {
    pub from: f64,
    pub to: f64,
    pub count: usize,
    /// Standard deviation of additive Gaussian noise (0 disables noise).
    pub noise_std: f64,
    pub seed: u64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        Self {
            from: -100.0,
            to: 100.0,
            count: 3,
            noise_std: 0.0,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleData {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Curve the samples were generated from.
    pub reference: QuadraticCurve,
}

/// `n` evenly spaced values from `from` to `to` inclusive.
///
/// `n = 1` yields `[from]`; `n = 0` yields an empty vector.
pub fn linspace(from: f64, to: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![from],
        _ => {
            let step = (to - from) / (n as f64 - 1.0);
            (0..n)
                .map(|i| if i == n - 1 { to } else { from + step * i as f64 })
                .collect()
        }
    }
}

pub fn generate_sample(reference: &QuadraticCurve, spec: &SampleSpec) -> Result<SampleData, AppError> {
    if spec.count == 0 {
        return Err(AppError::new(2, "Sample count must be > 0."));
    }
    if !(spec.from.is_finite() && spec.to.is_finite()) {
        return Err(AppError::new(2, "Invalid x range for sample generation."));
    }
    if !(spec.noise_std.is_finite() && spec.noise_std >= 0.0) {
        return Err(AppError::new(2, "Noise standard deviation must be finite and >= 0."));
    }

    let x = linspace(spec.from, spec.to, spec.count);
    let mut y: Vec<f64> = x.iter().map(|&x| predict(reference, x)).collect();

    if spec.noise_std > 0.0 {
        let mut rng = StdRng::seed_from_u64(spec.seed);
        let normal = Normal::new(0.0, spec.noise_std)
            .map_err(|e| AppError::new(4, format!("Noise distribution error: {e}")))?;
        for value in &mut y {
            *value += normal.sample(&mut rng);
        }
    }

    Ok(SampleData {
        x,
        y,
        reference: *reference,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends() {
        assert_eq!(linspace(-100.0, 100.0, 3), vec![-100.0, 0.0, 100.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }

    #[test]
    fn noise_free_sample_lies_on_reference() {
        let reference = QuadraticCurve::new(5.0, 10.0, 15.0);
        let spec = SampleSpec {
            from: 0.0,
            to: 100.0,
            count: 3,
            ..SampleSpec::default()
        };
        let sample = generate_sample(&reference, &spec).unwrap();
        assert_eq!(sample.x, vec![0.0, 50.0, 100.0]);
        assert_eq!(sample.y, vec![15.0, 13_015.0, 51_015.0]);
        assert_eq!(sample.reference, reference);
    }

    #[test]
    fn noisy_sample_is_seeded() {
        let reference = QuadraticCurve::new(1.0, 0.0, 0.0);
        let spec = SampleSpec {
            count: 20,
            noise_std: 2.0,
            ..SampleSpec::default()
        };
        let a = generate_sample(&reference, &spec).unwrap();
        let b = generate_sample(&reference, &spec).unwrap();
        assert_eq!(a, b);

        let other = generate_sample(&reference, &SampleSpec { seed: 7, ..spec }).unwrap();
        assert_ne!(a.y, other.y);
        assert!(a.y.iter().zip(&a.x).any(|(y, x)| *y != x * x));
    }

    #[test]
    fn rejects_invalid_specs() {
        let reference = QuadraticCurve::default();
        let zero = SampleSpec {
            count: 0,
            ..SampleSpec::default()
        };
        assert_eq!(generate_sample(&reference, &zero).unwrap_err().exit_code(), 2);

        let negative_noise = SampleSpec {
            noise_std: -1.0,
            ..SampleSpec::default()
        };
        assert!(generate_sample(&reference, &negative_noise).is_err());
    }
}
