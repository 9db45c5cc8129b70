//! Series evaluation helpers
//!
//! The Taylor regions of erf and Dawson share one shape: an odd function
//! written as `z * P(-z^2)`. Callers already hold `-z^2` from region
//! classification, so it is passed in rather than recomputed.

use num_complex::Complex64;

/// Evaluate `c[0] + t*(c[1] + t*(c[2] + ...))` for complex `t`
#[inline]
pub fn horner(t: Complex64, coeffs: &[f64]) -> Complex64 {
    match coeffs.split_last() {
        Some((&last, rest)) => rest
            .iter()
            .rev()
            .fold(Complex64::new(last, 0.0), |acc, &c| acc * t + c),
        None => Complex64::new(0.0, 0.0),
    }
}

/// Evaluate `c[0] + t*(c[1] + t*(c[2] + ...))` for real `t`
#[inline]
pub fn horner_real(t: f64, coeffs: &[f64]) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * t + c)
}

/// Odd series `z * P(-z^2)` given the precomputed `mz2 = -z^2`
#[inline]
pub fn odd_series(z: Complex64, mz2: Complex64, coeffs: &[f64]) -> Complex64 {
    z * horner(mz2, coeffs)
}
