//! Voigt profile
//!
//! The convolution of a centered Gaussian
//!
//! ```text
//! G(x; sigma) = exp(-x^2 / (2 sigma^2)) / (sqrt(2 pi) |sigma|)
//! ```
//!
//! and a centered Lorentzian
//!
//! ```text
//! L(x; gamma) = |gamma| / (pi (x^2 + gamma^2))
//! ```
//!
//! evaluated through V(x) = Re w(z) / (sqrt(2 pi) |sigma|) with
//! z = (x + i|gamma|) / (sqrt(2) |sigma|) (Abramowitz & Stegun 7.4.13).
//! Degenerate widths use the closed forms, which would otherwise be 0/0.

use num_complex::Complex64;
use std::f64::consts::{LN_2, SQRT_2};
use tracing::{debug, trace, warn};

use crate::constants::{PI, SQRT_2PI};
use crate::error::{CerfError, Result};
use crate::kernel::w_of_z;

// ============================================================================
// HWHM solver parameters
// ============================================================================

/// Relative width of the bisection bracket at which the HWHM is accepted
const HWHM_TOLERANCE: f64 = 1e-15;

/// Bisection step cap
const HWHM_MAX_ITERATIONS: usize = 200;

/// Bracket expansion cap (each step halves or doubles one end)
const HWHM_MAX_BRACKET_STEPS: usize = 64;

/// Evaluate the Voigt profile V(x; sigma, gamma)
///
/// Only |sigma| and |gamma| are used. With both widths zero the profile is a
/// delta: +Inf at x = 0 and 0 elsewhere.
///
/// # Example
/// ```
/// use cerf_core::voigt;
/// let v = voigt(0.0, 1.0, 0.0);
/// assert!((v - 0.3989422804014327).abs() < 1e-15);
/// ```
pub fn voigt(x: f64, sigma: f64, gamma: f64) -> f64 {
    let gam = gamma.abs();
    let sig = sigma.abs();

    if gam == 0.0 {
        if sig == 0.0 {
            if x == 0.0 {
                f64::INFINITY
            } else {
                0.0
            }
        } else {
            gaussian(x, sig)
        }
    } else if sig == 0.0 {
        lorentzian(x, gam)
    } else {
        let z = Complex64::new(x, gam) / SQRT_2 / sig;
        w_of_z(z).re / SQRT_2PI / sig
    }
}

#[inline]
fn gaussian(x: f64, sig: f64) -> f64 {
    (-x * x / 2.0 / (sig * sig)).exp() / SQRT_2PI / sig
}

#[inline]
fn lorentzian(x: f64, gam: f64) -> f64 {
    gam / PI / (x * x + gam * gam)
}

/// A Voigt line shape with validated widths
///
/// # Example
/// ```
/// use cerf_core::VoigtProfile;
/// let profile = VoigtProfile::new(1.0, 0.5).unwrap();
/// let hwhm = profile.hwhm().unwrap();
/// assert!((profile.evaluate(hwhm) - profile.peak() / 2.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VoigtProfile {
    /// Gaussian standard deviation (non-negative)
    sigma: f64,
    /// Lorentzian half width (non-negative)
    gamma: f64,
}

impl VoigtProfile {
    /// Create a profile from Gaussian and Lorentzian widths
    ///
    /// The sign of either width is ignored. Non-finite widths are rejected.
    pub fn new(sigma: f64, gamma: f64) -> Result<Self> {
        Ok(Self {
            sigma: check_width("sigma", sigma)?,
            gamma: check_width("gamma", gamma)?,
        })
    }

    /// Pure Gaussian profile
    pub fn gaussian(sigma: f64) -> Result<Self> {
        Self::new(sigma, 0.0)
    }

    /// Pure Lorentzian profile
    pub fn lorentzian(gamma: f64) -> Result<Self> {
        Self::new(0.0, gamma)
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Profile value at x
    pub fn evaluate(&self, x: f64) -> f64 {
        voigt(x, self.sigma, self.gamma)
    }

    /// Profile value at the center
    pub fn peak(&self) -> f64 {
        self.evaluate(0.0)
    }

    /// Half width at half maximum
    ///
    /// Exact for the degenerate shapes. Otherwise the Olivero-Longbothum
    /// estimate is bracketed and refined by bisection, which is valid since
    /// the profile decreases strictly for x > 0.
    pub fn hwhm(&self) -> Result<f64> {
        let (sig, gam) = (self.sigma, self.gamma);
        if sig == 0.0 {
            return Ok(gam);
        }
        if gam == 0.0 {
            return Ok(sig * (2.0 * LN_2).sqrt());
        }

        let half = 0.5 * self.peak();
        let estimate = olivero_hwhm(sig, gam);
        let (mut lo, mut hi) = (0.9 * estimate, 1.1 * estimate);

        for step in 0..HWHM_MAX_BRACKET_STEPS {
            let below = self.evaluate(lo) <= half;
            let above = self.evaluate(hi) >= half;
            if !below && !above {
                break;
            }
            trace!(step, lo, hi, "expanding hwhm bracket");
            if below {
                lo *= 0.5;
            }
            if above {
                hi *= 2.0;
            }
        }
        if self.evaluate(lo) <= half || self.evaluate(hi) >= half {
            warn!(sigma = sig, gamma = gam, "hwhm bracket could not be established");
            return Err(CerfError::NoConvergence {
                iterations: HWHM_MAX_BRACKET_STEPS,
            });
        }

        for _ in 0..HWHM_MAX_ITERATIONS {
            let mid = 0.5 * (lo + hi);
            if hi - lo <= HWHM_TOLERANCE * mid {
                return Ok(mid);
            }
            if self.evaluate(mid) > half {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        warn!(
            sigma = sig,
            gamma = gam,
            iterations = HWHM_MAX_ITERATIONS,
            "hwhm bisection did not converge"
        );
        Err(CerfError::NoConvergence {
            iterations: HWHM_MAX_ITERATIONS,
        })
    }

    /// Full width at half maximum
    pub fn fwhm(&self) -> Result<f64> {
        Ok(2.0 * self.hwhm()?)
    }
}

fn check_width(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value.abs())
    } else {
        debug!(name, value, "rejecting non-finite voigt width");
        Err(CerfError::InvalidWidth { name, value })
    }
}

/// Olivero-Longbothum approximation, relative error about 2e-4
///
/// The root term goes through `hypot` so that widths past 1e154 do not
/// overflow when squared.
fn olivero_hwhm(sigma: f64, gamma: f64) -> f64 {
    let f_g = 2.0 * sigma * (2.0 * LN_2).sqrt();
    let f_l = 2.0 * gamma;
    0.5 * (0.5346 * f_l + (0.2166f64.sqrt() * f_l).hypot(f_g))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_voigt_delta() {
        assert_eq!(voigt(0.0, 0.0, 0.0), f64::INFINITY);
        assert_eq!(voigt(1.0, 0.0, -0.0), 0.0);
    }

    #[test]
    fn test_voigt_sign_of_widths_ignored() {
        assert_eq!(voigt(0.7, -1.2, 0.3), voigt(0.7, 1.2, -0.3));
        assert_eq!(voigt(0.7, 1.2, 0.3), voigt(0.7, -1.2, -0.3));
    }

    #[test]
    fn test_voigt_center_value() {
        // V(0) = erfcx(gamma / (sqrt(2) sigma)) / (sqrt(2 pi) sigma)
        let v = voigt(0.0, 1.0, 1.0);
        let expected = crate::kernel::erfcx(1.0 / SQRT_2) / SQRT_2PI;
        assert_relative_eq!(v, expected, max_relative = 1e-14);
    }

    #[test]
    fn test_profile_rejects_non_finite() {
        let err = VoigtProfile::new(f64::NAN, 1.0).unwrap_err();
        assert!(matches!(err, CerfError::InvalidWidth { name: "sigma", .. }));
        let err = VoigtProfile::new(1.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, CerfError::InvalidWidth { name: "gamma", .. }));
    }

    #[test]
    fn test_profile_stores_absolute_widths() {
        let p = VoigtProfile::new(-2.0, -0.5).unwrap();
        assert_eq!(p.sigma(), 2.0);
        assert_eq!(p.gamma(), 0.5);
    }

    #[test]
    fn test_hwhm_degenerate() {
        assert_eq!(VoigtProfile::new(0.0, 0.0).unwrap().hwhm().unwrap(), 0.0);
        assert_eq!(VoigtProfile::lorentzian(2.0).unwrap().hwhm().unwrap(), 2.0);
        assert_relative_eq!(
            VoigtProfile::gaussian(1.0).unwrap().hwhm().unwrap(),
            1.177_410_022_515_474_7,
            max_relative = 1e-15
        );
    }

    #[test]
    fn test_hwhm_half_maximum() {
        for &(sig, gam) in &[(1.0, 0.5), (0.1, 3.0), (5.0, 0.01), (1e-3, 1e-3)] {
            let p = VoigtProfile::new(sig, gam).unwrap();
            let h = p.hwhm().unwrap();
            assert_relative_eq!(p.evaluate(h), 0.5 * p.peak(), max_relative = 1e-12);
            assert_relative_eq!(h, olivero_hwhm(sig, gam), max_relative = 1e-3);
        }
    }

    #[test]
    fn test_olivero_estimate_finite_for_huge_widths() {
        let est = olivero_hwhm(1e200, 1e200);
        assert!(est.is_finite());
        assert_relative_eq!(est, 1e200 * olivero_hwhm(1.0, 1.0), max_relative = 1e-14);
        assert!(olivero_hwhm(1e160, 1.0).is_finite());
    }
}
