//! Region thresholds and series coefficients for the complex dispatchers
//!
//! The crossover points balance Taylor truncation error against the
//! cancellation error of the closed forms. They are empirical and fixed.

#![allow(clippy::excessive_precision)]

use crate::constants::TWO_OVER_SQRT_PI;

// ============================================================================
// erf(z)
// ============================================================================

/// Upper bound on |Re z| for either erf Taylor region
pub const ERF_TAYLOR_RE: f64 = 8e-2;

/// Upper bound on |Im z| for the Maclaurin region around the origin
pub const ERF_TAYLOR_IM: f64 = 1e-2;

/// Upper bound on |Re z| for the expansion around the imaginary axis
pub const ERF_TAYLOR_ERFI_RE: f64 = 5e-3;

/// Upper bound on |Im(-z^2)| = |2xy| for the expansion around the imaginary axis
pub const ERF_TAYLOR_ERFI_XY: f64 = 5e-3;

/// erf(z) = z * P(-z^2), P(t) = 2/sqrt(pi) * (1 + t/3 + t^2/10 + t^3/42 + t^4/216)
pub const ERF_TAYLOR: [f64; 5] = [
    TWO_OVER_SQRT_PI,
    0.37612638903183752464,
    0.11283791670955125739,
    0.026866170645131251760,
    0.0052239776254421878422,
];

/// Real part of the expansion around the imaginary axis, divided by exp(y^2) x:
/// c0 - x^2 (c1 + c2 y^2) + x^4 (c3 + y^2 (c4 + c5 y^2))
pub const ERF_ERFI_RE: [f64; 6] = [
    TWO_OVER_SQRT_PI,
    0.37612638903183752464,
    0.75225277806367504925,
    0.11283791670955125739,
    0.45135166683820502956,
    0.15045055561273500986,
];

/// Imaginary correction of the expansion around the imaginary axis:
/// x^2 y (c0 - x^2 (c1 + c2 y^2))
pub const ERF_ERFI_IM: [f64; 3] = [
    TWO_OVER_SQRT_PI,
    0.56418958354775628695,
    0.37612638903183752464,
];

// ============================================================================
// Dawson D(z)
// ============================================================================

/// Below this y^2 the imaginary axis uses the odd Taylor series
pub const DAWSON_AXIS_TAYLOR_Y2: f64 = 2.5e-5;

/// Upper bound on |Im z| for either near-axis Dawson region
pub const DAWSON_NEAR_AXIS_IM: f64 = 5e-3;

/// Upper bound on |Re z| for the Maclaurin region around the origin
pub const DAWSON_TAYLOR_RE: f64 = 5e-3;

/// Upper bound on |Im(-z^2)| = |2xy| for the real-axis correction
pub const DAWSON_REALAXIS_XY: f64 = 5e-3;

/// x^2 above which the correction switches to the continued-fraction form (|x| > 40)
pub const DAWSON_CF_X2: f64 = 1600.0;

/// x^2 above which only the 1-/2-term asymptotic form is safe (|x| > 5e7)
pub const DAWSON_ASYMPTOTIC_X2: f64 = 25e14;

/// D(z) = z * P(-z^2), P(t) = 1 + 2t/3 + 4t^2/15
pub const DAWSON_TAYLOR: [f64; 3] = [
    1.0,
    0.6666666666666666666666666666666666666667,
    0.2666666666666666666666666666666666666667,
];

// Real-axis correction in y for |x| <= 40, given D = dawson(x):
//
//   Re = D + y^2 (D + x - 2Dx^2)
//          + y^4 (D (1/2 - x^2 (2 - 2/3 x^2)) + x (5/6 - 1/3 x^2))
//   Im = y [ 1 - 2Dx + 2/3 y^2 (1 - x^2 - Dx (3 - 2x^2))
//          + y^4 (4/15 - x^2 (3/5 - 2/15 x^2) - Dx (1 - x^2 (4/3 - 4/15 x^2))) ]

/// 2/3
pub(crate) const TWO_THIRDS: f64 = 0.66666666666666666667;
/// 1/3
pub(crate) const ONE_THIRD: f64 = 0.33333333333333333333;
/// 5/6
pub(crate) const FIVE_SIXTHS: f64 = 0.83333333333333333333;
/// 4/15
pub(crate) const FOUR_FIFTEENTHS: f64 = 0.26666666666666666667;
/// 2/15
pub(crate) const TWO_FIFTEENTHS: f64 = 0.13333333333333333333;
/// 4/3
pub(crate) const FOUR_THIRDS: f64 = 1.3333333333333333333;
/// 1/6, also used by the asymptotic form for |x| > 5e7
pub(crate) const ONE_SIXTH: f64 = 0.16666666666666666667;

// Six-term continued fraction for 40 < |x| <= 5e7, denominators cleared:
//
//   Re D(x+iy) * (-15 + 90x^2 - 60x^4 + 8x^6) / x
//     = 33 - 28x^2 + 4x^4 + y^2 (18 - 4x^2) + 4y^4
//   Im D(x+iy) * (-15 + 90x^2 - 60x^4 + 8x^6) / y
//     = -15 + 24x^2 - 4x^4 + y^2 (4x^2 - 10) - 4y^4

/// Denominator polynomial in x^2: -15 + 90x^2 - 60x^4 + 8x^6
pub const DAWSON_CF_DEN: [f64; 4] = [-15.0, 90.0, -60.0, 8.0];

/// Real numerator polynomial in x^2 at y = 0: 33 - 28x^2 + 4x^4
pub const DAWSON_CF_RE: [f64; 3] = [33.0, -28.0, 4.0];

/// Imaginary numerator polynomial in x^2 at y = 0: -15 + 24x^2 - 4x^4
pub const DAWSON_CF_IM: [f64; 3] = [-15.0, 24.0, -4.0];
