//! Numerical constants shared by the error function family
//!
//! Mathematical constants are carried with more digits than an f64 can hold
//! so that the compiler rounds them once, correctly. Region thresholds that
//! belong to a single function live in [`crate::dispatch::constants`].

/// sqrt(pi) / 2
#[allow(clippy::excessive_precision)]
pub const SQRT_PI_2: f64 = 0.886_226_925_452_758_013_649_083_741_670_572_591_399_0;

/// sqrt(2 * pi)
#[allow(clippy::excessive_precision)]
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_502_415_765_284_811_0;

/// pi
pub const PI: f64 = std::f64::consts::PI;

/// 2 / sqrt(pi), leading coefficient of the erf Maclaurin series
pub const TWO_OVER_SQRT_PI: f64 = std::f64::consts::FRAC_2_SQRT_PI;

// ============================================================================
// Exponent guards
// ============================================================================

/// Below this value of Re(-z^2), exp(-z^2) underflows and erf/erfc saturate.
pub const EXP_UNDERFLOW: f64 = -750.0;

/// Above this value of y^2, exp(y^2) overflows while Im w(y) stays finite,
/// so erfi(y) is reported as a signed infinity instead of Inf * 0 = NaN.
pub const ERFI_OVERFLOW: f64 = 720.0;

/// Above this value of x^2, exp(-x^2) underflows on the real axis and erfc
/// saturates to 0 or 2.
pub const ERFC_REAL_UNDERFLOW: f64 = 750.0;
