//! Real-axis error functions
//!
//! Built on the real primitives erfcx(x) and Im w(x). The complex
//! dispatchers delegate here whenever the imaginary part is zero.
//!
//! `erf` and `erfc` are evaluated here instead of through the kernel's real
//! erf: the real Maclaurin branch must evaluate the same `ERF_TAYLOR`
//! polynomial as the complex origin region of `cerf`, so the value on the
//! axis and the value just off it come from one formula.

use crate::constants::{ERFC_REAL_UNDERFLOW, ERFI_OVERFLOW, EXP_UNDERFLOW, SQRT_PI_2};
use crate::dispatch::constants::{ERF_TAYLOR, ERF_TAYLOR_RE};
use crate::kernel::{erfcx, im_w_of_x};
use crate::math::series::horner_real;

/// Error function erf(x) for real x
///
/// Uses the Maclaurin series for |x| < 0.08, where 1 - exp(-x^2) erfcx(x)
/// would cancel, and saturates to +/-1 once exp(-x^2) underflows.
pub fn erf(x: f64) -> f64 {
    let mx2 = -x * x;
    if mx2 < EXP_UNDERFLOW {
        return if x >= 0.0 { 1.0 } else { -1.0 };
    }
    if x >= 0.0 {
        if x < ERF_TAYLOR_RE {
            return x * horner_real(mx2, &ERF_TAYLOR);
        }
        1.0 - mx2.exp() * erfcx(x)
    } else {
        if x > -ERF_TAYLOR_RE {
            return x * horner_real(mx2, &ERF_TAYLOR);
        }
        mx2.exp() * erfcx(-x) - 1.0
    }
}

/// Complementary error function erfc(x) = 1 - erf(x) for real x
pub fn erfc(x: f64) -> f64 {
    let x2 = x * x;
    if x2 > ERFC_REAL_UNDERFLOW {
        return if x >= 0.0 { 0.0 } else { 2.0 };
    }
    if x >= 0.0 {
        (-x2).exp() * erfcx(x)
    } else {
        2.0 - (-x2).exp() * erfcx(-x)
    }
}

/// Imaginary error function erfi(x) = -i erf(ix) for real x
pub fn erfi(x: f64) -> f64 {
    let x2 = x * x;
    if x2 > ERFI_OVERFLOW {
        if x > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    } else {
        x2.exp() * im_w_of_x(x)
    }
}

/// Dawson's integral D(x) = sqrt(pi)/2 * exp(-x^2) * erfi(x) for real x
pub fn dawson(x: f64) -> f64 {
    SQRT_PI_2 * im_w_of_x(x)
}
