//! Complex error function erf(z)

use num_complex::Complex64;

use super::constants::{
    ERF_ERFI_IM, ERF_ERFI_RE, ERF_TAYLOR, ERF_TAYLOR_ERFI_RE, ERF_TAYLOR_ERFI_XY, ERF_TAYLOR_IM,
    ERF_TAYLOR_RE,
};
use super::minus_z_squared;
use crate::constants::{ERFI_OVERFLOW, EXP_UNDERFLOW};
use crate::kernel::{im_w_of_x, w_of_z};
use crate::math::real;
use crate::math::series::{horner_real, odd_series};

/// Compute erf(z), the complex error function
///
/// Accurate to near machine precision over the whole plane. The sign of a
/// zero component on either axis is carried through unchanged.
///
/// # Example
/// ```
/// use cerf_core::cerf;
/// use num_complex::Complex64;
/// let e = cerf(Complex64::new(1.0, 1.0));
/// assert!((e.re - 1.3161512816979476).abs() < 1e-14);
/// assert!((e.im - 0.19045346923783471).abs() < 1e-14);
/// ```
pub fn cerf(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y == 0.0 {
        return Complex64::new(real::erf(x), y);
    }
    if x == 0.0 {
        return Complex64::new(x, imaginary_axis(y));
    }

    let mz2 = minus_z_squared(x, y);
    if mz2.re < EXP_UNDERFLOW {
        return Complex64::new(if x >= 0.0 { 1.0 } else { -1.0 }, 0.0);
    }

    // Mirror symmetries of w keep the exponentially large and small factors
    // apart; thresholds are repeated per sign to skip an abs() on x.
    if x >= 0.0 {
        if x < ERF_TAYLOR_RE {
            if y.abs() < ERF_TAYLOR_IM {
                return odd_series(z, mz2, &ERF_TAYLOR);
            }
            if mz2.im.abs() < ERF_TAYLOR_ERFI_XY && x < ERF_TAYLOR_ERFI_RE {
                return near_imaginary_axis(x, y);
            }
        }
        1.0 - scaled_kernel(mz2, Complex64::new(-y, x))
    } else {
        if x > -ERF_TAYLOR_RE {
            if y.abs() < ERF_TAYLOR_IM {
                return odd_series(z, mz2, &ERF_TAYLOR);
            }
            if mz2.im.abs() < ERF_TAYLOR_ERFI_XY && x > -ERF_TAYLOR_ERFI_RE {
                return near_imaginary_axis(x, y);
            }
        } else if x.is_nan() {
            return Complex64::new(f64::NAN, if y == 0.0 { 0.0 } else { f64::NAN });
        }
        scaled_kernel(mz2, Complex64::new(y, -x)) - 1.0
    }
}

/// Im erf(iy) = erfi(y), with the exp(y^2) overflow mapped to a signed infinity
#[inline]
pub(crate) fn imaginary_axis(y: f64) -> f64 {
    let y2 = y * y;
    if y2 > ERFI_OVERFLOW {
        if y > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    } else {
        y2.exp() * im_w_of_x(y)
    }
}

/// exp(-z^2) * w(arg), with the exponential split into modulus and phase
///
/// Forming cexp(-z^2) directly can yield Inf * 0 = NaN when the modulus
/// overflows against a tiny w.
#[inline]
fn scaled_kernel(mz2: Complex64, arg: Complex64) -> Complex64 {
    let (sin, cos) = mz2.im.sin_cos();
    mz2.re.exp() * (Complex64::new(cos, sin) * w_of_z(arg))
}

/// Expansion around the imaginary axis for small |x| and small |xy|
///
/// erf(x+iy) = erf(iy) + 2 exp(y^2)/sqrt(pi) *
///   [ x (1 - x^2 (1+2y^2)/3 + x^4 (3+12y^2+4y^4)/30)
///     - i x^2 y (1 - x^2 (3+2y^2)/6) ]
///
/// Summing the two parts separately avoids cancelling erfi(y) against the
/// correction.
fn near_imaginary_axis(x: f64, y: f64) -> Complex64 {
    let x2 = x * x;
    let y2 = y * y;
    let expy2 = y2.exp();
    let [r0, r1, r2, r3, r4, r5] = ERF_ERFI_RE;
    let [i0, i1, i2] = ERF_ERFI_IM;

    let re = expy2
        * x
        * (r0 - x2 * (r1 + r2 * y2) + x2 * x2 * (r3 + y2 * horner_real(y2, &[r4, r5])));
    let im = expy2 * (im_w_of_x(y) - x2 * y * (i0 - x2 * (i1 + i2 * y2)));
    Complex64::new(re, im)
}
