//! Complex complementary error function erfc(z)

use num_complex::Complex64;

use super::minus_z_squared;
use crate::constants::{ERFI_OVERFLOW, EXP_UNDERFLOW};
use crate::kernel::{im_w_of_x, w_of_z};
use crate::math::real;

/// Compute erfc(z) = 1 - erf(z), the complex complementary error function
///
/// Evaluated directly rather than by subtraction, so it stays accurate where
/// erf(z) is close to 1.
///
/// # Example
/// ```
/// use cerf_core::cerfc;
/// use num_complex::Complex64;
/// assert_eq!(cerfc(Complex64::new(30.0, 0.0)).re, 0.0);
/// ```
pub fn cerfc(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if x == 0.0 {
        return Complex64::new(1.0, imaginary_axis(y));
    }
    if y == 0.0 {
        // erfc = 1 - erf flips the sign of the zero imaginary part
        return Complex64::new(real::erfc(x), -y);
    }

    let mz2 = minus_z_squared(x, y);
    if mz2.re < EXP_UNDERFLOW {
        return Complex64::new(if x >= 0.0 { 0.0 } else { 2.0 }, 0.0);
    }

    // Not reached near the origin, so the complex exponential is safe here.
    if x >= 0.0 {
        mz2.exp() * w_of_z(Complex64::new(-y, x))
    } else {
        2.0 - mz2.exp() * w_of_z(Complex64::new(y, -x))
    }
}

/// Im erfc(iy) = -erfi(y), with the exp(y^2) overflow mapped to a signed infinity
#[inline]
fn imaginary_axis(y: f64) -> f64 {
    let y2 = y * y;
    if y2 > ERFI_OVERFLOW {
        if y > 0.0 {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    } else {
        -y2.exp() * im_w_of_x(y)
    }
}
