//! External primitives
//!
//! The Faddeeva function w(z) and its real-axis specializations are consumed
//! as opaque evaluators. Every other module goes through these three
//! functions, so the backing implementation can be swapped here alone.

use errorfunctions::{w_with_relerror, RealErrorFunctions};
use num_complex::Complex64;

/// Relative error requested from the kernel; zero selects machine precision.
const KERNEL_RELERR: f64 = 0.0;

/// Faddeeva function w(z) = exp(-z^2) erfc(-iz)
///
/// # Example
/// ```
/// use cerf_core::w_of_z;
/// use num_complex::Complex64;
/// let w = w_of_z(Complex64::new(0.0, 0.0));
/// assert!((w.re - 1.0).abs() < 1e-15);
/// ```
#[inline]
pub fn w_of_z(z: Complex64) -> Complex64 {
    w_with_relerror(z, KERNEL_RELERR)
}

/// Scaled complementary error function erfcx(x) = exp(x^2) erfc(x), real x
#[inline]
pub fn erfcx(x: f64) -> f64 {
    RealErrorFunctions::erfcx(x)
}

/// Imaginary part of w(x) for real x, i.e. 2 * dawson(x) / sqrt(pi)
#[inline]
pub fn im_w_of_x(x: f64) -> f64 {
    RealErrorFunctions::w_im(x)
}
