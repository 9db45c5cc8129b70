//! Rotations and projections of the Faddeeva kernel
//!
//! Functions that need no region logic of their own: each is one kernel or
//! dispatcher call followed by a quarter-turn of the argument or result.

use num_complex::Complex64;

use crate::dispatch::cerf;
use crate::kernel::w_of_z;

/// Scaled complementary error function erfcx(z) = exp(z^2) erfc(z) = w(iz)
pub fn cerfcx(z: Complex64) -> Complex64 {
    w_of_z(Complex64::new(-z.im, z.re))
}

/// Imaginary error function erfi(z) = -i erf(iz)
pub fn cerfi(z: Complex64) -> Complex64 {
    let e = cerf(Complex64::new(-z.im, z.re));
    Complex64::new(e.im, -e.re)
}

/// Re w(x + iy)
pub fn re_w_of_z(x: f64, y: f64) -> f64 {
    w_of_z(Complex64::new(x, y)).re
}

/// Im w(x + iy)
pub fn im_w_of_z(x: f64, y: f64) -> f64 {
    w_of_z(Complex64::new(x, y)).im
}
