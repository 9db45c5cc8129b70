//! Region dispatch for the complex error functions
//!
//! erf, erfc and Dawson each partition the complex plane into regions with
//! different error behavior. Every function here is an ordered list of guard
//! clauses: axes and non-finite inputs first, then underflow saturation,
//! then the Taylor regions, and finally the closed form built on w(z).

pub mod constants;
mod dawson;
mod erf;
mod erfc;

pub use dawson::cdawson;
pub use erf::cerf;
pub use erfc::cerfc;

use num_complex::Complex64;

/// -z^2 for z = x + iy
///
/// The real part is factored as (y - x)(x + y) so that it does not overflow
/// before the underflow guard gets to see it.
#[inline]
pub(crate) fn minus_z_squared(x: f64, y: f64) -> Complex64 {
    Complex64::new((y - x) * (x + y), -2.0 * x * y)
}
