//! Method-call syntax for the complex functions
//!
//! ```
//! use cerf_core::ComplexErrorFunctions;
//! use num_complex::Complex64;
//! let z = Complex64::new(0.5, -0.25);
//! let sum = z.erf() + z.erfc();
//! assert!((sum.re - 1.0).abs() < 1e-15 && sum.im.abs() < 1e-15);
//! ```

use num_complex::Complex64;

use crate::dispatch::{cdawson, cerf, cerfc};
use crate::kernel::w_of_z;
use crate::math::transforms::{cerfcx, cerfi};

/// Error function family on complex arguments
pub trait ComplexErrorFunctions {
    fn erf(self) -> Self;
    fn erfc(self) -> Self;
    fn erfcx(self) -> Self;
    fn erfi(self) -> Self;
    fn dawson(self) -> Self;
    fn faddeeva_w(self) -> Self;
}

impl ComplexErrorFunctions for Complex64 {
    #[inline]
    fn erf(self) -> Self {
        cerf(self)
    }

    #[inline]
    fn erfc(self) -> Self {
        cerfc(self)
    }

    #[inline]
    fn erfcx(self) -> Self {
        cerfcx(self)
    }

    #[inline]
    fn erfi(self) -> Self {
        cerfi(self)
    }

    #[inline]
    fn dawson(self) -> Self {
        cdawson(self)
    }

    #[inline]
    fn faddeeva_w(self) -> Self {
        w_of_z(self)
    }
}
