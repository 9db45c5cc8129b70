//! Complex Dawson function D(z) = sqrt(pi)/2 * exp(-z^2) * erfi(z)
//!
//! D decays instead of saturating, so the closed form built on w(z) loses
//! digits both near the origin and along the real axis. Near the axis the
//! value is expanded in powers of y around the real-axis value D(x). For
//! large |x|, D(x) itself comes from a continued fraction whose leading
//! terms nearly cancel, so the expansion switches to a rational form with
//! the denominators already cleared.

use num_complex::Complex64;

use super::constants::*;
use super::minus_z_squared;
use crate::constants::SQRT_PI_2;
use crate::kernel::{erfcx, im_w_of_x, w_of_z};
use crate::math::series::{horner_real, odd_series};

/// Compute Dawson's integral D(z) for complex z
///
/// # Example
/// ```
/// use cerf_core::cdawson;
/// use num_complex::Complex64;
/// let d = cdawson(Complex64::new(1.0, 0.0));
/// assert!((d.re - 0.5380795069127684).abs() < 1e-15);
/// ```
pub fn cdawson(z: Complex64) -> Complex64 {
    let (x, y) = (z.re, z.im);

    if y == 0.0 {
        return Complex64::new(SQRT_PI_2 * im_w_of_x(x), -y);
    }
    if x == 0.0 {
        return Complex64::new(x, imaginary_axis(y));
    }

    let mz2 = minus_z_squared(x, y);

    // w is only evaluated in the upper half plane, mirrored through -z below
    if y >= 0.0 {
        if y < DAWSON_NEAR_AXIS_IM {
            if let Some(d) = near_real_axis(z, mz2) {
                return d;
            }
        }
        rotate(mz2.exp() - w_of_z(z))
    } else {
        if y > -DAWSON_NEAR_AXIS_IM {
            if let Some(d) = near_real_axis(z, mz2) {
                return d;
            }
        } else if y.is_nan() {
            return Complex64::new(if x == 0.0 { 0.0 } else { f64::NAN }, f64::NAN);
        }
        rotate(w_of_z(-z) - mz2.exp())
    }
}

/// sqrt(pi)/2 * (-i) * res
#[inline]
fn rotate(res: Complex64) -> Complex64 {
    SQRT_PI_2 * Complex64::new(-res.im, res.re)
}

/// Im D(iy) = sqrt(pi)/2 * exp(y^2) erf(y)
fn imaginary_axis(y: f64) -> f64 {
    let y2 = y * y;
    if y2 < DAWSON_AXIS_TAYLOR_Y2 {
        return y * horner_real(y2, &DAWSON_TAYLOR);
    }
    // exp(y^2) erf(y) = exp(y^2) - erfcx(y), mirrored for y < 0
    SQRT_PI_2
        * if y >= 0.0 {
            y2.exp() - erfcx(y)
        } else {
            erfcx(-y) - y2.exp()
        }
}

/// Series forms for |y| < 5e-3, or `None` if the closed form should be used
#[inline]
fn near_real_axis(z: Complex64, mz2: Complex64) -> Option<Complex64> {
    if z.re.abs() < DAWSON_TAYLOR_RE {
        Some(odd_series(z, mz2, &DAWSON_TAYLOR))
    } else if mz2.im.abs() < DAWSON_REALAXIS_XY {
        Some(real_axis_correction(z.re, z.im))
    } else {
        None
    }
}

/// D(x + iy) for small |y| and small |xy|, expanded around the real axis
fn real_axis_correction(x: f64, y: f64) -> Complex64 {
    let x2 = x * x;
    if x2 > DAWSON_ASYMPTOTIC_X2 {
        asymptotic(x, y, x2)
    } else if x2 > DAWSON_CF_X2 {
        continued_fraction(x, y, x2)
    } else {
        taylor_in_y(x, y, x2)
    }
}

/// Degree-4 correction in y around D(x), for |x| <= 40
fn taylor_in_y(x: f64, y: f64, x2: f64) -> Complex64 {
    let d = SQRT_PI_2 * im_w_of_x(x);
    let dx = d * x;
    let y2 = y * y;

    let re = d
        + y2 * (d + x - 2.0 * d * x2)
        + y2 * y2
            * (d * (0.5 - x2 * (2.0 - TWO_THIRDS * x2)) + x * (FIVE_SIXTHS - ONE_THIRD * x2));
    let im = y
        * (1.0 - 2.0 * dx
            + y2 * TWO_THIRDS * (1.0 - x2 - dx * (3.0 - 2.0 * x2))
            + y2 * y2
                * (FOUR_FIFTEENTHS
                    - x2 * (0.6 - TWO_FIFTEENTHS * x2)
                    - dx * (1.0 - x2 * (FOUR_THIRDS - FOUR_FIFTEENTHS * x2))));
    Complex64::new(re, im)
}

/// Six-term continued fraction with cleared denominators, for 40 < |x| <= 5e7
fn continued_fraction(x: f64, y: f64, x2: f64) -> Complex64 {
    let y2 = y * y;
    let scale = 1.0 / horner_real(x2, &DAWSON_CF_DEN);
    let re = x * (horner_real(x2, &DAWSON_CF_RE) + y2 * (18.0 - 4.0 * x2 + 4.0 * y2));
    let im = y * (horner_real(x2, &DAWSON_CF_IM) + y2 * (4.0 * x2 - 10.0 - 4.0 * y2));
    Complex64::new(scale * re, scale * im)
}

/// One-term real and two-term imaginary expansion, for |x| > 5e7
///
/// Higher powers of x would overflow here.
fn asymptotic(x: f64, y: f64, x2: f64) -> Complex64 {
    let y2 = y * y;
    let xy2 = (x * y) * (x * y);
    let re = (0.5 + y2 * (0.5 + 0.25 * y2 - ONE_SIXTH * xy2)) / x;
    let im = y * (-1.0 + y2 * (-TWO_THIRDS + TWO_FIFTEENTHS * xy2 - FOUR_FIFTEENTHS * y2))
        / (2.0 * x2 - 1.0);
    Complex64::new(re, im)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dawson_axes() {
        let d = cdawson(Complex64::new(0.0, 0.0));
        assert_eq!(d.re, 0.0);
        assert!(d.im == 0.0 && d.im.is_sign_negative());

        let d = cdawson(Complex64::new(0.5, 0.0));
        assert_relative_eq!(d.re, 0.424_436_383_502_022_3, max_relative = 1e-14);

        // D(iy) = i sqrt(pi)/2 exp(y^2) erf(y)
        let d = cdawson(Complex64::new(0.0, 1.0));
        assert_eq!(d.re, 0.0);
        assert_relative_eq!(d.im, 2.030_078_469_278_705, max_relative = 1e-14);
        let d = cdawson(Complex64::new(0.0, -1.0));
        assert_relative_eq!(d.im, -2.030_078_469_278_705, max_relative = 1e-14);
    }

    #[test]
    fn test_dawson_imaginary_axis_taylor_boundary() {
        // y^2 = 2.5e-5 sits on the switch between series and closed form
        let below = imaginary_axis(4.999_999e-3);
        let above = imaginary_axis(5.000_001e-3);
        assert_relative_eq!(below, above, max_relative = 1e-6);
        assert!(below < above);
    }

    #[test]
    fn test_dawson_nan_imaginary_part() {
        let d = cdawson(Complex64::new(0.0, f64::NAN));
        assert_eq!(d.re, 0.0);
        assert!(d.im.is_nan());

        let d = cdawson(Complex64::new(1.0, f64::NAN));
        assert!(d.re.is_nan());
        assert!(d.im.is_nan());
    }

    #[test]
    fn test_real_axis_correction_tiers_agree_at_switch() {
        // each tier is accurate on both sides of its switch point
        let y = 1e-5;
        let a = taylor_in_y(40.0, y, 1600.0);
        let b = continued_fraction(40.0, y, 1600.0);
        assert_relative_eq!(a.re, b.re, max_relative = 1e-14);
        assert_relative_eq!(a.im, b.im, max_relative = 1e-11);

        let x = 5e7;
        let y = 1e-12;
        let a = continued_fraction(x, y, x * x);
        let b = asymptotic(x, y, x * x);
        assert_relative_eq!(a.re, b.re, max_relative = 1e-14);
        assert_relative_eq!(a.im, b.im, max_relative = 1e-14);
    }
}
