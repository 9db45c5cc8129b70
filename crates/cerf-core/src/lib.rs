//! cerf-core: Complex error functions
//!
//! Evaluates erf, erfc, erfcx, erfi, Dawson's integral and the Voigt profile
//! to near machine precision over the whole complex plane, on top of the
//! Faddeeva function w(z).
//!
//! ## Modules
//!
//! - `dispatch` - Region selection for complex erf, erfc and Dawson
//! - `math` - Real-axis functions and simple rotations of w(z)
//! - `kernel` - The external w(z), erfcx(x) and Im w(x) evaluators
//! - `voigt` - Voigt line shape and its half width
//! - `traits` - Method-call syntax on `Complex64`
//!
//! Special values are the error channel: NaN and signed infinities flow
//! through every function, and the sign of a zero component on the axes is
//! preserved.

pub mod constants;
pub mod dispatch;
pub mod error;
pub mod kernel;
pub mod math;
pub mod traits;
pub mod voigt;

pub use dispatch::{cdawson, cerf, cerfc};
pub use error::{CerfError, Result};
pub use kernel::{erfcx, im_w_of_x, w_of_z};
pub use math::{cerfcx, cerfi, dawson, erf, erfc, erfi, im_w_of_z, re_w_of_z};
pub use traits::ComplexErrorFunctions;
pub use voigt::{voigt, VoigtProfile};
