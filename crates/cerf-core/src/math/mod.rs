//! Real-axis functions, kernel transforms and shared series helpers

pub mod real;
pub mod series;
pub mod transforms;

pub use real::{dawson, erf, erfc, erfi};
pub use transforms::{cerfcx, cerfi, im_w_of_z, re_w_of_z};
