//! Error type for the checked API
//!
//! The scalar functions report failure through IEEE-754 special values and
//! never return this type. Only constructors and solvers that can reject
//! their input, such as [`crate::voigt::VoigtProfile`], use it.

use thiserror::Error;

/// Errors raised by the checked API
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CerfError {
    #[error("Invalid {name} width: {value} (must be finite)")]
    InvalidWidth { name: &'static str, value: f64 },

    #[error("Solver did not converge after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

/// Result alias for the checked API
pub type Result<T> = std::result::Result<T, CerfError>;
