//! Error types for optionlab.
//!
//! Every public pricing function validates its inputs at the boundary and
//! reports failures through the single [`Error`] enum below. The `ensure!`
//! and `fail!` macros keep the validation sites to one line each.

use thiserror::Error;

/// The top-level error type used throughout optionlab.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A market scalar or engine parameter is out of its domain
    /// (nonpositive spot, zero volatility, zero steps, …).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The inputs are individually valid but produce a degenerate numerical
    /// model, e.g. a lattice up-probability outside `[0, 1]`.
    #[error("numerically degenerate: {0}")]
    NumericDegenerate(String),

    /// The requested calculation is not supported.
    #[error("not implemented: {0}")]
    Unimplemented(String),
}

impl Error {
    /// `true` for [`Error::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// `true` for [`Error::NumericDegenerate`].
    pub fn is_numeric_degenerate(&self) -> bool {
        matches!(self, Error::NumericDegenerate(_))
    }
}

/// Shorthand `Result` type used throughout optionlab.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidInput(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ol_core::{ensure, errors::Error};
/// fn positive(x: f64) -> ol_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert_eq!(
///     positive(-1.0),
///     Err(Error::InvalidInput("x must be positive, got -1".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::NumericDegenerate(...))` immediately.
///
/// # Example
/// ```
/// use ol_core::{fail, errors::Error};
/// fn always_err() -> ol_core::errors::Result<()> {
///     fail!("probability {} outside [0, 1]", 1.2);
/// }
/// assert!(always_err().unwrap_err().is_numeric_degenerate());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::NumericDegenerate(format!($($msg)*)))
    };
}
