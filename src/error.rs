//! Error handling.
//!
//! Most of the geometry in this crate never fails: degenerate input produces
//! a well-defined fallback value instead. The `try_` variants of those
//! operations and the checked constructors report problems via [`Error`].

use thiserror::Error;


//------------ Error ---------------------------------------------------------

#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    #[error("latitude {0} outside of [-90, 90]")]
    InvalidLatitude(f64),

    #[error("longitude {0} outside of [-180, 180]")]
    InvalidLongitude(f64),

    #[error("need at least {needed} points, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    #[error("viewport span must be positive")]
    EmptySpan,

    #[error("viewport size must be positive")]
    EmptySize,
}

impl Error {
    /// Checks that a point list has at least `needed` points.
    pub(crate) fn check_len(got: usize, needed: usize) -> Result<(), Self> {
        if got < needed {
            Err(Error::TooFewPoints { needed, got })
        }
        else {
            Ok(())
        }
    }
}
