use std::fmt;

/// Precondition violations, detected at call boundaries before any buffer
/// is allocated. A rejected call produces no partial output.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Width or height was zero.
    InvalidDimension { width: usize, height: usize },
    /// Dot density outside [0, 1] (or NaN).
    InvalidProbability(f64),
    /// A supplied sample buffer does not match width × height.
    DimensionMismatch {
        width: usize,
        height: usize,
        len: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidDimension { width, height } => {
                write!(f, "invalid image dimensions {width}x{height}")
            }
            Error::InvalidProbability(p) => {
                write!(f, "dot density {p} is outside [0, 1]")
            }
            Error::DimensionMismatch { width, height, len } => {
                write!(
                    f,
                    "depth field of {len} samples does not match {width}x{height}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
