use thiserror::Error;

/// Result type of the public packing and search operations.
pub type Result<T> = std::result::Result<T, StowageError>;

/// Failures of the public operations.
/// Items that cannot be packed are not failures, they are reported in [`PackResult::errors`](crate::entities::PackResult::errors).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StowageError {
    /// Input violates the contract of the operation (empty item list, non-positive extents, negative weights...)
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

macro_rules! ensure_input {
    ($cond:expr, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::error::StowageError::InvalidInput(format!($($arg)+)));
        }
    };
}

pub(crate) use ensure_input;
