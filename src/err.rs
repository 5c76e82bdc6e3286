/*!
The error type for the few operations that check their arguments.

Everything else in this crate lets IEEE 754 special values (NaN and the
infinities) flow through as ordinary data.
*/

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum CxError {
    #[error("magnitude cannot be negative (got {0})")]
    NegativeMagnitude(f64),

    #[error("number of digits must be greater than or equal to zero (got {0})")]
    NegativeDigits(i32),
}

pub type Result<T> = std::result::Result<T, CxError>;
