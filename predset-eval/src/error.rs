//! Errors raised when configuring an evaluator.

#[derive(err_derive::Error, Debug)]
#[error(no_from)]
pub enum Error {
    #[error(display = "Scan bound must be at least 1, got {}", _0)]
    InvalidBound(i64),
}
