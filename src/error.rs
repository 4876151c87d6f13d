use thiserror::Error;

use crate::common::io_error_msg;

/// Errors surfaced by the tabulation pipeline.
///
/// Malformed rows, over-long fields and a full table are not errors: they
/// are absorbed while reading and reported through `ReadStats`.
#[derive(Debug, Error)]
pub enum Error {
    /// A sort column argument that is not an integer in `[1, max]`.
    #[error("invalid column '{arg}': please specify a column between 1 and {max}")]
    InvalidColumn { arg: String, max: usize },

    /// Reading input or writing the report failed.
    #[error("{}", io_error_msg(.0))]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidColumn { .. } => 1,
            Error::Io(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
