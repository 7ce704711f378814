//! Dense augmented matrices `[A | b]` describing square linear systems `Ax = b`.
//!
//! The right-hand side lives in the last column, so a system of `dimension` equations is
//! stored as a `dimension x (dimension + 1)` grid.
mod load;
mod matrix;
mod random;

pub use matrix::AugmentedMatrix;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Element access outside of `0 <= row < dimension`, `0 <= col <= dimension`.
    #[error("Wrong bounds: {{row: {row}, col: {col}}}")]
    OutOfRange { row: usize, col: usize },

    /// Data of the wrong shape was handed to a constructor or to a bulk replace.
    #[error("Wrong data: {msg}")]
    InvalidData { msg: String },

    /// A textual matrix description could not be parsed.
    #[error("Malformed matrix input: {msg}")]
    MalformedInput { msg: String },

    #[error("Unable to load matrix: {0}")]
    Io(#[from] std::io::Error),
}
