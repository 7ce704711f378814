//! Iterative solvers for square linear systems given as augmented matrices.
//!
//! ```
//! use augmented::AugmentedMatrix;
//! use iterative::{SimpleIterations, Solver};
//!
//! // 4x + y = 9, x + 3y = 8
//! let matrix = AugmentedMatrix::<f64>::new(2, &[[4.0, 1.0, 9.0], [1.0, 3.0, 8.0]]).unwrap();
//! let solution = SimpleIterations::new().solve(matrix, 1e-4).unwrap();
//! assert!((solution.answers()[0] - 19.0 / 11.0).abs() < 1e-3);
//! ```
use thiserror::Error;

pub mod norm_max;
pub mod reorder;
pub mod simple_iterations;
pub mod solution;
pub mod traits;

pub use simple_iterations::SimpleIterations;
pub use solution::Solution;
pub use traits::*;

/// The family of method a [`Solver`] implements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolverType {
    /// Fixed-point iteration `x = B - A x` on the diagonally normalised system.
    SimpleIterations,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid accuracy {accuracy}, it must lie in [0, 1]")]
    InvalidAccuracy { accuracy: f64 },

    /// No row permutation makes the system diagonally dominant, so convergence of the method is
    /// not guaranteed.
    #[error("Impossible to solve: the system cannot be made diagonally dominant")]
    Unsolvable,

    /// The configured iteration limit was reached before the iterates settled.
    #[error("No convergence after {iterations} iterations (last difference {delta:e})")]
    IterationLimit { iterations: usize, delta: f64 },

    #[error(transparent)]
    Matrix(#[from] augmented::Error),
}
