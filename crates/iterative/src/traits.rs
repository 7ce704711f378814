use augmented::AugmentedMatrix;
use nalgebra::{RealField, Scalar};
use num_traits::NumCast;

use crate::{Error, Solution, SolverType};

/// Scalar types the iterative solvers work over.
pub trait IterReal: Scalar + RealField + Copy + NumCast {
    fn two() -> Self;
}

impl IterReal for f64 {
    fn two() -> Self {
        2.0
    }
}

impl IterReal for f32 {
    fn two() -> Self {
        2.0
    }
}

pub trait Solver<T: IterReal> {
    fn get_type(&self) -> SolverType;

    /// Solves the system described by `matrix` to within `accuracy`, the largest allowed
    /// per-component difference between two consecutive iterates.
    ///
    /// ## Arguments
    /// * `matrix` the augmented matrix `[A | b]`. Its contents are consumed: on return (successful
    ///     or not) the rows may have been reordered and rescaled. Clone it first if the original
    ///     system is still needed.
    /// * `accuracy` the stopping tolerance, must lie in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// * `Err(Error::InvalidAccuracy)` - `accuracy` is outside of `[0, 1]`.
    /// * `Err(Error::Unsolvable)` - the method cannot guarantee convergence for this system.
    /// * `Err(_)` - the iteration failed to converge.
    fn solve_in_place(
        &self,
        matrix: &mut AugmentedMatrix<T>,
        accuracy: T,
    ) -> Result<Solution<T>, Error>;

    /// Solves the system, taking ownership of the matrix. See [`Solver::solve_in_place`].
    fn solve(&self, mut matrix: AugmentedMatrix<T>, accuracy: T) -> Result<Solution<T>, Error> {
        self.solve_in_place(&mut matrix, accuracy)
    }
}
