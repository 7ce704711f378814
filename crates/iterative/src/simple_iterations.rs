//! The simple-iterations (Jacobi) method.
//!
//! Each equation `i` is solved for its own unknown,
//!
//! ```math
//! x_i = b_i / a_ii - sum_{j != i} (a_ij / a_ii) x_j
//! ```
//!
//! which, written as `x = B - A x` with a zero-diagonal `A`, is iterated from `x(0) = B` until two
//! consecutive iterates differ by at most the requested accuracy in every component.

use augmented::AugmentedMatrix;
use log::{debug, trace};
use nalgebra::DVector;

use crate::{norm_max::NormMax, reorder, Error, IterReal, Solution, Solver, SolverType};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimpleIterations {
    /// maximum number of iterations in a solve attempt, unbounded when `None`
    maxiters: Option<usize>,
}

impl SimpleIterations {
    /// Create a new solver without an iteration limit.
    pub fn new() -> Self {
        Self { maxiters: None }
    }

    /// Bound the number of iterations of each solve.
    ///
    /// Weak diagonal dominance does not rule out iterations that oscillate forever, and an
    /// accuracy of zero may never be met in floating point. With a limit, such solves fail with
    /// [`Error::IterationLimit`] instead of looping.
    pub fn with_max_iterations(mut self, maxiters: usize) -> Self {
        self.maxiters = Some(maxiters);
        self
    }

    pub fn max_iterations(&self) -> Option<usize> {
        self.maxiters
    }
}

/// Rescales row `i` by `1 / a(i, i)` and zeroes the diagonal, so that the row reads
/// `x_i + sum_{j != i} a(i, j) x_j = b_i` with the identity moved out of the coefficients.
fn normalize<T: IterReal>(matrix: &mut AugmentedMatrix<T>) -> Result<(), Error> {
    let n = matrix.dimension();
    for i in 0..n {
        let divisor = matrix.get(i, i)?;
        matrix.set(i, i, T::zero())?;
        for j in 0..=n {
            let value = matrix.get(i, j)?;
            matrix.set(i, j, value / divisor)?;
        }
    }
    Ok(())
}

impl<T: IterReal> Solver<T> for SimpleIterations {
    fn get_type(&self) -> SolverType {
        SolverType::SimpleIterations
    }

    fn solve_in_place(
        &self,
        matrix: &mut AugmentedMatrix<T>,
        accuracy: T,
    ) -> Result<Solution<T>, Error> {
        if !(accuracy >= T::zero() && accuracy <= T::one()) {
            return Err(Error::InvalidAccuracy {
                accuracy: accuracy.to_f64().unwrap_or(f64::NAN),
            });
        }

        // a successful reorder puts a non-zero coefficient on every diagonal entry
        if !reorder::make_diagonally_dominant(matrix)? {
            return Err(Error::Unsolvable);
        }
        normalize(matrix)?;

        let mat_a = matrix.coefficients().clone_owned();
        let b: DVector<T> = matrix.rhs().clone_owned();

        let mut x = b.clone();
        let mut x_next = b.clone();
        let mut iterations = 0;

        loop {
            x.copy_from(&x_next);

            // x_next = b - A x
            x_next.copy_from(&b);
            x_next.gemv(-T::one(), &mat_a, &x, T::one());
            iterations += 1;

            let delta = (&x - &x_next).norm_max();
            trace!("iteration {}: delta={:?}", iterations, delta);

            // a NaN delta ends the loop, and the non-finite iterate is returned as is
            if !(delta > accuracy) {
                debug!(
                    "converged after {} iterations, delta={:?}",
                    iterations, delta
                );
                break;
            }

            if let Some(maxiters) = self.maxiters {
                if iterations >= maxiters {
                    return Err(Error::IterationLimit {
                        iterations,
                        delta: delta.to_f64().unwrap_or(f64::NAN),
                    });
                }
            }
        }

        let error = (&x - &x_next).abs();
        Ok(Solution::new(x_next, iterations, error))
    }
}
