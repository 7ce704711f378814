//! Row reordering towards diagonal dominance.
//!
//! The simple-iterations method is guaranteed to converge when the coefficient part of the system
//! is diagonally dominant, i.e. for every row `i`
//!
//! ```math
//! 2 |a(i, i)| >= sum_j |a(i, j)|
//! ```
//!
//! with the inequality strict for at least one row. This is a sufficient condition only; systems
//! that fail it may still converge, but are rejected here.
use augmented::AugmentedMatrix;
use log::debug;

use crate::{Error, IterReal};

/// Finds a row order that makes `matrix` diagonally dominant.
///
/// Rows are visited in their original order. Each row claims, among the diagonal slots not taken
/// yet, the column holding its largest absolute coefficient (the first one on ties), provided
/// that coefficient dominates the rest of the row. The search is greedy: an earlier row never
/// gives up its slot for a later one.
///
/// Returns `order` such that new row `k` is the old row `order[k]`, or `None` if some row
/// cannot be placed or no row dominates strictly.
pub fn dominant_order<T: IterReal>(matrix: &AugmentedMatrix<T>) -> Option<Vec<usize>> {
    let coefficients = matrix.coefficients();
    let mut diagonal: Vec<Option<usize>> = vec![None; matrix.dimension()];
    let mut strict = false;

    for (i, row) in coefficients.row_iter().enumerate() {
        let mut best: Option<(usize, T)> = None;
        let mut sum = T::zero();

        for (j, &value) in row.iter().enumerate() {
            let magnitude = value.abs();
            if diagonal[j].is_none() && magnitude > best.map_or(T::zero(), |(_, max)| max) {
                best = Some((j, magnitude));
            }
            sum += magnitude;
        }

        match best {
            Some((m, max)) if max * T::two() >= sum => {
                strict |= max * T::two() > sum;
                diagonal[m] = Some(i);
            }
            _ => {
                debug!("row {} does not dominate any free diagonal slot", i);
                return None;
            }
        }
    }

    if !strict {
        debug!("no row is strictly diagonally dominant");
        return None;
    }

    let order = diagonal.into_iter().collect::<Option<Vec<_>>>();
    debug!("diagonally dominant row order: {:?}", order);
    order
}

/// Reorders the rows of `matrix` in place so that it becomes diagonally dominant.
///
/// Returns `Ok(false)`, leaving `matrix` untouched, when no such order is found.
pub fn make_diagonally_dominant<T: IterReal>(
    matrix: &mut AugmentedMatrix<T>,
) -> Result<bool, Error> {
    match dominant_order(matrix) {
        Some(order) => {
            matrix.permute_rows(&order)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix<const N: usize>(rows: &[[f64; N]]) -> AugmentedMatrix<f64> {
        AugmentedMatrix::<f64>::new(rows.len(), rows).unwrap()
    }

    #[test]
    fn test_swaps_rows() {
        let mut m = matrix(&[[1.0, 3.0, 8.0], [4.0, 1.0, 9.0]]);
        assert_eq!(dominant_order(&m), Some(vec![1, 0]));
        assert!(make_diagonally_dominant(&mut m).unwrap());
        assert_eq!(m, matrix(&[[4.0, 1.0, 9.0], [1.0, 3.0, 8.0]]));
    }

    #[test]
    fn test_three_rows() {
        let mut m = matrix(&[
            [1.0, 1.0, 5.0, 7.0],
            [10.0, 2.0, 1.0, 13.0],
            [1.0, 6.0, 2.0, 9.0],
        ]);
        assert!(make_diagonally_dominant(&mut m).unwrap());
        assert_eq!(
            m,
            matrix(&[
                [10.0, 2.0, 1.0, 13.0],
                [1.0, 6.0, 2.0, 9.0],
                [1.0, 1.0, 5.0, 7.0],
            ])
        );
    }

    #[test]
    fn test_already_dominant_is_identity() {
        let mut m = matrix(&[
            [5.0, 1.0, 1.0, 1.0],
            [1.0, 4.0, 2.0, 2.0],
            [0.0, 1.0, 1.0, 3.0],
        ]);
        let original = m.clone();
        assert_eq!(dominant_order(&m), Some(vec![0, 1, 2]));
        assert!(make_diagonally_dominant(&mut m).unwrap());
        assert_eq!(m, original);
        // and reordering again changes nothing
        assert!(make_diagonally_dominant(&mut m).unwrap());
        assert_eq!(m, original);
    }

    #[test]
    fn test_uniform_rows_rejected() {
        let mut m = matrix(&[[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]);
        assert_eq!(dominant_order(&m), None);
        assert!(!make_diagonally_dominant(&mut m).unwrap());
        assert_eq!(m, matrix(&[[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]));
    }

    #[test]
    fn test_zero_row_rejected() {
        let m = matrix(&[[0.0, 0.0, 1.0], [0.0, 3.0, 1.0]]);
        assert_eq!(dominant_order(&m), None);
    }

    #[test]
    fn test_ties_keep_first_column() {
        // row 0 ties between columns 0 and 1 and takes column 0, which leaves no slot row 1
        // can dominate
        let m = matrix(&[[2.0, 2.0, 1.0], [3.0, 1.0, 1.0]]);
        assert_eq!(dominant_order(&m), None);

        let m = matrix(&[[2.0, 2.0, 1.0], [1.0, 3.0, 1.0]]);
        assert_eq!(dominant_order(&m), Some(vec![0, 1]));
    }

    #[test]
    fn test_negative_coefficients() {
        let m = matrix(&[[1.0, -5.0, 2.0], [-3.0, 1.0, 0.0]]);
        assert_eq!(dominant_order(&m), Some(vec![1, 0]));
    }

    #[test]
    fn test_single_equation() {
        assert_eq!(dominant_order(&matrix(&[[2.0, 6.0]])), Some(vec![0]));
        assert_eq!(dominant_order(&matrix(&[[0.0, 6.0]])), None);
    }
}
