use std::fmt;

use nalgebra::{DMatrix, DMatrixView, DVectorView, RealField, Scalar};

use crate::Error;

/// A square system of `dimension` linear equations, stored as the augmented matrix `[A | b]`.
///
/// Column `dimension` holds the right-hand side. The shape is fixed at construction; the contents
/// may be rewritten in place (rows permuted or rescaled) by whoever owns the matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct AugmentedMatrix<T: Scalar> {
    dimension: usize,
    data: DMatrix<T>,
}

/// Number of entries of a `dimension x (dimension + 1)` matrix of `T`, or `None` when that many
/// entries cannot be addressed or allocated.
pub(crate) fn entry_count<T>(dimension: usize) -> Option<usize> {
    let count = dimension.checked_add(1)?.checked_mul(dimension)?;
    count
        .checked_mul(std::mem::size_of::<T>())
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .map(|_| count)
}

/// Checks that `rows` describes exactly `dimension` rows of `dimension + 1` entries.
fn check_shape<T, R>(dimension: usize, rows: &[R]) -> Result<(), Error>
where
    R: AsRef<[T]>,
{
    if rows.len() != dimension {
        return Err(Error::InvalidData {
            msg: format!("expected {} rows, got {}", dimension, rows.len()),
        });
    }
    if let Some((i, row)) = rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.as_ref().len() != dimension + 1)
    {
        return Err(Error::InvalidData {
            msg: format!(
                "row {} has {} entries, expected {}",
                i,
                row.as_ref().len(),
                dimension + 1
            ),
        });
    }
    Ok(())
}

impl<T> AugmentedMatrix<T>
where
    T: RealField + Copy,
{
    /// Creates a matrix from explicit rows, each holding `dimension` coefficients followed by the
    /// right-hand side.
    pub fn new<R: AsRef<[T]>>(dimension: usize, rows: &[R]) -> Result<Self, Error> {
        if dimension == 0 {
            return Err(Error::InvalidData {
                msg: "dimension must be at least 1".to_owned(),
            });
        }
        check_shape::<T, R>(dimension, rows)?;

        let data = DMatrix::from_fn(dimension, dimension + 1, |i, j| rows[i].as_ref()[j]);
        Ok(Self { dimension, data })
    }

    /// Creates a matrix from `dimension * (dimension + 1)` values in row-major order.
    pub fn from_row_slice(dimension: usize, data: &[T]) -> Result<Self, Error> {
        if dimension == 0 {
            return Err(Error::InvalidData {
                msg: "dimension must be at least 1".to_owned(),
            });
        }
        if data.len() != dimension * (dimension + 1) {
            return Err(Error::InvalidData {
                msg: format!(
                    "expected {} values, got {}",
                    dimension * (dimension + 1),
                    data.len()
                ),
            });
        }

        Ok(Self {
            dimension,
            data: DMatrix::from_row_slice(dimension, dimension + 1, data),
        })
    }

    pub(crate) fn from_dmatrix(data: DMatrix<T>) -> Self {
        debug_assert_eq!(data.nrows() + 1, data.ncols());
        Self {
            dimension: data.nrows(),
            data,
        }
    }

    /// Number of equations (and unknowns) in the system.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), Error> {
        if row >= self.dimension || col > self.dimension {
            Err(Error::OutOfRange { row, col })
        } else {
            Ok(())
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<T, Error> {
        self.check_bounds(row, col)?;
        Ok(self.data[(row, col)])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), Error> {
        self.check_bounds(row, col)?;
        self.data[(row, col)] = value;
        Ok(())
    }

    /// Overwrites every element with `rows`, which must have the same shape as `self`.
    pub fn replace_all<R: AsRef<[T]>>(&mut self, rows: &[R]) -> Result<(), Error> {
        check_shape::<T, R>(self.dimension, rows)?;

        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.as_ref().iter().enumerate() {
                self.data[(i, j)] = value;
            }
        }
        Ok(())
    }

    /// Reorders the rows so that new row `k` is the old row `order[k]`. Columns, including the
    /// right-hand side, keep their positions.
    pub fn permute_rows(&mut self, order: &[usize]) -> Result<(), Error> {
        let mut seen = vec![false; self.dimension];
        if order.len() != self.dimension {
            return Err(Error::InvalidData {
                msg: format!(
                    "row order has {} entries, expected {}",
                    order.len(),
                    self.dimension
                ),
            });
        }
        for &k in order {
            if k >= self.dimension || seen[k] {
                return Err(Error::InvalidData {
                    msg: format!("{:?} is not a permutation of the rows", order),
                });
            }
            seen[k] = true;
        }

        let rows: Vec<Vec<T>> = order
            .iter()
            .map(|&k| self.data.row(k).iter().copied().collect())
            .collect();
        self.replace_all(&rows)
    }

    /// The square coefficient part `A`.
    pub fn coefficients(&self) -> DMatrixView<'_, T> {
        self.data.columns(0, self.dimension)
    }

    /// The right-hand side column `b`.
    pub fn rhs(&self) -> DVectorView<'_, T> {
        self.data.column(self.dimension)
    }

    /// The whole augmented grid.
    pub fn as_matrix(&self) -> &DMatrix<T> {
        &self.data
    }
}

impl<T> fmt::Display for AugmentedMatrix<T>
where
    T: Scalar + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.row_iter() {
            for value in row.iter() {
                write!(f, "{}\t", value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
