use nalgebra::{Dim, Matrix, RealField, Scalar, Storage};

/// Infinity norm of a vector or matrix, `max |x_i|`.
pub trait NormMax<T> {
    fn norm_max(&self) -> T
    where
        T: RealField;
}

impl<T, R: Dim, C: Dim, S> NormMax<T> for Matrix<T, R, C, S>
where
    T: Scalar + RealField + Copy,
    S: Storage<T, R, C>,
{
    /// A NaN entry makes the norm NaN.
    // `x != x` is the NaN test available through `PartialEq` alone.
    #[allow(clippy::eq_op)]
    fn norm_max(&self) -> T {
        self.iter().fold(T::zero(), |acc, &x| {
            let x = x.abs();
            if x > acc || x != x {
                x
            } else {
                acc
            }
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use nalgebra::{vector, DVector};

    #[test]
    fn test_norm_max() {
        const LENGTH: usize = 32;

        let x = DVector::from_element(LENGTH, -0.5);
        assert_eq!(x.norm_max(), 0.5);

        let y = vector![1.0, -3.0, 2.0];
        assert_eq!(y.norm_max(), 3.0);
    }

    #[test]
    fn test_norm_max_nan() {
        let x = vector![1.0, f64::NAN, 2.0];
        assert!(x.norm_max().is_nan());

        let y = vector![f64::NAN, f64::INFINITY];
        assert!(y.norm_max().is_nan());
    }

    #[test]
    fn test_norm_max_empty() {
        let x = DVector::<f64>::zeros(0);
        assert_eq!(x.norm_max(), 0.0);
    }
}
