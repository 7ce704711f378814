use nalgebra::{DMatrix, RealField};
use rand::{
    distributions::{uniform::SampleUniform, Distribution, Uniform},
    Rng,
};

use crate::{matrix::entry_count, AugmentedMatrix, Error};

impl<T> AugmentedMatrix<T>
where
    T: RealField + Copy + SampleUniform,
{
    /// Fills a `dimension x (dimension + 1)` matrix with values drawn uniformly from `[min, max)`.
    ///
    /// The generator is supplied by the caller; seed it to get reproducible systems.
    pub fn generate_random<R>(dimension: usize, min: T, max: T, rng: &mut R) -> Result<Self, Error>
    where
        R: Rng + ?Sized,
    {
        if dimension == 0 {
            return Err(Error::InvalidData {
                msg: "dimension must be at least 1".to_owned(),
            });
        }
        if entry_count::<T>(dimension).is_none() {
            return Err(Error::InvalidData {
                msg: format!("dimension {} is too large", dimension),
            });
        }
        if !(min <= max) || !(max - min).is_finite() {
            return Err(Error::InvalidData {
                msg: format!("[{:?}, {:?}) is not a valid range", min, max),
            });
        }

        let data = if min == max {
            DMatrix::from_element(dimension, dimension + 1, min)
        } else {
            let dist = Uniform::new(min, max);
            DMatrix::from_fn(dimension, dimension + 1, |_, _| dist.sample(&mut *rng))
        };

        Ok(Self::from_dmatrix(data))
    }
}
