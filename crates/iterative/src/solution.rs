use std::fmt;

use nalgebra::{DVector, Scalar};

/// The outcome of a successful solve.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<T: Scalar> {
    answers: DVector<T>,
    iterations: usize,
    error: DVector<T>,
}

impl<T: Scalar> Solution<T> {
    /// ## Arguments
    /// * `answers` the last iterate.
    /// * `iterations` how many times the update was applied.
    /// * `error` per-component absolute difference between the last two iterates.
    pub fn new(answers: DVector<T>, iterations: usize, error: DVector<T>) -> Self {
        Self {
            answers,
            iterations,
            error,
        }
    }

    pub fn answers(&self) -> &DVector<T> {
        &self.answers
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn error(&self) -> &DVector<T> {
        &self.error
    }
}

impl<T> fmt::Display for Solution<T>
where
    T: Scalar + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Number of iterations: {}", self.iterations)?;
        writeln!(f, "Answers:")?;
        for x in self.answers.iter() {
            writeln!(f, "{}", x)?;
        }
        writeln!(f, "Errors:")?;
        for e in self.error.iter() {
            writeln!(f, "{}", e)?;
        }
        Ok(())
    }
}
