//! Textual matrix descriptions: the dimension `n` followed by `n * (n + 1)` numbers in row-major
//! order, separated by any whitespace.

use std::{fs::File, io::BufReader, io::Read, path::Path, str::FromStr};

use nalgebra::{DMatrix, RealField};

use crate::{matrix::entry_count, AugmentedMatrix, Error};

fn next_token<I, S>(tokens: &mut I, what: &str) -> Result<S, Error>
where
    I: Iterator<Item = S>,
{
    tokens.next().ok_or_else(|| Error::MalformedInput {
        msg: format!("unexpected end of input, expected {}", what),
    })
}

impl<T> AugmentedMatrix<T>
where
    T: RealField + Copy + FromStr,
{
    /// Parses a matrix from a token stream.
    ///
    /// Only the tokens that make up the matrix are consumed, so the same iterator can be used to
    /// read whatever follows it.
    pub fn from_tokens<I, S>(mut tokens: I) -> Result<Self, Error>
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let token = next_token(&mut tokens, "the dimension")?;
        let dimension = token
            .as_ref()
            .parse::<usize>()
            .ok()
            .filter(|&n| n > 0)
            .ok_or_else(|| Error::MalformedInput {
                msg: format!("'{}' is not a valid dimension", token.as_ref()),
            })?;
        let count = entry_count::<T>(dimension).ok_or_else(|| Error::MalformedInput {
            msg: format!("dimension {} is too large", dimension),
        })?;

        let mut values = Vec::new();
        for k in 0..count {
            let (i, j) = (k / (dimension + 1), k % (dimension + 1));
            let token = next_token(&mut tokens, &format!("the coefficient at ({}, {})", i, j))?;
            let value = token
                .as_ref()
                .parse::<T>()
                .map_err(|_| Error::MalformedInput {
                    msg: format!("'{}' is not a number", token.as_ref()),
                })?;
            values.push(value);
        }

        log::trace!("parsed a {}x{} augmented matrix", dimension, dimension + 1);
        Ok(Self::from_dmatrix(DMatrix::from_row_slice(
            dimension,
            dimension + 1,
            &values,
        )))
    }

    /// Reads a whole stream and parses the matrix it describes. Anything after the matrix is
    /// ignored.
    pub fn load<R: Read>(mut reader: R) -> Result<Self, Error> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_tokens(text.split_whitespace())
    }

    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let file = File::open(path)?;
        Self::load(BufReader::new(file))
    }
}
