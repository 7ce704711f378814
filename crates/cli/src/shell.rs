use std::io::{self, BufRead, Write};

use augmented::AugmentedMatrix;
use iterative::{SimpleIterations, Solver};
use log::{info, warn};
use rand::rngs::StdRng;
use thiserror::Error;

use crate::tokens::Tokens;

const COMMANDS: [(&str, &str); 3] = [
    ("solve", "Solves linear equations system."),
    ("exit", "Exit solver."),
    ("help", "Prints help."),
];

/// Failures of a single `solve` dialog. Everything but `Io` is reported to the user and the shell
/// carries on.
#[derive(Debug, Error)]
enum DialogError {
    #[error("Unknown command!")]
    UnknownChoice,

    #[error("Error with accuracy value!")]
    Accuracy,

    #[error("Error with {0} value!")]
    Number(&'static str),

    #[error("Unexpected end of input!")]
    EndOfInput,

    #[error(transparent)]
    Matrix(#[from] augmented::Error),

    #[error(transparent)]
    Solver(#[from] iterative::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Shell<R, W> {
    tokens: Tokens<R>,
    out: W,
    solver: SimpleIterations,
    rng: StdRng,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, solver: SimpleIterations, rng: StdRng) -> Self {
        Self {
            tokens: Tokens::new(input),
            out,
            solver,
            rng,
        }
    }

    /// Reads and executes commands until `exit` or the end of the input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "Welcome to the simple-iterations solver for systems of linear equations!"
        )?;
        writeln!(self.out, "Print \"help\" to get info about possible commands.")?;

        while let Some(token) = self.tokens.next() {
            match token.as_str() {
                "solve" => self.solve_dialog()?,
                "help" => {
                    for (command, description) in COMMANDS {
                        writeln!(self.out, "\"{}\" - {}", command, description)?;
                    }
                }
                "exit" => break,
                _ => writeln!(self.out, "Unknown command!")?,
            }
        }
        self.out.flush()
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn solve_dialog(&mut self) -> io::Result<()> {
        match self.solve_once() {
            Ok(()) => Ok(()),
            Err(DialogError::Io(e)) => Err(e),
            Err(e) => {
                warn!("solve failed: {:?}", e);
                writeln!(self.out, "{}", e)
            }
        }
    }

    fn next_token(&mut self) -> Result<String, DialogError> {
        self.tokens.next().ok_or(DialogError::EndOfInput)
    }

    fn next_number<T: std::str::FromStr>(&mut self, what: &'static str) -> Result<T, DialogError> {
        self.next_token()?
            .parse()
            .map_err(|_| DialogError::Number(what))
    }

    fn read_matrix(&mut self) -> Result<AugmentedMatrix<f64>, DialogError> {
        writeln!(
            self.out,
            "To solve system of linear equations choose input method:"
        )?;
        writeln!(self.out, "1) Read from file")?;
        writeln!(self.out, "2) User input")?;
        writeln!(self.out, "3) Generate matrix")?;

        let matrix = match self.next_token()?.as_str() {
            "1" => {
                writeln!(self.out, "Enter file path:")?;
                let path = self.next_token()?;
                info!("loading matrix from {}", path);
                AugmentedMatrix::<f64>::load_path(path)?
            }
            "2" => {
                writeln!(self.out, "Enter matrix dimension and coefficients:")?;
                AugmentedMatrix::<f64>::from_tokens(&mut self.tokens)?
            }
            "3" => {
                writeln!(self.out, "Enter matrix dimension:")?;
                let dimension: usize = self.next_number("dimension")?;
                writeln!(self.out, "Enter coefficients min value:")?;
                let min: f64 = self.next_number("min")?;
                writeln!(self.out, "Enter coefficients max value:")?;
                let max: f64 = self.next_number("max")?;
                AugmentedMatrix::<f64>::generate_random(dimension, min, max, &mut self.rng)?
            }
            _ => return Err(DialogError::UnknownChoice),
        };
        Ok(matrix)
    }

    fn solve_once(&mut self) -> Result<(), DialogError> {
        let matrix = self.read_matrix()?;

        writeln!(self.out, "Enter accuracy: ")?;
        let accuracy: f64 = self
            .next_token()?
            .parse()
            .map_err(|_| DialogError::Accuracy)?;

        writeln!(self.out, "Matrix:")?;
        writeln!(self.out, "{}", matrix)?;

        info!(
            "solving with {:?}",
            Solver::<f64>::get_type(&self.solver)
        );
        let solution = self.solver.solve(matrix, accuracy)?;
        info!("solved in {} iterations", solution.iterations());
        writeln!(self.out, "{}", solution)?;
        Ok(())
    }
}
