//! End-to-end behaviour of the simple-iterations solver on generated systems.

use approx::assert_relative_eq;
use augmented::AugmentedMatrix;
use iterative::{reorder, Error, SimpleIterations, Solver};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// A random system made strictly diagonally dominant, with its rows shuffled so the solver has
/// to find the order itself.
fn dominant_system(dimension: usize, seed: u64) -> AugmentedMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut matrix =
        AugmentedMatrix::<f64>::generate_random(dimension, -10.0, 10.0, &mut rng).unwrap();

    for i in 0..dimension {
        let off_diagonal: f64 = (0..dimension)
            .filter(|&j| j != i)
            .map(|j| matrix.get(i, j).unwrap().abs())
            .sum();
        matrix.set(i, i, off_diagonal + 1.0).unwrap();
    }

    let mut order: Vec<usize> = (0..dimension).collect();
    order.shuffle(&mut rng);
    matrix.permute_rows(&order).unwrap();
    matrix
}

/// `|sum_j a(i, j) x_j - b_i|` for every row of the original system.
fn residuals(matrix: &AugmentedMatrix<f64>, x: &[f64]) -> Vec<f64> {
    let n = matrix.dimension();
    (0..n)
        .map(|i| {
            let lhs: f64 = (0..n).map(|j| matrix.get(i, j).unwrap() * x[j]).sum();
            (lhs - matrix.get(i, n).unwrap()).abs()
        })
        .collect()
}

#[test]
fn converges_within_accuracy() {
    for (seed, dimension) in [(1, 1), (2, 2), (3, 5), (4, 10), (5, 25)] {
        let original = dominant_system(dimension, seed);
        let accuracy = 1e-6;
        let solution = SimpleIterations::new()
            .with_max_iterations(100_000)
            .solve(original.clone(), accuracy)
            .unwrap();

        assert_eq!(solution.answers().len(), dimension);
        assert_eq!(solution.error().len(), dimension);
        assert!(solution.error().iter().all(|&e| e <= accuracy));

        // each row was scaled by its diagonal, which is bounded by the row's absolute sum
        let x: Vec<f64> = solution.answers().iter().copied().collect();
        for (i, r) in residuals(&original, &x).into_iter().enumerate() {
            let row_sum: f64 = (0..dimension)
                .map(|j| original.get(i, j).unwrap().abs())
                .sum();
            assert!(r <= row_sum * accuracy, "row {} residual {}", i, r);
        }
    }
}

#[test]
fn looser_accuracy_never_takes_longer() {
    let original = dominant_system(8, 11);
    let accuracies = [1e-12, 1e-8, 1e-4, 1e-2, 0.5, 1.0];

    let iterations: Vec<usize> = accuracies
        .iter()
        .map(|&accuracy| {
            SimpleIterations::new()
                .with_max_iterations(100_000)
                .solve(original.clone(), accuracy)
                .unwrap()
                .iterations()
        })
        .collect();

    for pair in iterations.windows(2) {
        assert!(pair[0] >= pair[1], "{:?}", iterations);
    }
}

#[test]
fn invalid_accuracy_for_any_matrix() {
    let matrices = [
        dominant_system(3, 21),
        AugmentedMatrix::<f64>::new(2, &[[1.0, 1.0, 1.0], [1.0, 1.0, 1.0]]).unwrap(),
        AugmentedMatrix::<f64>::new(1, &[[0.0, 0.0]]).unwrap(),
    ];
    for matrix in matrices {
        for accuracy in [-1e-9, -1.0, 1.0 + 1e-9, 100.0] {
            assert!(matches!(
                SimpleIterations::new().solve(matrix.clone(), accuracy),
                Err(Error::InvalidAccuracy { .. })
            ));
        }
    }
}

#[test]
fn reorder_is_idempotent() {
    let mut matrix = dominant_system(6, 31);
    assert!(reorder::make_diagonally_dominant(&mut matrix).unwrap());
    let reordered = matrix.clone();

    assert_eq!(
        reorder::dominant_order(&matrix),
        Some((0..6).collect::<Vec<_>>())
    );
    assert!(reorder::make_diagonally_dominant(&mut matrix).unwrap());
    assert_eq!(matrix, reordered);
}

#[test]
fn text_input_end_to_end() {
    let matrix = AugmentedMatrix::<f64>::load("2\n1 3 8\n4 1 9\n".as_bytes()).unwrap();
    let solution = SimpleIterations::new().solve(matrix, 1e-4).unwrap();

    assert_relative_eq!(solution.answers()[0], 1.727, epsilon = 1e-3);
    assert_relative_eq!(solution.answers()[1], 2.091, epsilon = 1e-3);
    assert!(solution.error().iter().all(|&e| e <= 1e-4));
    assert!(solution
        .to_string()
        .starts_with(&format!("Number of iterations: {}\n", solution.iterations())));
}
