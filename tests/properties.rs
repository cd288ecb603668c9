//! Algebraic properties checked over seeded random fixtures.

use redeem_linalg::fixtures::FixtureGenerator;
use redeem_linalg::{DeterminantStrategy, EngineConfig, ErrorKind, Matrix, Vector};

const TOL: f64 = 1e-8;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn sum_then_difference_round_trips() {
    init_logging();
    let mut gen = FixtureGenerator::seeded(11);
    for _ in 0..20 {
        let a = gen.float_matrix(3, 4, -50.0..=50.0).unwrap();
        let b = gen.float_matrix(3, 4, -50.0..=50.0).unwrap();
        let back = a.plus(&b).unwrap().minus(&b).unwrap();
        assert!(back.approx_eq(&a, TOL));
    }
}

#[test]
fn double_transpose_is_identity() {
    let mut gen = FixtureGenerator::seeded(12);
    for rows in 1..5 {
        for cols in 1..5 {
            let a = gen.integer_matrix(rows, cols, -20..=20).unwrap();
            assert_eq!(a.transpose().transpose(), a);
        }
    }
}

#[test]
fn cofactor_and_pivot_determinants_agree() {
    init_logging();
    let mut gen = FixtureGenerator::seeded(13);
    for n in 1..=6 {
        for _ in 0..5 {
            let a = gen.integer_matrix(n, n, -9..=9).unwrap();
            let cofactor = a.determinant().unwrap();
            let pivots = a.determinant_by_pivots().unwrap();
            let scale = cofactor.abs().max(1.0);
            assert!(
                (cofactor - pivots).abs() <= TOL * scale,
                "n = {}: cofactor {} vs pivots {}\n{}",
                n,
                cofactor,
                pivots,
                a
            );
        }
    }
}

#[test]
fn matrix_times_inverse_is_identity() {
    init_logging();
    let mut gen = FixtureGenerator::seeded(14);
    for n in 1..=6 {
        let a = gen.invertible_matrix(n, -9..=9).unwrap();
        let inv = a.inverse().unwrap();
        let id = Matrix::identity(n).unwrap();
        assert!(a.multiply(&inv).unwrap().approx_eq(&id, TOL), "\n{}", a);
    }
}

#[test]
fn dependent_row_makes_matrix_singular() {
    let mut gen = FixtureGenerator::seeded(15);
    for n in 2..=5 {
        let a = gen.integer_matrix(n, n, -9..=9).unwrap();
        // Overwrite the last row with 3 × the first row.
        let mut rows = a.to_rows();
        rows[n - 1] = rows[0].iter().map(|v| v * 3.0).collect();
        let singular = Matrix::from_rows(&rows).unwrap();

        assert_eq!(
            singular.inverse().unwrap_err().kind(),
            ErrorKind::SingularMatrix
        );
        assert!(singular.rank() < n);
        assert!(singular.determinant().unwrap().abs() < TOL);
    }
}

#[test]
fn solve_inverts_multiplication() {
    let mut gen = FixtureGenerator::seeded(16);
    for n in 1..=5 {
        let a = gen.invertible_matrix(n, -5..=5).unwrap();
        let x = gen.integer_vector(n, -10..=10).unwrap();
        let b = Vector::try_from(a.multiply(x.as_matrix()).unwrap()).unwrap();
        let solved = a.solve(&b).unwrap();
        assert!(solved.as_matrix().approx_eq(x.as_matrix(), TOL));
    }
}

#[test]
fn identity_determinant_under_every_strategy() {
    let configs: [DeterminantStrategy; 3] = [
        "cofactor".parse().unwrap(),
        "pivot_product".parse().unwrap(),
        "auto".parse().unwrap(),
    ];
    for n in 1..=9 {
        let id = Matrix::identity(n).unwrap();
        for strategy in configs.iter() {
            let config = EngineConfig::new(1e-10, *strategy);
            assert_eq!(id.determinant_with(&config).unwrap(), 1.0);
        }
    }
}

// ---------------------------------------------------------------------------
// Large and small magnitudes
// ---------------------------------------------------------------------------

/// Product of the row lengths, an upper bound on |det|.
fn hadamard_bound(m: &Matrix) -> f64 {
    (0..m.nrows())
        .map(|r| m.row_slice(r).iter().map(|v| v * v).sum::<f64>().sqrt())
        .product()
}

fn assert_determinants_agree(a: &Matrix) {
    let cofactor = a.determinant().unwrap();
    let pivots = a.determinant_by_pivots().unwrap();
    let bound = hadamard_bound(a);
    assert!(
        (cofactor - pivots).abs() <= 1e-10 * bound,
        "cofactor {} vs pivots {} (bound {})\n{}",
        cofactor,
        pivots,
        bound,
        a
    );
}

fn with_dependent_last_row(a: &Matrix) -> Matrix {
    let mut rows = a.to_rows();
    let n = rows.len();
    rows[n - 1] = rows[0].iter().map(|v| v * 3.0).collect();
    Matrix::from_rows(&rows).unwrap()
}

#[test]
fn determinants_agree_for_large_entries() {
    init_logging();
    let mut gen = FixtureGenerator::seeded(21);
    for n in 1..=6 {
        for _ in 0..5 {
            let a = gen.integer_matrix(n, n, -1_000_000..=1_000_000).unwrap();
            assert_determinants_agree(&a);
        }
    }
}

#[test]
fn determinants_agree_for_small_entries() {
    let mut gen = FixtureGenerator::seeded(22);
    for n in 1..=6 {
        for _ in 0..5 {
            let a = gen.float_matrix(n, n, -1e-8..=1e-8).unwrap();
            assert_determinants_agree(&a);
        }
    }
}

#[test]
fn dependent_row_is_singular_at_every_scale() {
    let mut gen = FixtureGenerator::seeded(23);
    for n in 2..=5 {
        let fixtures = [
            gen.integer_matrix(n, n, -1_000_000..=1_000_000).unwrap(),
            gen.float_matrix(n, n, -1e-8..=1e-8).unwrap(),
            gen.integer_matrix(n, n, -9..=9).unwrap().scaled_by(1e9),
        ];
        for a in fixtures.iter() {
            let singular = with_dependent_last_row(a);
            assert_eq!(
                singular.inverse().unwrap_err().kind(),
                ErrorKind::SingularMatrix,
                "\n{}",
                singular
            );
            assert!(singular.rank() < n);
            assert_eq!(singular.determinant_by_pivots().unwrap(), 0.0);
        }
    }
}

#[test]
fn scaled_invertible_matrix_still_inverts() {
    let mut gen = FixtureGenerator::seeded(24);
    for n in 1..=5 {
        let base = gen.invertible_matrix(n, -9..=9).unwrap();
        for scale in [1e-9, 1e9] {
            let a = base.scaled_by(scale);
            let inv = a.inverse().unwrap();
            let id = Matrix::identity(n).unwrap();
            assert!(a.multiply(&inv).unwrap().approx_eq(&id, TOL), "\n{}", a);
        }
    }
}
