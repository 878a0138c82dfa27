use matmul_chain::chain::{self, ChainConfig};
use matmul_chain::threaded::{element, row};
use matmul_chain::{Error, Matrix, Method, multiply, sequential};

fn assert_matrices_equal(expected: &Matrix, actual: &Matrix, name: &str) {
    assert_eq!(
        expected.size(),
        actual.size(),
        "{}: size mismatch",
        name
    );
    for i in 0..expected.size() {
        for j in 0..expected.size() {
            // Exact comparison: every strategy accumulates in the same
            // order, so the bits must match, not just the magnitudes.
            assert_eq!(
                expected.get(i, j),
                actual.get(i, j),
                "{}: mismatch at ({}, {})",
                name,
                i,
                j
            );
        }
    }
}

fn identity(size: usize) -> Matrix {
    let rows = (0..size)
        .map(|i| (0..size).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect();
    Matrix::from_rows(rows).unwrap()
}

// ============================================================
// Golden-value tests
// ============================================================

#[test]
fn test_generated_matrix_size_3() {
    let expected = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 1.0, 2.0],
        vec![3.0, 2.0, 1.0],
    ])
    .unwrap();

    assert_eq!(Matrix::generated(3).unwrap(), expected);
}

#[test]
fn test_golden_2x2_product() {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
    let expected = Matrix::from_rows(vec![vec![19.0, 22.0], vec![43.0, 50.0]]).unwrap();

    assert_matrices_equal(&expected, &sequential::multiply(&a, &b).unwrap(), "sequential");
    assert_matrices_equal(&expected, &row::multiply(&a, &b).unwrap(), "row");
    assert_matrices_equal(&expected, &element::multiply(&a, &b).unwrap(), "element");
}

#[test]
fn test_identity_multiply() {
    // The generator never produces an identity matrix (off-diagonal
    // values are nonzero), so build a real one by hand.
    let size = 5;
    let id = identity(size);
    let m = Matrix::generated(size).unwrap();

    for method in [Method::Sequential, Method::Row, Method::Element] {
        let left_product = multiply(method, &id, &m).unwrap();
        let right_product = multiply(method, &m, &id).unwrap();
        assert_matrices_equal(&m, &left_product, &format!("identity_left_{:?}", method));
        assert_matrices_equal(&m, &right_product, &format!("identity_right_{:?}", method));
    }
}

// ============================================================
// Strategy agreement
// ============================================================

#[test]
fn test_strategies_agree_on_generated_matrices() {
    // Size 1 is the boundary: a single element, nothing to partition.
    for size in [1, 2, 5, 16] {
        let left = Matrix::generated(size).unwrap();
        let right = Matrix::generated(size).unwrap();

        let baseline = sequential::multiply(&left, &right).unwrap();
        let by_row = row::multiply(&left, &right).unwrap();
        let by_element = element::multiply(&left, &right).unwrap();

        assert_matrices_equal(&baseline, &by_row, &format!("row_size_{}", size));
        assert_matrices_equal(&baseline, &by_element, &format!("element_size_{}", size));
    }
}

#[test]
fn test_strategies_agree_on_larger_matrices() {
    for size in [32, 64] {
        let left = Matrix::generated(size).unwrap();
        let right = Matrix::generated(size).unwrap();

        let baseline = sequential::multiply(&left, &right).unwrap();
        let by_row = row::multiply(&left, &right).unwrap();
        let by_element = element::multiply(&left, &right).unwrap();

        assert_matrices_equal(&baseline, &by_row, &format!("row_size_{}", size));
        assert_matrices_equal(&baseline, &by_element, &format!("element_size_{}", size));
    }
}

#[test]
fn test_strategies_agree_across_whole_chain() {
    let baseline = chain::run(&ChainConfig {
        method: Method::Sequential,
        num_matrices: 4,
        size: 6,
    })
    .unwrap();

    for method in [Method::Row, Method::Element] {
        let result = chain::run(&ChainConfig {
            method,
            num_matrices: 4,
            size: 6,
        })
        .unwrap();
        assert_matrices_equal(&baseline, &result, &format!("chain_{:?}", method));
    }
}

// ============================================================
// Dispatch and method parsing
// ============================================================

#[test]
fn test_dispatch_matches_direct_calls() {
    let left = Matrix::generated(8).unwrap();
    let right = Matrix::generated(8).unwrap();

    assert_eq!(
        multiply(Method::Sequential, &left, &right).unwrap(),
        sequential::multiply(&left, &right).unwrap()
    );
    assert_eq!(
        multiply(Method::Row, &left, &right).unwrap(),
        row::multiply(&left, &right).unwrap()
    );
    assert_eq!(
        multiply(Method::Element, &left, &right).unwrap(),
        element::multiply(&left, &right).unwrap()
    );
}

#[test]
fn test_method_strings() {
    assert_eq!(Method::parse("U"), Method::Sequential);
    assert_eq!(Method::parse("R"), Method::Row);
    assert_eq!(Method::parse("E"), Method::Element);
}

#[test]
fn test_unknown_method_falls_back_to_unthreaded() {
    assert_eq!(Method::parse("X"), Method::Sequential);
    assert_eq!(Method::parse(""), Method::Sequential);
    // Matching is case-sensitive.
    assert_eq!(Method::parse("r"), Method::Sequential);

    // The fallback still computes the correct product.
    let left = Matrix::generated(4).unwrap();
    let right = Matrix::generated(4).unwrap();
    let fallback = multiply(Method::parse("X"), &left, &right).unwrap();
    let baseline = sequential::multiply(&left, &right).unwrap();
    assert_matrices_equal(&baseline, &fallback, "fallback");
}

// ============================================================
// Chain driver
// ============================================================

#[test]
fn test_chain_of_one_matrix_is_initial_left() {
    let result = chain::run(&ChainConfig {
        method: Method::Sequential,
        num_matrices: 1,
        size: 4,
    })
    .unwrap();

    // No multiplication performed: the initial left operand comes back.
    assert_eq!(result, Matrix::generated(4).unwrap());
}

#[test]
fn test_chain_of_zero_matrices_behaves_like_one() {
    let result = chain::run(&ChainConfig {
        method: Method::Row,
        num_matrices: 0,
        size: 3,
    })
    .unwrap();

    assert_eq!(result, Matrix::generated(3).unwrap());
}

#[test]
fn test_chain_matches_manual_composition() {
    let size = 4;
    let result = chain::run(&ChainConfig {
        method: Method::Row,
        num_matrices: 3,
        size,
    })
    .unwrap();

    // right is held fixed across iterations; only left advances.
    let left = Matrix::generated(size).unwrap();
    let right = Matrix::generated(size).unwrap();
    let first = row::multiply(&left, &right).unwrap();
    let second = row::multiply(&first, &right).unwrap();

    assert_matrices_equal(&second, &result, "chain_composition");
}

// ============================================================
// Error paths
// ============================================================

#[test]
fn test_size_mismatch_rejected_by_every_strategy() {
    let a = Matrix::generated(2).unwrap();
    let b = Matrix::generated(3).unwrap();

    assert!(matches!(
        sequential::multiply(&a, &b),
        Err(Error::SizeMismatch(2, 3))
    ));
    assert!(matches!(
        row::multiply(&a, &b),
        Err(Error::SizeMismatch(2, 3))
    ));
    assert!(matches!(
        element::multiply(&a, &b),
        Err(Error::SizeMismatch(2, 3))
    ));
    assert!(matches!(
        multiply(Method::Element, &a, &b),
        Err(Error::SizeMismatch(2, 3))
    ));
}

#[test]
fn test_generated_rejects_zero_size() {
    assert!(matches!(Matrix::generated(0), Err(Error::InvalidSize)));
}

#[test]
fn test_from_rows_rejects_bad_grids() {
    assert!(matches!(
        Matrix::from_rows(vec![]),
        Err(Error::InvalidSize)
    ));
    assert!(matches!(
        Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
        Err(Error::RaggedGrid {
            row: 1,
            expected: 2,
            found: 1
        })
    ));
}

// ============================================================
// Matrix accessors
// ============================================================

#[test]
fn test_column_extraction() {
    let m = Matrix::from_rows(vec![
        vec![1.0, 2.0, 3.0],
        vec![4.0, 5.0, 6.0],
        vec![7.0, 8.0, 9.0],
    ])
    .unwrap();

    assert_eq!(m.column(0), vec![1.0, 4.0, 7.0]);
    assert_eq!(m.column(2), vec![3.0, 6.0, 9.0]);
}

#[test]
fn test_row_and_element_mutation() {
    let mut m = Matrix::generated(3).unwrap();

    m.set_row(1, &[9.0, 8.0, 7.0]);
    assert_eq!(m.row(1), &[9.0, 8.0, 7.0]);

    m.set(0, 2, 42.0);
    assert_eq!(m.get(0, 2), 42.0);

    // Rows not written to stay intact.
    assert_eq!(m.row(2), &[3.0, 2.0, 1.0]);
}

#[test]
fn test_display_one_padded_line_per_row() {
    let m = Matrix::generated(3).unwrap();
    let rendered = format!("{}", m);

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.split_whitespace().count(), 3);
    }
    assert!(rendered.contains("1.0"));
}
