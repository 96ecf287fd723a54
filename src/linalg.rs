// src/linalg.rs
//! Kronecker and matrix-product chains over complex matrices
//!
//! Both folds are pure: they borrow their operands and hand back a freshly
//! allocated matrix.

use ndarray::{array, Array2};
use num_complex::Complex64;

use crate::error::{LinalgError, Result};

/// A dense complex matrix
pub type Matrix = Array2<Complex64>;

/// Tolerance used when comparing matrices element-wise
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Kronecker product of two matrices
///
/// For an (m x n) `a` and a (p x q) `b` the result is (mp x nq), where block
/// (i, j) is `a[[i, j]] * b`.
pub fn kron(a: &Matrix, b: &Matrix) -> Matrix {
    let (n1, m1) = a.dim();
    let (n2, m2) = b.dim();

    let mut result = Array2::zeros((n1 * n2, m1 * m2));

    for i in 0..n1 {
        for j in 0..m1 {
            let scale = a[[i, j]];
            for k in 0..n2 {
                for l in 0..m2 {
                    result[[i * n2 + k, j * m2 + l]] = scale * b[[k, l]];
                }
            }
        }
    }

    result
}

/// Iterated Kronecker product, folded left to right from the 1x1 matrix `[[1]]`
///
/// No operands yields `[[1]]` and a single operand yields a copy of it.
///
/// ```
/// use qkron::prelude::*;
///
/// let xz = kronecker_product([&*PAULI_X, &*PAULI_Z]);
/// assert_eq!(xz.dim(), (4, 4));
/// ```
pub fn kronecker_product<'a, I>(matrices: I) -> Matrix
where
    I: IntoIterator<Item = &'a Matrix>,
{
    let mut count = 0usize;
    let result = matrices.into_iter().fold(array![[Complex64::new(1.0, 0.0)]], |acc, op| {
        count += 1;
        kron(&acc, op)
    });

    log::trace!("kronecker product of {} operands -> {:?}", count, result.dim());
    result
}

/// Left-to-right matrix product `A1 · A2 · … · An`
///
/// Needs at least two operands, and the column count of each operand must equal
/// the row count of the next.
pub fn chained_multiply<'a, I>(matrices: I) -> Result<Matrix>
where
    I: IntoIterator<Item = &'a Matrix>,
{
    let operands: Vec<&Matrix> = matrices.into_iter().collect();

    if operands.len() < 2 {
        return Err(LinalgError::InsufficientOperands {
            required: 2,
            got: operands.len(),
        });
    }

    let mut result = operands[0].clone();

    for (index, op) in operands.iter().enumerate().skip(1) {
        if result.ncols() != op.nrows() {
            log::debug!(
                "shape mismatch at operand {}: {:?} x {:?}",
                index,
                result.dim(),
                op.dim()
            );
            return Err(LinalgError::IncompatibleShapes {
                index,
                left: result.dim(),
                right: op.dim(),
            });
        }
        result = result.dot(*op);
    }

    log::trace!("chained product of {} operands -> {:?}", operands.len(), result.dim());
    Ok(result)
}

// Coerces macro operands (including `Lazy` gate constants) to `&Matrix`.
#[doc(hidden)]
pub fn __operand(m: &Matrix) -> &Matrix {
    m
}

/// Conjugate transpose
pub fn dagger(m: &Matrix) -> Matrix {
    m.t().mapv(|z| z.conj())
}

/// The n x n complex identity
pub fn identity(n: usize) -> Matrix {
    Array2::eye(n)
}

/// True when both matrices share a shape and every element differs by less than `tol`
pub fn approx_eq(a: &Matrix, b: &Matrix, tol: f64) -> bool {
    a.dim() == b.dim() && a.iter().zip(b.iter()).all(|(x, y)| (x - y).norm() < tol)
}

/// Checks `m† · m ≈ I`
pub fn is_unitary(m: &Matrix, tol: f64) -> bool {
    let (rows, cols) = m.dim();
    if rows != cols {
        return false;
    }
    approx_eq(&dagger(m).dot(m), &identity(rows), tol)
}
