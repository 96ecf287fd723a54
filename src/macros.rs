// src/macros.rs
//! Variadic call syntax for the matrix folds

/// Iterated Kronecker product of any number of matrices
///
/// Accepts anything that dereferences to a [`Matrix`](crate::linalg::Matrix),
/// including the lazily built gate constants.
///
/// ```
/// use qkron::prelude::*;
///
/// let ii = qkron::kron!(IDENTITY, IDENTITY);
/// assert!(approx_eq(&ii, &identity(4), DEFAULT_TOLERANCE));
/// assert_eq!(qkron::kron!().dim(), (1, 1));
/// ```
#[macro_export]
macro_rules! kron {
    () => {
        $crate::linalg::kronecker_product(::std::iter::empty::<&$crate::linalg::Matrix>())
    };
    ($($m:expr),+ $(,)?) => {
        $crate::linalg::kronecker_product([$($crate::linalg::__operand(&$m)),+])
    };
}

/// Left-to-right matrix product of two or more matrices
///
/// ```
/// use qkron::prelude::*;
///
/// let xx = qkron::chain_dot!(PAULI_X, PAULI_X).unwrap();
/// assert!(approx_eq(&xx, &IDENTITY, DEFAULT_TOLERANCE));
/// ```
#[macro_export]
macro_rules! chain_dot {
    () => {
        $crate::linalg::chained_multiply(::std::iter::empty::<&$crate::linalg::Matrix>())
    };
    ($($m:expr),+ $(,)?) => {
        $crate::linalg::chained_multiply([$($crate::linalg::__operand(&$m)),+])
    };
}
