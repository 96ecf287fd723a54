// src/gate.rs
//! Standard gate matrices
//!
//! The single-qubit identity and Pauli matrices and the two-qubit CNOT, built
//! once on first access and shared read-only afterwards.

use ndarray::array;
use num_complex::Complex64;
use once_cell::sync::Lazy;

use crate::linalg::Matrix;

/// Common complex numbers used in gate matrices
pub mod constants {
    use num_complex::Complex64;

    /// The imaginary unit i
    pub const I: Complex64 = Complex64::new(0.0, 1.0);

    /// 1
    pub const ONE: Complex64 = Complex64::new(1.0, 0.0);

    /// 0
    pub const ZERO: Complex64 = Complex64::new(0.0, 0.0);
}

use constants::{I, ONE, ZERO};

/// 2x2 identity
pub static IDENTITY: Lazy<Matrix> = Lazy::new(|| {
    array![
        [ONE, ZERO],
        [ZERO, ONE]
    ]
});

/// Pauli-X (bit flip)
pub static PAULI_X: Lazy<Matrix> = Lazy::new(|| {
    array![
        [ZERO, ONE],
        [ONE, ZERO]
    ]
});

/// Pauli-Y
pub static PAULI_Y: Lazy<Matrix> = Lazy::new(|| {
    array![
        [ZERO, -I],
        [I, ZERO]
    ]
});

/// Pauli-Z (phase flip)
pub static PAULI_Z: Lazy<Matrix> = Lazy::new(|| {
    array![
        [ONE, ZERO],
        [ZERO, -ONE]
    ]
});

/// Controlled-NOT, control on the first qubit and target on the second
pub static CNOT: Lazy<Matrix> = Lazy::new(|| {
    array![
        [ONE, ZERO, ZERO, ZERO],
        [ZERO, ONE, ZERO, ZERO],
        [ZERO, ZERO, ZERO, ONE],
        [ZERO, ZERO, ONE, ZERO]
    ]
});

/// Names for the constant gate matrices
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StandardMatrix {
    I,
    X,
    Y,
    Z,
    CNOT,
}

impl StandardMatrix {
    /// Every standard matrix, single-qubit ones first
    pub const ALL: [StandardMatrix; 5] = [
        StandardMatrix::I,
        StandardMatrix::X,
        StandardMatrix::Y,
        StandardMatrix::Z,
        StandardMatrix::CNOT,
    ];

    /// Shared matrix for this gate
    pub fn matrix(&self) -> &'static Matrix {
        match self {
            StandardMatrix::I => &IDENTITY,
            StandardMatrix::X => &PAULI_X,
            StandardMatrix::Y => &PAULI_Y,
            StandardMatrix::Z => &PAULI_Z,
            StandardMatrix::CNOT => &CNOT,
        }
    }

    pub fn qubit_count(&self) -> usize {
        match self {
            StandardMatrix::CNOT => 2,
            _ => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StandardMatrix::I => "I",
            StandardMatrix::X => "X",
            StandardMatrix::Y => "Y",
            StandardMatrix::Z => "Z",
            StandardMatrix::CNOT => "CNOT",
        }
    }
}

impl std::fmt::Display for StandardMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
