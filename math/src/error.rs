use thiserror::Error;

pub mod arithmetic {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    pub enum Error {
        #[error("element {0} has no inverse modulo the field prime")]
        NotInvertible(String),
    }
}

pub mod polynomial {
    use thiserror::Error;

    #[derive(Debug, Clone, PartialEq, Eq, Error)]
    #[non_exhaustive]
    pub enum Error {
        #[error("a polynomial needs at least one coefficient")]
        NoCoefficients,
        #[error("constant term is not a canonical field element")]
        NonCanonicalConstant,
    }
}

pub use arithmetic::Error as ArithmeticError;
pub use polynomial::Error as PolynomialError;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Top-level error type to keep error management simple for users.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error(transparent)]
    Polynomial(#[from] PolynomialError),
    #[error("x and y lists must have the same length: {xs} != {ys}")]
    LengthMismatch { xs: usize, ys: usize },
    #[error("interpolation points must be distinct")]
    NonDistinctPoints,
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
    #[error("coefficient index {index} out of range for {count} coefficients")]
    IndexOutOfRange { index: usize, count: usize },
    #[error("invalid modulus: {0}")]
    InvalidModulus(String),
}

pub type Error = MathError;

impl MathError {
    /// Whether this error belongs to the invalid-parameter class: bad
    /// polynomial parameters or mismatched interpolation inputs.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::Polynomial(_) | Self::LengthMismatch { .. })
    }
}
