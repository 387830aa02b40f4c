pub use num_bigint::BigUint;

pub use crate::error::{ArithmeticError, MathError, PolynomialError};
pub use crate::field::PrimeField;
pub use crate::interpolate::interpolate;
pub use crate::poly::Polynomial;
