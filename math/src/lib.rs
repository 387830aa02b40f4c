//! Finite-field engine behind `sharedsecret`: arithmetic modulo a prime,
//! random polynomials and Lagrange interpolation.

pub mod error;
pub mod field;
pub mod interpolate;
pub mod poly;
pub mod prelude;

pub use crate::{
    error::{MathError, Result},
    field::PrimeField,
    interpolate::interpolate,
    poly::Polynomial,
};
