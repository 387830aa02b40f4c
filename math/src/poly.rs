//! Polynomials over a [`PrimeField`].
//!
//! A polynomial is stored as its coefficient sequence, `coeff[i]` multiplying
//! `x^i`. The number of coefficients (`k`) is what the sharing scheme calls
//! the threshold; the mathematical degree is `k - 1`.

use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use tracing::trace;

use crate::error::{MathError, PolynomialError, Result};
use crate::field::PrimeField;

/// A polynomial with coefficients in a prime field.
///
/// The coefficients of a sharing polynomial are as sensitive as the secret
/// itself, so `Debug` only reports the coefficient count.
#[derive(Clone, PartialEq, Eq)]
pub struct Polynomial<'f> {
    coefficients: Vec<BigUint>,
    field: &'f PrimeField,
}

impl<'f> Polynomial<'f> {
    /// Build a polynomial from explicit coefficients, reducing each into the
    /// field.
    pub fn new(coefficients: Vec<BigUint>, field: &'f PrimeField) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(PolynomialError::NoCoefficients.into());
        }
        let coefficients = coefficients.iter().map(|c| field.reduce(c)).collect();
        Ok(Self {
            coefficients,
            field,
        })
    }

    /// Random polynomial with `count` coefficients drawn uniformly from the
    /// field.
    pub fn random<R>(count: usize, field: &'f PrimeField, rng: &mut R) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if count == 0 {
            return Err(PolynomialError::NoCoefficients.into());
        }
        trace!(count, bits = field.bits(), "sampling random polynomial");
        let coefficients = (0..count).map(|_| field.random_element(rng)).collect();
        Ok(Self {
            coefficients,
            field,
        })
    }

    /// Random polynomial whose constant term is fixed to `constant`; only the
    /// remaining `count - 1` coefficients are sampled.
    pub fn with_constant<R>(
        constant: &BigUint,
        count: usize,
        field: &'f PrimeField,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        if count == 0 {
            return Err(PolynomialError::NoCoefficients.into());
        }
        if !field.contains(constant) {
            return Err(PolynomialError::NonCanonicalConstant.into());
        }
        trace!(
            count,
            bits = field.bits(),
            "sampling polynomial with fixed constant"
        );
        let mut coefficients = Vec::with_capacity(count);
        coefficients.push(constant.clone());
        coefficients.extend((1..count).map(|_| field.random_element(rng)));
        Ok(Self {
            coefficients,
            field,
        })
    }

    /// Number of coefficients, i.e. the degree plus one.
    #[inline]
    pub fn degree_count(&self) -> usize {
        self.coefficients.len()
    }

    /// Copy of the `index`-th coefficient.
    pub fn coefficient(&self, index: usize) -> Result<BigUint> {
        self.coefficients
            .get(index)
            .cloned()
            .ok_or(MathError::IndexOutOfRange {
                index,
                count: self.coefficients.len(),
            })
    }

    #[inline]
    pub fn field(&self) -> &'f PrimeField {
        self.field
    }

    /// Value at `x`, using Horner's rule from the highest coefficient down.
    pub fn evaluate(&self, x: &BigUint) -> BigUint {
        self.coefficients
            .iter()
            .rev()
            .fold(BigUint::zero(), |value, coeff| {
                self.field.reduce(&(value * x + coeff))
            })
    }
}

impl fmt::Debug for Polynomial<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree_count", &self.coefficients.len())
            .field("modulus_bits", &self.field.bits())
            .finish_non_exhaustive()
    }
}
