//! Lagrange interpolation over a [`PrimeField`].

use std::collections::HashSet;

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::trace;

use crate::error::{MathError, Result};
use crate::field::PrimeField;

/// Value at `x0` of the unique polynomial of degree `< xs.len()` passing
/// through every `(xs[i], ys[i])`.
///
/// ```text
/// y(x0) = Σ_i y_i · Π_{j≠i}(x0 − x_j) · (Π_{j≠i}(x_i − x_j))⁻¹  (mod p)
/// ```
///
/// The per-point denominators are inverted together with a single modular
/// inversion. Points whose x-coordinates coincide, either as integers or
/// modulo `p`, are rejected with [`MathError::NonDistinctPoints`].
pub fn interpolate(
    x0: &BigUint,
    xs: &[BigUint],
    ys: &[BigUint],
    field: &PrimeField,
) -> Result<BigUint> {
    if xs.len() != ys.len() {
        return Err(MathError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    ensure_distinct(xs)?;
    trace!(points = xs.len(), "lagrange interpolation");

    let (numerators, denominators): (Vec<BigUint>, Vec<BigUint>) = xs
        .iter()
        .enumerate()
        .map(|(i, xi)| {
            let numerator = product_of_differences(x0, xs, i, field);
            let denominator = product_of_differences(xi, xs, i, field);
            (numerator, denominator)
        })
        .unzip();

    let inverses = batch_inversion(denominators, field)?;

    let mut value = BigUint::zero();
    for ((num, y), inv) in numerators.iter().zip(ys).zip(&inverses) {
        let term = field.mul(&field.mul(num, y), inv);
        value = field.add(&value, &term);
    }
    Ok(value)
}

/// Π_{j≠skip}(from − xs[j]) mod p.
fn product_of_differences(
    from: &BigUint,
    xs: &[BigUint],
    skip: usize,
    field: &PrimeField,
) -> BigUint {
    xs.iter()
        .enumerate()
        .filter(|&(j, _)| j != skip)
        .fold(BigUint::one(), |acc, (_, xj)| {
            field.mul(&acc, &field.sub(from, xj))
        })
}

fn ensure_distinct(xs: &[BigUint]) -> Result<()> {
    let mut seen = HashSet::with_capacity(xs.len());
    if xs.iter().all(|x| seen.insert(x)) {
        Ok(())
    } else {
        Err(MathError::NonDistinctPoints)
    }
}

/// Montgomery batch inversion: inverts every value with one call to
/// [`PrimeField::inverse`].
///
/// A zero denominator means two x-coordinates are equal modulo `p`.
fn batch_inversion(mut values: Vec<BigUint>, field: &PrimeField) -> Result<Vec<BigUint>> {
    if values.is_empty() {
        return Ok(values);
    }

    let mut prefixes = Vec::with_capacity(values.len());
    let mut acc = BigUint::one();
    for value in &values {
        if value.is_zero() {
            return Err(MathError::NonDistinctPoints);
        }
        prefixes.push(acc.clone());
        acc = field.mul(&acc, value);
    }

    let mut acc = field.inverse(&acc)?;
    for (value, prefix) in values.iter_mut().rev().zip(prefixes.into_iter().rev()) {
        let current = std::mem::replace(value, field.mul(&acc, &prefix));
        acc = field.mul(&acc, &current);
    }
    Ok(values)
}
