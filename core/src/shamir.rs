use num_traits::Zero;
use rand::{CryptoRng, RngCore};
use sharedsecret_math::prelude::*;
use tracing::debug;

use crate::error::{Result, SharingError};
use crate::params::SharingParams;
use crate::share::Share;
use crate::traits::PointSource;

/// Shamir's secret sharing over a prime field.
///
/// The field is an explicit, immutable part of the scheme. Shares split with
/// one field only recover correctly with the same field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SharedSecret {
    field: PrimeField,
}

impl SharedSecret {
    pub fn new(field: PrimeField) -> Self {
        Self { field }
    }

    #[inline]
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Create `shares` shares of a fresh random secret, any `threshold` of
    /// which recover it. Returns the shares together with the secret.
    pub fn split<R>(
        &self,
        shares: usize,
        threshold: usize,
        rng: &mut R,
    ) -> Result<(Vec<Share>, BigUint)>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let params = SharingParams::new(shares, threshold)?;
        debug!(shares, threshold, "splitting random secret");

        let poly = Polynomial::random(params.threshold(), &self.field, rng)?;
        let secret = poly.coefficient(0)?;
        Ok((distribute(&poly, params.shares()), secret))
    }

    /// Split a caller-chosen `secret` into `shares` shares, any `threshold`
    /// of which recover it. The secret must be smaller than the modulus.
    pub fn split_given_secret<R>(
        &self,
        secret: &BigUint,
        shares: usize,
        threshold: usize,
        rng: &mut R,
    ) -> Result<Vec<Share>>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let params = SharingParams::new(shares, threshold)?;
        if !self.field.contains(secret) {
            return Err(SharingError::SecretOutOfRange);
        }
        debug!(shares, threshold, "splitting given secret");

        let poly = Polynomial::with_constant(secret, params.threshold(), &self.field, rng)?;
        Ok(distribute(&poly, params.shares()))
    }

    /// Interpolate the shares at `x = 0`.
    ///
    /// The threshold is not known here, so it is not checked: fewer shares
    /// than the threshold give a wrong value rather than an error.
    pub fn recover<S: PointSource>(&self, shares: &[S]) -> Result<BigUint> {
        debug!(shares = shares.len(), "recovering secret");
        let (xs, ys): (Vec<BigUint>, Vec<BigUint>) = shares
            .iter()
            .map(|share| (share.x().clone(), share.y().clone()))
            .unzip();
        Ok(interpolate(&BigUint::zero(), &xs, &ys, &self.field)?)
    }
}

/// Evaluate `poly` at `x = 1..=count`. `x = 0` is the secret and is never
/// handed out.
fn distribute(poly: &Polynomial<'_>, count: usize) -> Vec<Share> {
    (1..=count)
        .map(|i| {
            let x = BigUint::from(i);
            let y = poly.evaluate(&x);
            Share::new(x, y)
        })
        .collect()
}

/// [`SharedSecret::split`] over the embedded field with the thread-local
/// CSPRNG.
pub fn split(shares: usize, threshold: usize) -> Result<(Vec<Share>, BigUint)> {
    SharedSecret::default().split(shares, threshold, &mut rand::thread_rng())
}

/// [`SharedSecret::split_given_secret`] over the embedded field with the
/// thread-local CSPRNG.
pub fn split_given_secret(secret: &BigUint, shares: usize, threshold: usize) -> Result<Vec<Share>> {
    SharedSecret::default().split_given_secret(secret, shares, threshold, &mut rand::thread_rng())
}

/// [`SharedSecret::recover`] over the embedded field.
pub fn recover<S: PointSource>(shares: &[S]) -> Result<BigUint> {
    SharedSecret::default().recover(shares)
}
