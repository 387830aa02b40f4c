//! Shamir's secret sharing.
//!
//! A secret is split into `n` shares such that any `k` of them recover it
//! exactly, while fewer than `k` reveal nothing about it.
//!
//! ```
//! use sharedsecret::{recover, split};
//!
//! // 5 shares, any 3 of them recover the secret
//! let (shares, secret) = split(5, 3).unwrap();
//! assert_eq!(secret, recover(&shares[1..4]).unwrap());
//! ```
//!
//! Arithmetic happens in the field selected by [`SharedSecret::new`];
//! the free functions use the embedded field over 2^255 - 19.

pub mod error;
pub mod params;
pub mod shamir;
pub mod share;
pub mod traits;

pub use sharedsecret_math as math;
pub use sharedsecret_math::PrimeField;

pub use crate::{
    error::{Result, ShareParseError, SharingError},
    params::SharingParams,
    shamir::{recover, split, split_given_secret, SharedSecret},
    share::Share,
    traits::PointSource,
};
