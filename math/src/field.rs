use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_traits::{One, Zero};
use rand::{CryptoRng, RngCore};

use crate::error::{ArithmeticError, MathError, Result};

/// Witnesses for the Miller-Rabin test. Deterministic below 3.3 * 10^24 and
/// a strong probable-prime test above.
const MILLER_RABIN_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

static DEFAULT_FIELD: OnceLock<PrimeField> = OnceLock::new();

/// The prime field ℤ_p.
///
/// Field elements are plain [`BigUint`]s. Every operation returns the
/// canonical representative in `[0, p)` and borrows its operands, so values
/// owned by the caller are never modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrimeField {
    modulus: BigUint,
}

impl PrimeField {
    /// Construct a field over `modulus`, which must be an odd prime.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus < BigUint::from(3u32) || !modulus.bit(0) {
            return Err(MathError::InvalidModulus(format!(
                "{modulus} is not an odd prime"
            )));
        }
        if !is_probable_prime(&modulus) {
            return Err(MathError::InvalidModulus(format!("{modulus} is composite")));
        }
        Ok(Self { modulus })
    }

    /// The embedded field over 2^255 - 19, built once per process.
    pub fn embedded() -> &'static PrimeField {
        DEFAULT_FIELD.get_or_init(|| PrimeField {
            modulus: (BigUint::one() << 255usize) - 19u32,
        })
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Bit length of the modulus.
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }

    /// Whether `a` is already a canonical element, i.e. `a < p`.
    #[inline]
    pub fn contains(&self, a: &BigUint) -> bool {
        a < &self.modulus
    }

    #[inline]
    pub fn reduce(&self, a: &BigUint) -> BigUint {
        a % &self.modulus
    }

    pub fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % &self.modulus
    }

    /// `a - b mod p`. Both sides are reduced first and `p` is added before the
    /// final reduction, so the unsigned intermediate never underflows.
    pub fn sub(&self, a: &BigUint, b: &BigUint) -> BigUint {
        let a = self.reduce(a);
        let b = self.reduce(b);
        (a + &self.modulus - b) % &self.modulus
    }

    pub fn mul(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % &self.modulus
    }

    pub fn neg(&self, a: &BigUint) -> BigUint {
        self.sub(&BigUint::zero(), a)
    }

    /// Multiplicative inverse of `a` using the extended Euclidean algorithm.
    ///
    /// Fails when `a ≡ 0 (mod p)`, or when `gcd(a, p) != 1`, which can only
    /// happen if the modulus is not actually prime.
    pub fn inverse(&self, a: &BigUint) -> Result<BigUint> {
        let a = self.reduce(a);
        if a.is_zero() {
            return Err(ArithmeticError::NotInvertible(a.to_string()).into());
        }

        let p = BigInt::from(self.modulus.clone());
        let (mut r0, mut r1) = (p.clone(), BigInt::from(a.clone()));
        let (mut t0, mut t1) = (BigInt::zero(), BigInt::one());

        while !r1.is_zero() {
            let q = &r0 / &r1;
            let r2 = &r0 - &q * &r1;
            r0 = std::mem::replace(&mut r1, r2);
            let t2 = &t0 - &q * &t1;
            t0 = std::mem::replace(&mut t1, t2);
        }

        // r0 is gcd(p, a)
        if !r0.is_one() {
            return Err(ArithmeticError::NotInvertible(a.to_string()).into());
        }

        // Bezout coefficient may be negative
        let (_, inverse) = (((t0 % &p) + &p) % &p).into_parts();
        Ok(inverse)
    }

    /// Uniformly random element of `[0, p)`.
    pub fn random_element<R>(&self, rng: &mut R) -> BigUint
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        rng.gen_biguint_below(&self.modulus)
    }
}

impl Default for PrimeField {
    fn default() -> Self {
        Self::embedded().clone()
    }
}

impl fmt::Display for PrimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.modulus, f)
    }
}

impl FromStr for PrimeField {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self> {
        match BigUint::from_str(s.trim()) {
            Ok(modulus) => Self::new(modulus),
            Err(err) => {
                let reason = format!("cannot parse {s:?}: {err}");
                Err(MathError::InvalidModulus(reason))
            }
        }
    }
}

impl TryFrom<u64> for PrimeField {
    type Error = MathError;

    fn try_from(modulus: u64) -> Result<Self> {
        Self::new(BigUint::from(modulus))
    }
}

fn is_probable_prime(n: &BigUint) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);
    let n_minus_one = n - &one;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = &n_minus_one >> s;

    'witness: for base in MILLER_RABIN_BASES {
        let a = BigUint::from(base);
        if &a == n {
            return true;
        }
        if (n % &a).is_zero() {
            return false;
        }

        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_one {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }
        return false;
    }
    true
}
