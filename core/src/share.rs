//! A single share of a split secret and its text encoding.
//!
//! Shares travel as `"{x},{y}"` with both coordinates in decimal and no
//! whitespace, e.g. `3,41997`. The same text is used for serde, so a share
//! embeds as a plain string in JSON or TOML documents.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, ShareParseError};
use crate::traits::PointSource;

/// A point `(x, y)` on the sharing polynomial. Shares produced by a split
/// have `x` in `1..=n`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Share {
    x: BigUint,
    y: BigUint,
}

impl Share {
    pub fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }

    /// Text form of the share, identical to its `Display` output.
    pub fn encode(&self) -> String {
        self.to_string()
    }

    /// Parse the text form produced by [`Share::encode`].
    pub fn decode(text: &str) -> Result<Self> {
        Ok(text.parse()?)
    }
}

impl PointSource for Share {
    fn x(&self) -> &BigUint {
        &self.x
    }

    fn y(&self) -> &BigUint {
        &self.y
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Share {
    type Err = ShareParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').collect();
        let [x, y] = parts.as_slice() else {
            return Err(ShareParseError::FieldCount(parts.len()));
        };
        let x = parse_decimal(x).ok_or_else(|| ShareParseError::InvalidX(x.to_string()))?;
        let y = parse_decimal(y).ok_or_else(|| ShareParseError::InvalidY(y.to_string()))?;
        Ok(Self { x, y })
    }
}

/// Plain ASCII decimal digits only. `BigUint::from_str` also takes a leading
/// `+` and `_` separators, which would let a corrupted share decode.
fn parse_decimal(text: &str) -> Option<BigUint> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    BigUint::parse_bytes(text.as_bytes(), 10)
}

impl Serialize for Share {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Share {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SharingError;
    use proptest::prelude::*;
    use rand::Rng;
    use test_strategy::proptest;

    #[test]
    fn share_string() {
        let s = Share::new(BigUint::from(0u32), BigUint::from(1u32));
        assert_eq!("0,1", s.to_string());
        assert_eq!("0,1", s.encode());
    }

    #[test]
    fn round_trip_fuzz() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let want = Share::new(
                BigUint::from(rng.gen_range(0u32..10_000)),
                BigUint::from(rng.gen_range(0u32..10_000)),
            );
            let got = Share::decode(&want.encode()).unwrap();
            assert_eq!(want, got);
        }
    }

    #[proptest]
    fn round_trip_large_values(x: u128, y: u128) {
        let want = Share::new(BigUint::from(x), BigUint::from(y) << 200usize);
        prop_assert_eq!(&want, &want.encode().parse::<Share>().unwrap());
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(
            "".parse::<Share>(),
            Err(ShareParseError::FieldCount(1))
        ));
        assert!(matches!(
            "1,2,3".parse::<Share>(),
            Err(ShareParseError::FieldCount(3))
        ));
        assert!(matches!(
            "a,1".parse::<Share>(),
            Err(ShareParseError::InvalidX(_))
        ));
        assert!(matches!(
            "1,a".parse::<Share>(),
            Err(ShareParseError::InvalidY(_))
        ));
        assert!(matches!(
            "1, 2".parse::<Share>(),
            Err(ShareParseError::InvalidY(_))
        ));
        assert!(matches!(
            "-1,2".parse::<Share>(),
            Err(ShareParseError::InvalidX(_))
        ));
        assert!(matches!(
            ",2".parse::<Share>(),
            Err(ShareParseError::InvalidX(_))
        ));
    }

    #[test]
    fn decode_rejects_sign_and_digit_separators() {
        for text in ["1_0,5", "+3,4", "0x1,2", "1e3,2"] {
            assert!(
                matches!(text.parse::<Share>(), Err(ShareParseError::InvalidX(_))),
                "{text} must not decode"
            );
        }
        for text in ["1,2_", "1,+2", "1,_2", "1,"] {
            assert!(
                matches!(text.parse::<Share>(), Err(ShareParseError::InvalidY(_))),
                "{text} must not decode"
            );
        }
        assert!(matches!(
            Share::decode("1_0,5"),
            Err(SharingError::MalformedInput(ShareParseError::InvalidX(_)))
        ));
        assert!(matches!(
            Share::decode("12"),
            Err(SharingError::MalformedInput(ShareParseError::FieldCount(1)))
        ));
    }

    #[test]
    fn serde_uses_text_form() {
        let share = Share::new(BigUint::from(3u32), BigUint::from(41997u32));
        let json = serde_json::to_string(&share).unwrap();
        assert_eq!("\"3,41997\"", json);
        let back: Share = serde_json::from_str(&json).unwrap();
        assert_eq!(share, back);
        assert!(serde_json::from_str::<Share>("\"3;41997\"").is_err());
    }
}
