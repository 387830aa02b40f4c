use crate::error::{Result, SharingError};

/// Share count used by the demos and the command line when none is given.
pub const DEFAULT_SHARES: usize = 5;

/// Threshold used by the demos and the command line when none is given.
pub const DEFAULT_THRESHOLD: usize = 3;

/// `1 <= threshold <= shares`
#[inline]
pub const fn validate_threshold_config(threshold: usize, shares: usize) -> bool {
    threshold >= 1 && threshold <= shares
}

/// How many shares to produce and how many of them reconstruct the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SharingParams {
    shares: usize,
    threshold: usize,
}

impl SharingParams {
    pub fn new(shares: usize, threshold: usize) -> Result<Self> {
        if !validate_threshold_config(threshold, shares) {
            return Err(SharingError::InvalidThreshold { threshold, shares });
        }
        Ok(Self { shares, threshold })
    }

    #[inline]
    pub const fn shares(&self) -> usize {
        self.shares
    }

    #[inline]
    pub const fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Default for SharingParams {
    fn default() -> Self {
        Self {
            shares: DEFAULT_SHARES,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}
