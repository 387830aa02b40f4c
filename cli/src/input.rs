//! Collecting shares from arguments or from a line-oriented reader.

use std::io::BufRead;

use anyhow::{Context, Result};
use sharedsecret::Share;
use tracing::warn;

/// Decode every non-blank line, skipping the ones that are not valid shares.
///
/// A corrupted share should not prevent recovery from the rest, so decoding
/// failures are logged and dropped.
pub fn decode_lenient<'a, I>(lines: I) -> Vec<Share>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            match Share::decode(line) {
                Ok(share) => Some(share),
                Err(err) => {
                    warn!(line = index + 1, %err, "skipping malformed share");
                    None
                }
            }
        })
        .collect()
}

/// Read shares from `reader`, one per line.
pub fn read_shares<R: BufRead>(reader: R) -> Result<Vec<Share>> {
    let lines = reader
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .context("failed to read shares")?;
    Ok(decode_lenient(lines.iter().map(String::as_str)))
}
