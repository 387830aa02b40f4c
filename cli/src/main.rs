//! # sharedsecret
//!
//! Split a secret into shares and recover it from them.
//!
//! ```text
//! sharedsecret new --shares 5 --threshold 3
//! sharedsecret distribute --secret 120398491412912873 --shares 5 --threshold 3
//! sharedsecret recover 1,... 3,... 4,...
//! sharedsecret recover < shares.txt
//! ```
//!
//! Shares are printed one per line in their `x,y` text form.

use std::io::{self, IsTerminal, Write};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use sharedsecret::params::{DEFAULT_SHARES, DEFAULT_THRESHOLD};
use sharedsecret::{PrimeField, Share, SharedSecret};
use tracing::{debug, info};

mod input;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "sharedsecret")]
#[command(about = "Shamir's secret sharing over a prime field", long_about = None)]
struct Args {
    /// Prime modulus of the field, in decimal (defaults to 2^255 - 19)
    #[arg(long, global = true, env = "SHAREDSECRET_MODULUS")]
    modulus: Option<PrimeField>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random secret and split it; prints the secret, then the shares
    New {
        /// Number of shares to create
        #[arg(short = 'n', long, default_value_t = DEFAULT_SHARES)]
        shares: usize,

        /// Number of shares needed to recover the secret
        #[arg(short = 'k', long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,
    },
    /// Split a given decimal secret into shares
    Distribute {
        /// The secret, as a decimal integer smaller than the modulus
        #[arg(short, long)]
        secret: BigUint,

        /// Number of shares to create
        #[arg(short = 'n', long, default_value_t = DEFAULT_SHARES)]
        shares: usize,

        /// Number of shares needed to recover the secret
        #[arg(short = 'k', long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,
    },
    /// Recover a secret from shares given as arguments or on stdin
    Recover {
        /// Shares in `x,y` form; read from stdin, one per line, when omitted
        shares: Vec<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let field = args.modulus.unwrap_or_default();
    debug!(bits = field.bits(), "using prime field");
    let scheme = SharedSecret::new(field);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::New { shares, threshold } => {
            let (shares, secret) = scheme
                .split(shares, threshold, &mut rand::thread_rng())
                .context("failed to split secret")?;
            writeln!(out, "{secret}")?;
            write_shares(&mut out, &shares)?;
        }
        Command::Distribute {
            secret,
            shares,
            threshold,
        } => {
            let shares = scheme
                .split_given_secret(&secret, shares, threshold, &mut rand::thread_rng())
                .context("failed to distribute secret")?;
            write_shares(&mut out, &shares)?;
        }
        Command::Recover { shares } => {
            let shares = if shares.is_empty() {
                let stdin = io::stdin();
                prompt_for_shares(&mut io::stderr(), stdin.is_terminal())?;
                input::read_shares(stdin.lock())?
            } else {
                input::decode_lenient(shares.iter().map(String::as_str))
            };
            if shares.is_empty() {
                bail!("no valid shares given");
            }
            info!(count = shares.len(), "recovering from shares");
            let secret = scheme
                .recover(&shares)
                .context("failed to recover secret")?;
            writeln!(out, "{secret}")?;
        }
    }
    Ok(())
}

fn write_shares<W: Write>(out: &mut W, shares: &[Share]) -> io::Result<()> {
    for share in shares {
        writeln!(out, "{share}")?;
    }
    Ok(())
}

/// Tell an interactive user that shares are expected on stdin. Piped input
/// gets no prompt.
fn prompt_for_shares<W: Write>(err: &mut W, interactive: bool) -> io::Result<()> {
    if interactive {
        writeln!(err, "reading shares from stdin, one per line")?;
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "sharedsecret=debug,sharedsecret_math=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}
