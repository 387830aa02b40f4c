use sharedsecret::params::{DEFAULT_SHARES, DEFAULT_THRESHOLD};
use sharedsecret::{recover, split};

/// Generate a random secret and split it. Two shares are not enough to
/// recover it, three are.
fn main() {
    let (shares, secret) =
        split(DEFAULT_SHARES, DEFAULT_THRESHOLD).expect("valid share configuration");

    // Now the shares go to different parties and everyone forgets the
    // secret. Later, any three of them get together.
    let wrong = recover(&[&shares[1], &shares[3]]).expect("distinct shares");
    let correct = recover(&[&shares[1], &shares[3], &shares[0]]).expect("distinct shares");

    println!("{} {}", secret != wrong, secret == correct);
}
