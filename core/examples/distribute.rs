use num_bigint::BigUint;
use sharedsecret::{recover, split_given_secret};

/// Distribute a known secret into five shares and recover it from three.
fn main() {
    let secret = BigUint::from(120398491412912873u64);

    let shares = split_given_secret(&secret, 5, 3).expect("valid share configuration");
    for share in &shares {
        println!("{share}");
    }

    let recovered = recover(&[&shares[1], &shares[3], &shares[0]]).expect("distinct shares");
    assert_eq!(secret, recovered);
    println!("{recovered}");
}
