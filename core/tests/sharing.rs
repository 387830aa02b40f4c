use num_bigint::BigUint;
use sharedsecret::math::interpolate;
use sharedsecret::{
    recover, split, split_given_secret, PrimeField, Share, SharedSecret, SharingError,
};

const DISTRIBUTED_SECRET: u64 = 120398491412912873;

fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    fn helper<T: Clone>(
        items: &[T],
        k: usize,
        start: usize,
        current: &mut Vec<T>,
        result: &mut Vec<Vec<T>>,
    ) {
        if current.len() == k {
            result.push(current.clone());
            return;
        }
        for idx in start..items.len() {
            current.push(items[idx].clone());
            helper(items, k, idx + 1, current, result);
            current.pop();
        }
    }

    let mut result = Vec::new();
    let mut current = Vec::new();
    helper(items, k, 0, &mut current, &mut result);
    result
}

#[test]
fn every_threshold_subset_recovers_the_secret() {
    for (n, k) in [(1, 1), (3, 2), (5, 3), (6, 6), (7, 4)] {
        let (shares, secret) = split(n, k).unwrap();
        let subsets = combinations(&shares, k);
        assert!(!subsets.is_empty());
        for subset in subsets {
            assert_eq!(secret, recover(&subset).unwrap(), "n={n} k={k}");
        }
    }
}

#[test]
fn given_secret_is_recovered_from_any_three_of_five() {
    let secret = BigUint::from(DISTRIBUTED_SECRET);
    let shares = split_given_secret(&secret, 5, 3).unwrap();
    assert_eq!(5, shares.len());

    for subset in combinations(&shares, 3) {
        assert_eq!(secret, recover(&subset).unwrap());
    }

    let recovered = recover(&[shares[1].clone(), shares[3].clone(), shares[0].clone()]).unwrap();
    assert_eq!(DISTRIBUTED_SECRET.to_string(), recovered.to_string());
}

#[test]
fn more_shares_than_threshold_still_recover() {
    let (shares, secret) = split(8, 3).unwrap();
    for size in 3..=8 {
        for subset in combinations(&shares, size).into_iter().take(10) {
            assert_eq!(secret, recover(&subset).unwrap());
        }
    }
}

#[test]
fn fewer_than_threshold_shares_do_not_recover() {
    // Not an error: the caller owns the threshold. The result is just wrong.
    for _ in 0..20 {
        let (shares, secret) = split(5, 3).unwrap();
        for subset in combinations(&shares, 2) {
            let wrong = recover(&subset).unwrap();
            assert_ne!(secret, wrong);
        }
    }
}

#[test]
fn fewer_than_threshold_shares_are_uncorrelated_in_a_small_field() {
    // With k - 1 shares every candidate secret is equally likely, so the
    // value recovered from them matches the real secret about 1/p of the time.
    let field = PrimeField::try_from(101u64).unwrap();
    let scheme = SharedSecret::new(field);
    let mut rng = rand::thread_rng();
    let trials = 2000;
    let hits = (0..trials)
        .filter(|_| {
            let (shares, secret) = scheme.split(4, 3, &mut rng).unwrap();
            scheme.recover(&shares[..2]).unwrap() == secret
        })
        .count();
    // expected ~20 hits
    assert!(hits < 80, "{hits} hits out of {trials}");
}

#[test]
fn split_rejects_bad_parameters() {
    assert!(matches!(
        split(1, 2),
        Err(SharingError::InvalidThreshold { .. })
    ));
    assert!(matches!(
        split(1, 0),
        Err(SharingError::InvalidThreshold { .. })
    ));
}

#[test]
fn shares_survive_text_transport() {
    let secret = BigUint::from(DISTRIBUTED_SECRET);
    let shares = split_given_secret(&secret, 5, 3).unwrap();
    let lines: Vec<String> = shares.iter().map(Share::encode).collect();

    let mut received: Vec<&str> = lines.iter().map(String::as_str).collect();
    received.insert(1, "garbage");
    received.insert(3, "4,5,6");

    // skip malformed shares and recover from the rest
    let decoded: Vec<Share> = received
        .into_iter()
        .filter_map(|line| Share::decode(line).ok())
        .collect();
    assert_eq!(5, decoded.len());
    assert_eq!(secret, recover(&decoded[..3]).unwrap());
}

#[test]
fn shares_survive_json_transport() {
    let (shares, secret) = split(4, 2).unwrap();
    let json = serde_json::to_string(&shares).unwrap();
    let back: Vec<Share> = serde_json::from_str(&json).unwrap();
    assert_eq!(shares, back);
    assert_eq!(secret, recover(&back[2..]).unwrap());
}

#[test]
fn interpolation_reproduces_sample_points() {
    let field = PrimeField::try_from(13u64).unwrap();
    let xs: Vec<BigUint> = [1u32, 12, 6].into_iter().map(BigUint::from).collect();
    let ys: Vec<BigUint> = [4u32, 2, 7].into_iter().map(BigUint::from).collect();
    for (x, y) in xs.iter().zip(&ys) {
        assert_eq!(y, &interpolate(x, &xs, &ys, &field).unwrap());
    }
}

#[test]
fn custom_field_round_trip() {
    let field: PrimeField = "340282366920938463463374607431768211297".parse().unwrap();
    assert_eq!(128, field.bits());
    let scheme = SharedSecret::new(field);
    let mut rng = rand::thread_rng();
    let (shares, secret) = scheme.split(7, 5, &mut rng).unwrap();
    for subset in combinations(&shares, 5) {
        assert_eq!(secret, scheme.recover(&subset).unwrap());
    }
}
