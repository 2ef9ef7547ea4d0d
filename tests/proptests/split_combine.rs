//! Property tests for split/combine workflows

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use shamir::{combine, split, split_with};

/// Wrapper for non-empty secrets
#[derive(Clone, Debug)]
struct Secret(Vec<u8>);

impl Arbitrary for Secret {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut bytes = Vec::<u8>::arbitrary(g);
        if bytes.is_empty() {
            bytes.push(u8::arbitrary(g));
        }
        Secret(bytes)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            self.0
                .shrink()
                .filter(|bytes| !bytes.is_empty())
                .map(Secret),
        )
    }
}

/// Wrapper for valid threshold and share count pairs
#[derive(Clone, Copy, Debug)]
struct ValidShamirParams {
    threshold: usize,
    num_shares: usize,
}

impl Arbitrary for ValidShamirParams {
    fn arbitrary(g: &mut Gen) -> Self {
        // Generate share count between 2 and 20 (keep it reasonable for testing)
        let num_shares = usize::from(u8::arbitrary(g) % 19) + 2; // 2..=20

        // Generate threshold between 2 and num_shares (never 1)
        let threshold = usize::from(u8::arbitrary(g)) % (num_shares - 1) + 2; // 2..=num_shares

        ValidShamirParams {
            threshold,
            num_shares,
        }
    }
}

/// Splitting and combining exactly `threshold` shares recovers the secret
#[quickcheck]
fn prop_split_combine_round_trip(secret: Secret, params: ValidShamirParams) -> bool {
    let Secret(secret) = secret;
    let Ok(shares) = split(&secret, params.num_shares, params.threshold) else {
        return false;
    };

    if shares.len() != params.num_shares {
        return false;
    }

    let Ok(recovered) = combine(&shares[..params.threshold]) else {
        return false;
    };

    *recovered == secret
}

/// Every share is one byte longer than the secret and ends in a unique nonzero coordinate
#[quickcheck]
fn prop_share_layout(secret: Secret, params: ValidShamirParams) -> bool {
    let Secret(secret) = secret;
    let Ok(shares) = split(&secret, params.num_shares, params.threshold) else {
        return false;
    };

    let mut seen = [false; 256];
    for share in &shares {
        if share.len() != secret.len() + 1 {
            return false;
        }
        let x = usize::from(share[secret.len()]);
        if x == 0 || seen[x] {
            return false;
        }
        seen[x] = true;
    }
    true
}

/// Any random selection of threshold shares, in any order, works
#[quickcheck]
fn prop_random_share_selection_works(
    secret: Secret,
    params: ValidShamirParams,
    selection_seed: u64,
) -> bool {
    let Secret(secret) = secret;
    let Ok(shares) = split(&secret, params.num_shares, params.threshold) else {
        return false;
    };

    let mut selection_rng = StdRng::seed_from_u64(selection_seed);
    let selected: Vec<&Vec<u8>> = shares
        .choose_multiple(&mut selection_rng, params.threshold)
        .collect();

    let Ok(recovered) = combine(&selected) else {
        return false;
    };

    *recovered == secret
}

/// Supplying more than threshold shares still recovers the secret
#[quickcheck]
fn prop_superset_recovers(secret: Secret, params: ValidShamirParams) -> bool {
    let Secret(secret) = secret;
    let Ok(shares) = split(&secret, params.num_shares, params.threshold) else {
        return false;
    };

    let Ok(recovered) = combine(&shares) else {
        return false;
    };

    *recovered == secret
}

/// Permuting the share order does not change the result, even below threshold
#[quickcheck]
fn prop_combine_order_independent(secret: Secret, params: ValidShamirParams, seed: u64) -> bool {
    let Secret(secret) = secret;
    let mut rng = StdRng::seed_from_u64(seed);
    let Ok(shares) = split_with(&secret, params.num_shares, params.threshold, &mut rng) else {
        return false;
    };

    let mut shuffled = shares.clone();
    shuffled.shuffle(&mut rng);

    match (combine(&shares), combine(&shuffled)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Same shares in, same bytes out
#[quickcheck]
fn prop_combine_deterministic(secret: Secret, params: ValidShamirParams) -> bool {
    let Secret(secret) = secret;
    let Ok(shares) = split(&secret, params.num_shares, params.threshold) else {
        return false;
    };

    let subset = &shares[..2];
    combine(subset) == combine(subset)
}

/// Any split with threshold > parts is rejected
#[quickcheck]
fn prop_threshold_above_parts_rejected(secret: Secret, parts: u8, extra: u8) -> bool {
    let Secret(secret) = secret;
    let parts = usize::from(parts);
    let threshold = parts + usize::from(extra) + 1;
    split(&secret, parts, threshold).is_err()
}
