//! Property tests for GF(2^8) arithmetic and polynomial evaluation

use quickcheck_macros::quickcheck;
use shamir::{gf256, polynomial};

#[quickcheck]
fn prop_mul_commutative(a: u8, b: u8) -> bool {
    gf256::mul(a, b) == gf256::mul(b, a)
}

#[quickcheck]
fn prop_mul_associative(a: u8, b: u8, c: u8) -> bool {
    gf256::mul(gf256::mul(a, b), c) == gf256::mul(a, gf256::mul(b, c))
}

#[quickcheck]
fn prop_mul_distributes_over_add(a: u8, b: u8, c: u8) -> bool {
    gf256::mul(a, gf256::add(b, c)) == gf256::add(gf256::mul(a, b), gf256::mul(a, c))
}

#[quickcheck]
fn prop_add_associative(a: u8, b: u8, c: u8) -> bool {
    gf256::add(gf256::add(a, b), c) == gf256::add(a, gf256::add(b, c))
}

#[quickcheck]
fn prop_inverse_is_involution(a: u8) -> bool {
    if a == 0 {
        return gf256::inverse(a).is_err();
    }
    let Ok(inv) = gf256::inverse(a) else {
        return false;
    };
    gf256::inverse(inv) == Ok(a)
}

/// Evaluation is linear in the coefficients
#[quickcheck]
fn prop_evaluate_linear(p: Vec<u8>, q: Vec<u8>, x: u8) -> bool {
    let len = p.len().max(q.len());
    let sum: Vec<u8> = (0..len)
        .map(|i| gf256::add(*p.get(i).unwrap_or(&0), *q.get(i).unwrap_or(&0)))
        .collect();

    polynomial::evaluate(&sum, x)
        == gf256::add(polynomial::evaluate(&p, x), polynomial::evaluate(&q, x))
}

/// Interpolating through evaluations of a polynomial reproduces it anywhere
#[quickcheck]
fn prop_interpolate_reproduces_polynomial(coefficients: Vec<u8>, at: u8) -> bool {
    if coefficients.is_empty() || coefficients.len() > 255 {
        return true;
    }

    let points: Vec<(u8, u8)> = (1..=255u8)
        .take(coefficients.len())
        .map(|x| (x, polynomial::evaluate(&coefficients, x)))
        .collect();

    polynomial::interpolate(&points, at) == Ok(polynomial::evaluate(&coefficients, at))
}
