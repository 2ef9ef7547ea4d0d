//! Arithmetic in GF(2^8)
//!
//! Elements are plain bytes. The field is defined by the irreducible polynomial
//! x^8 + x^4 + x^3 + x + 1 (0x11B), the same one AES uses. Multiplication and
//! inversion go through log/antilog tables built at compile time from the
//! generator `0x03`.

use crate::error::{Result, ShamirError};

/// Low byte of the reduction polynomial (x^8 is implied)
const REDUCTION: u8 = 0x1B;

/// Primitive element used to build the log tables
const GENERATOR: u8 = 0x03;

const TABLES: ([u8; 512], [u8; 256]) = build_tables();

/// `EXP[i] = GENERATOR^i`, repeated so `LOG[a] + LOG[b]` never needs a modulo
static EXP: [u8; 512] = TABLES.0;

/// Discrete log of each nonzero element; `LOG[0]` is unused
static LOG: [u8; 256] = TABLES.1;

/// Shift-and-add multiplication with reduction after every shift
///
/// Only used to build the tables and as a test reference.
const fn carryless_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= REDUCTION;
        }
        b >>= 1;
    }
    product
}

const fn build_tables() -> ([u8; 512], [u8; 256]) {
    let mut exp = [0u8; 512];
    let mut log = [0u8; 256];
    let mut x: u8 = 1;
    let mut i = 0;
    while i < 255 {
        exp[i] = x;
        exp[i + 255] = x;
        log[x as usize] = i as u8;
        x = carryless_mul(x, GENERATOR);
        i += 1;
    }
    (exp, log)
}

/// Field addition (and subtraction): bitwise XOR
#[inline]
#[must_use]
pub fn add(a: u8, b: u8) -> u8 {
    a ^ b
}

/// Field multiplication
#[inline]
#[must_use]
pub fn mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    EXP[LOG[a as usize] as usize + LOG[b as usize] as usize]
}

/// Multiplicative inverse
///
/// # Errors
/// Returns [`ShamirError::Domain`] for zero, which has no inverse.
#[inline]
pub fn inverse(a: u8) -> Result<u8> {
    if a == 0 {
        return Err(ShamirError::Domain);
    }
    Ok(EXP[255 - LOG[a as usize] as usize])
}

/// Field division `a / b`
///
/// # Errors
/// Returns [`ShamirError::Domain`] when `b` is zero.
#[inline]
pub fn div(a: u8, b: u8) -> Result<u8> {
    Ok(mul(a, inverse(b)?))
}
