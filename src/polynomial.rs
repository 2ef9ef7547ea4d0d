//! Polynomials over GF(2^8)

use zeroize::Zeroizing;

use crate::error::Result;
use crate::gf256;
use crate::random::RandomSource;

/// Evaluates a polynomial at `x` using Horner's method
///
/// `coefficients[0]` is the constant term. An empty slice is the zero polynomial.
#[must_use]
pub fn evaluate(coefficients: &[u8], x: u8) -> u8 {
    coefficients
        .iter()
        .rev()
        .fold(0, |acc, &coefficient| gf256::add(gf256::mul(acc, x), coefficient))
}

/// Lagrange basis polynomials for the nodes `xs`, each evaluated at `x`
///
/// Field subtraction is XOR, so basis `j` is the product over `m != j` of
/// `(x + x_m) / (x_j + x_m)`. The weights depend only on the nodes, so
/// callers interpolating many values over the same nodes compute them once.
///
/// # Errors
/// Returns [`ShamirError::Domain`](crate::error::ShamirError::Domain) if two nodes coincide.
pub fn lagrange_basis(xs: &[u8], x: u8) -> Result<Vec<u8>> {
    xs.iter()
        .enumerate()
        .map(|(j, &x_j)| {
            xs.iter()
                .enumerate()
                .filter(|&(m, _)| m != j)
                .try_fold(1u8, |basis, (_, &x_m)| -> Result<u8> {
                    let term = gf256::div(gf256::add(x, x_m), gf256::add(x_j, x_m))?;
                    Ok(gf256::mul(basis, term))
                })
        })
        .collect()
}

/// Dot product of y-values with precomputed basis weights
#[must_use]
pub fn weighted_sum(weights: &[u8], ys: impl IntoIterator<Item = u8>) -> u8 {
    weights
        .iter()
        .zip(ys)
        .fold(0, |acc, (&w, y)| gf256::add(acc, gf256::mul(w, y)))
}

/// Evaluates the Lagrange interpolant through `points` at `x`
///
/// `points` are `(x, y)` pairs.
///
/// # Errors
/// Returns [`ShamirError::Domain`](crate::error::ShamirError::Domain) if two points share an x value.
pub fn interpolate(points: &[(u8, u8)], x: u8) -> Result<u8> {
    let xs: Vec<u8> = points.iter().map(|&(x_j, _)| x_j).collect();
    let weights = lagrange_basis(&xs, x)?;
    Ok(weighted_sum(&weights, points.iter().map(|&(_, y)| y)))
}

/// A polynomial whose coefficients are wiped on drop
pub struct Polynomial {
    coefficients: Zeroizing<Vec<u8>>,
}

impl Polynomial {
    /// Builds a polynomial with constant term `intercept` and `degree` fresh
    /// random higher-order coefficients
    ///
    /// # Errors
    /// Returns an error if the random source fails
    pub fn random<R: RandomSource + ?Sized>(intercept: u8, degree: usize, rng: &mut R) -> Result<Self> {
        let mut coefficients = Zeroizing::new(vec![0u8; degree + 1]);
        coefficients[0] = intercept;
        rng.fill_elements(&mut coefficients[1..])?;
        Ok(Self { coefficients })
    }

    #[must_use]
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    #[must_use]
    pub fn intercept(&self) -> u8 {
        self.coefficients[0]
    }

    #[must_use]
    pub fn evaluate(&self, x: u8) -> u8 {
        evaluate(&self.coefficients, x)
    }
}

impl std::fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Polynomial")
            .field("degree", &self.degree())
            .finish_non_exhaustive()
    }
}
