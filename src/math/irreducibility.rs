//! Irreducibility testing for polynomials over an arbitrary [`Field`].
//!
//! Two independent algorithms are provided on purpose. Field construction
//! runs both and refuses to proceed when they disagree, so a bug in either
//! test cannot silently bless a reducible modulus.

use crate::math::polynomial::Polynomial;
use crate::math::traits::Field;

/// Rabin's irreducibility criterion, driven by an iterated Frobenius map.
///
/// A degree-`n` polynomial `f` over GF(q) is irreducible iff
/// `x^(q^n) ≡ x (mod f)` and `gcd(x^(q^(n/r)) - x, f) == 1` for every prime
/// `r` dividing `n`.
pub fn is_irreducible_iterated<F: Field>(candidate: &Polynomial<F::Element>, field: &F) -> bool {
    let n = candidate.degree();
    if n < 1 {
        return false;
    }
    if n == 1 {
        return true;
    }

    let n = n as u32;
    let q = field.order();
    let cofactors: Vec<u32> = prime_divisors(n).into_iter().map(|r| n / r).collect();

    let x = Polynomial::x(field);
    let mut frobenius = x.reduce(candidate, field);
    for k in 1..=n {
        frobenius = mod_pow(&frobenius, q, candidate, field);
        if cofactors.contains(&k) {
            let gcd = gcd(frobenius.sub(&x, field), candidate.clone(), field);
            if gcd.degree() != 0 {
                return false;
            }
        }
    }
    frobenius == x.reduce(candidate, field)
}

/// Exhaustive irreducibility test: trial division by every monic polynomial
/// of degree 1 through n/2, enumerated through the field's canonical element
/// enumeration.
///
/// Cost grows as `q^(n/2)`; only viable for small fields, which is exactly
/// the regime where a slow, obviously-correct cross-check is wanted.
///
/// # Panics
///
/// Panics if the divisor space `q^(n/2)` does not fit in a `u128`.
pub fn is_irreducible_exhaustive<F: Field>(candidate: &Polynomial<F::Element>, field: &F) -> bool {
    let n = candidate.degree();
    if n < 1 {
        return false;
    }

    let q = field.order();
    for divisor_degree in 1..=(n as u32 / 2) {
        let divisor_count = q
            .checked_pow(divisor_degree)
            .expect("field is too large for exhaustive irreducibility testing");
        for index in 0..divisor_count {
            let divisor = monic_polynomial(index, divisor_degree, field);
            if candidate.reduce(&divisor, field).is_zero() {
                return false;
            }
        }
    }
    true
}

/// The `index`-th monic polynomial of the given degree: the lower
/// coefficients are the base-q digits of `index`.
fn monic_polynomial<F: Field>(index: u128, degree: u32, field: &F) -> Polynomial<F::Element> {
    let q = field.order();
    let mut remaining = index;
    let mut coefficients = Vec::with_capacity(degree as usize + 1);
    for _ in 0..degree {
        coefficients.push(field.element(remaining % q));
        remaining /= q;
    }
    coefficients.push(field.one());
    Polynomial::new(coefficients, field)
}

/// `base^exponent mod modulus` by square-and-multiply.
fn mod_pow<F: Field>(
    base: &Polynomial<F::Element>,
    exponent: u128,
    modulus: &Polynomial<F::Element>,
    field: &F,
) -> Polynomial<F::Element> {
    let mut acc = Polynomial::one(field);
    let mut square = base.clone();
    let mut remaining = exponent;
    while remaining > 0 {
        if remaining & 1 == 1 {
            acc = acc.mul(&square, field).reduce(modulus, field);
        }
        square = square.mul(&square, field).reduce(modulus, field);
        remaining >>= 1;
    }
    acc
}

fn gcd<F: Field>(
    mut x: Polynomial<F::Element>,
    mut y: Polynomial<F::Element>,
    field: &F,
) -> Polynomial<F::Element> {
    while !y.is_zero() {
        let remainder = x.reduce(&y, field);
        x = y;
        y = remainder;
    }
    x
}

fn prime_divisors(mut n: u32) -> Vec<u32> {
    let mut divisors = vec![];
    let mut candidate = 2;
    while candidate * candidate <= n {
        if n % candidate == 0 {
            divisors.push(candidate);
            while n % candidate == 0 {
                n /= candidate;
            }
        }
        candidate += 1;
    }
    if n > 1 {
        divisors.push(n);
    }
    divisors
}
