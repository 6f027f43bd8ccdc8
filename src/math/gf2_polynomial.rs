use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Rem;
use std::ops::Sub;
use std::ops::SubAssign;

use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

/// A polynomial over GF(2) in bit-vector representation.
///
/// Bit `i` is the coefficient of `x^i`, so the representation is canonical by
/// construction: there are no dangling zero high terms to normalize away.
/// Polynomials of degree up to 63 are representable, and [`Mul`] panics when
/// a product would not be; [`BinaryField`] caps its modulus degree so that
/// reduced-element products always fit.
///
/// `Gf2Poly` is the polynomial *ring* GF(2)\[x\]; reduction modulo a fixed
/// irreducible element of this ring, and thus field arithmetic, lives in
/// [`BinaryField`].
///
/// [`BinaryField`]: super::binary_field::BinaryField
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Gf2Poly(u64);

impl Gf2Poly {
    /// The monomial `x`.
    pub const X: Self = Self(0b10);

    #[inline]
    pub const fn from_bits(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// The degree, with the zero polynomial mapped to -1.
    #[inline]
    pub const fn degree(self) -> isize {
        63 - self.0.leading_zeros() as isize
    }

    /// Polynomial long division: `self == quotient * divisor + remainder`
    /// with `remainder.degree() < divisor.degree()`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    pub fn div_rem(self, divisor: Self) -> (Self, Self) {
        assert!(!divisor.is_zero(), "cannot divide by the zero polynomial");
        let divisor_degree = divisor.degree();
        let mut quotient = 0;
        let mut remainder = self;
        while remainder.degree() >= divisor_degree {
            let shift = (remainder.degree() - divisor_degree) as u32;
            quotient |= 1 << shift;
            remainder.0 ^= divisor.0 << shift;
        }
        (Self(quotient), remainder)
    }

    pub fn gcd(self, other: Self) -> Self {
        let (mut x, mut y) = (self, other);
        while !y.is_zero() {
            let remainder = x % y;
            x = y;
            y = remainder;
        }
        x
    }

    /// Extended Euclid: returns `(g, u, v)` with `u * self + v * other == g`
    /// and `g == gcd(self, other)`.
    pub fn xgcd(self, other: Self) -> (Self, Self, Self) {
        let (mut x, mut y) = (self, other);
        let (mut u0, mut u1) = (Self::ONE, Self::ZERO);
        let (mut v0, mut v1) = (Self::ZERO, Self::ONE);
        while !y.is_zero() {
            let (quotient, remainder) = x.div_rem(y);
            (x, y) = (y, remainder);
            (u0, u1) = (u1, u0 + quotient * u1);
            (v0, v1) = (v1, v0 + quotient * v1);
        }
        (x, u0, v0)
    }

    /// Iterated Frobenius irreducibility test, Rabin's criterion.
    ///
    /// `f` of degree `n` is irreducible over GF(2) iff `x^(2^n) ≡ x (mod f)`
    /// and `gcd(x^(2^(n/r)) - x, f) == 1` for every prime `r` dividing `n`.
    /// The Frobenius powers are produced by a single squaring chain.
    pub fn is_irreducible_iterated(self) -> bool {
        let n = self.degree();
        if n < 1 {
            return false;
        }
        if n == 1 {
            return true;
        }

        let n = n as u32;
        let cofactors: Vec<u32> = prime_divisors(n).into_iter().map(|r| n / r).collect();
        let x = Self::X % self;
        let mut frobenius = x;
        for k in 1..=n {
            frobenius = (frobenius * frobenius) % self;
            if cofactors.contains(&k) && (frobenius + x).gcd(self).degree() != 0 {
                return false;
            }
        }
        frobenius == x
    }

    /// Exhaustive irreducibility test: trial division by every polynomial of
    /// degree 1 through n/2. Over GF(2) every such polynomial is monic.
    pub fn is_irreducible_exhaustive(self) -> bool {
        let n = self.degree();
        if n < 1 {
            return false;
        }
        for divisor_degree in 1..=(n as u32 / 2) {
            for bits in (1_u64 << divisor_degree)..(1 << (divisor_degree + 1)) {
                if (self % Self(bits)).is_zero() {
                    return false;
                }
            }
        }
        true
    }
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

impl Display for Gf2Poly {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let degree = match self.degree() {
            -1 => return write!(f, "0"),
            d => d as usize,
        };

        for pow in (0..=degree).rev() {
            if self.0 >> pow & 1 == 0 {
                continue;
            }
            if pow != degree {
                write!(f, " + ")?;
            }
            match pow {
                0 => write!(f, "1")?,
                1 => write!(f, "x")?,
                _ => write!(f, "x^{pow}")?,
            }
        }

        Ok(())
    }
}

impl Add for Gf2Poly {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

/// Subtraction coincides with addition in characteristic 2.
impl Sub for Gf2Poly {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + rhs
    }
}

impl Neg for Gf2Poly {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self
    }
}

impl Mul for Gf2Poly {
    type Output = Self;

    /// Carry-less product.
    ///
    /// # Panics
    ///
    /// Panics if the product degree exceeds the 64-bit representation.
    fn mul(self, rhs: Self) -> Self {
        let mut product: u128 = 0;
        let lhs = self.0 as u128;
        let mut remaining = rhs.0;
        let mut shift = 0;
        while remaining != 0 {
            if remaining & 1 == 1 {
                product ^= lhs << shift;
            }
            remaining >>= 1;
            shift += 1;
        }
        assert!(
            product >> 64 == 0,
            "product degree exceeds the 64-bit representation"
        );
        Self(product as u64)
    }
}

impl Div for Gf2Poly {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.div_rem(rhs).0
    }
}

impl Rem for Gf2Poly {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        self.div_rem(rhs).1
    }
}

impl AddAssign for Gf2Poly {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl SubAssign for Gf2Poly {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl MulAssign for Gf2Poly {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Zero for Gf2Poly {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl ConstZero for Gf2Poly {
    const ZERO: Self = Self(0);
}

impl One for Gf2Poly {
    fn one() -> Self {
        Self::ONE
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }
}

impl ConstOne for Gf2Poly {
    const ONE: Self = Self(1);
}
