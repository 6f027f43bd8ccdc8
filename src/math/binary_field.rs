use num_traits::ConstOne;
use num_traits::ConstZero;
use num_traits::Zero;

use crate::error::FieldError;
use crate::error::FieldSetupError;
use crate::math::gf2_polynomial::Gf2Poly;
use crate::math::traits::Field;

/// The binary field GF(2^m) = GF(2)\[x\] / (m(x)).
///
/// Elements are [`Gf2Poly`]s of degree below the modulus degree; every
/// operation returns fully reduced values, so no non-canonical
/// representative ever escapes the field. Extension degrees up to
/// [`Self::MAX_DEGREE`] are supported; larger moduli are refused at setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryField {
    modulus: Gf2Poly,
}

impl BinaryField {
    /// The largest supported extension degree m. Reduced elements then have
    /// degree below 32, so every product computed during setup and field
    /// arithmetic fits [`Gf2Poly`]'s 64-bit representation.
    pub const MAX_DEGREE: u32 = 32;

    /// Sets up GF(2^m) from a defining modulus.
    ///
    /// Both irreducibility tests are run and cross-checked here, once; the
    /// arithmetic itself never re-validates the modulus.
    ///
    /// # Errors
    ///
    /// - [`FieldSetupError::DegenerateModulus`] if the modulus has degree
    ///   below 1,
    /// - [`FieldSetupError::ModulusDegreeTooLarge`] if the modulus degree
    ///   exceeds [`Self::MAX_DEGREE`],
    /// - [`FieldSetupError::ReducibleModulus`] if it does not define a field,
    /// - [`FieldSetupError::IrreducibilityTestsDisagree`] if the two tests
    ///   contradict each other.
    pub fn new(modulus: Gf2Poly) -> Result<Self, FieldSetupError> {
        if modulus.degree() < 1 {
            return Err(FieldSetupError::DegenerateModulus);
        }
        if modulus.degree() as u32 > Self::MAX_DEGREE {
            return Err(FieldSetupError::ModulusDegreeTooLarge(
                modulus.degree() as u32,
            ));
        }
        match (
            modulus.is_irreducible_iterated(),
            modulus.is_irreducible_exhaustive(),
        ) {
            (true, true) => Ok(Self { modulus }),
            (false, false) => Err(FieldSetupError::ReducibleModulus),
            _ => Err(FieldSetupError::IrreducibilityTestsDisagree),
        }
    }

    pub const fn modulus(&self) -> Gf2Poly {
        self.modulus
    }

    /// The extension degree m over GF(2).
    pub fn degree(&self) -> u32 {
        self.modulus.degree() as u32
    }
}

impl Field for BinaryField {
    type Element = Gf2Poly;

    fn zero(&self) -> Gf2Poly {
        Gf2Poly::ZERO
    }

    fn one(&self) -> Gf2Poly {
        Gf2Poly::ONE
    }

    fn add(&self, a: &Gf2Poly, b: &Gf2Poly) -> Gf2Poly {
        *a + *b
    }

    fn sub(&self, a: &Gf2Poly, b: &Gf2Poly) -> Gf2Poly {
        *a - *b
    }

    fn mul(&self, a: &Gf2Poly, b: &Gf2Poly) -> Gf2Poly {
        (*a * *b) % self.modulus
    }

    /// Extended Euclid against the modulus. The gcd is 1 for every non-zero
    /// reduced element because the modulus is irreducible.
    fn inv(&self, a: &Gf2Poly) -> Result<Gf2Poly, FieldError> {
        if a.is_zero() {
            return Err(FieldError::ZeroInverse);
        }
        let (_, inverse, _) = a.xgcd(self.modulus);
        Ok(inverse % self.modulus)
    }

    fn order(&self) -> u128 {
        1_u128 << self.degree()
    }

    fn element(&self, index: u128) -> Gf2Poly {
        debug_assert!(index < self.order());
        Gf2Poly::from_bits(index as u64)
    }
}
