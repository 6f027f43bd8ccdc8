use crate::error::FieldError;
use crate::error::FieldSetupError;
use crate::math::irreducibility::is_irreducible_exhaustive;
use crate::math::irreducibility::is_irreducible_iterated;
use crate::math::polynomial::Polynomial;
use crate::math::traits::Field;

/// The extension field GF(q^n) = F\[y\] / (m(y)) over an arbitrary base
/// field F of order q.
///
/// Elements are [`Polynomial`]s over the base field, reduced modulo the
/// defining modulus. Since the base is any [`Field`] (including another
/// `ExtensionField`), towers of extensions come for free.
#[derive(Debug, Clone)]
pub struct ExtensionField<F: Field> {
    base: F,
    modulus: Polynomial<F::Element>,
}

impl<F: Field> ExtensionField<F> {
    /// Sets up GF(q^n) from a base field and a defining modulus over it.
    ///
    /// Runs both irreducibility tests and cross-checks them, once. A
    /// reducible modulus is refused outright; no partially valid field is
    /// produced.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`BinaryField::new`].
    ///
    /// [`BinaryField::new`]: super::binary_field::BinaryField::new
    pub fn new(base: F, modulus: Polynomial<F::Element>) -> Result<Self, FieldSetupError> {
        if modulus.degree() < 1 {
            return Err(FieldSetupError::DegenerateModulus);
        }
        match (
            is_irreducible_iterated(&modulus, &base),
            is_irreducible_exhaustive(&modulus, &base),
        ) {
            (true, true) => Ok(Self { base, modulus }),
            (false, false) => Err(FieldSetupError::ReducibleModulus),
            _ => Err(FieldSetupError::IrreducibilityTestsDisagree),
        }
    }

    pub fn base(&self) -> &F {
        &self.base
    }

    pub fn modulus(&self) -> &Polynomial<F::Element> {
        &self.modulus
    }

    /// The extension degree n over the base field.
    pub fn degree(&self) -> u32 {
        self.modulus.degree() as u32
    }

    /// The element represented by a raw coefficient vector over the base
    /// field, reduced into the field.
    ///
    /// This is the fixed embedding used to carry a coefficient pattern from
    /// one extension field into another: the bits do not change, only the
    /// arithmetic wrapped around them does.
    pub fn from_coefficients(&self, coefficients: Vec<F::Element>) -> Polynomial<F::Element> {
        Polynomial::new(coefficients, &self.base).reduce(&self.modulus, &self.base)
    }
}

impl<F: Field> Field for ExtensionField<F> {
    type Element = Polynomial<F::Element>;

    fn zero(&self) -> Self::Element {
        Polynomial::zero()
    }

    fn one(&self) -> Self::Element {
        Polynomial::one(&self.base)
    }

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.add(b, &self.base)
    }

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.sub(b, &self.base)
    }

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element {
        a.mul(b, &self.base).reduce(&self.modulus, &self.base)
    }

    /// Extended Euclid against the modulus; the gcd of a non-zero reduced
    /// element and an irreducible modulus is 1, so the Bézout coefficient of
    /// the element is its inverse.
    fn inv(&self, a: &Self::Element) -> Result<Self::Element, FieldError> {
        if a.is_zero() {
            return Err(FieldError::ZeroInverse);
        }
        let (_, inverse, _) = Polynomial::xgcd(a.clone(), self.modulus.clone(), &self.base);
        Ok(inverse.reduce(&self.modulus, &self.base))
    }

    fn order(&self) -> u128 {
        self.base
            .order()
            .checked_pow(self.degree())
            .expect("field order must fit in u128")
    }

    fn element(&self, index: u128) -> Self::Element {
        debug_assert!(index < self.order());
        let q = self.base.order();
        let mut remaining = index;
        let mut coefficients = Vec::with_capacity(self.degree() as usize);
        for _ in 0..self.degree() {
            coefficients.push(self.base.element(remaining % q));
            remaining /= q;
        }
        Polynomial::new(coefficients, &self.base)
    }
}
