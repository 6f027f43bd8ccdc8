use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

use rand::Rng;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::FieldError;

/// Anything that can sit in a coefficient slot or a sequence position.
///
/// The bound is structural only; all arithmetic goes through the owning
/// [`Field`], so an element type carries no modulus of its own.
pub trait FieldElement:
    Clone + Debug + Display + Eq + Hash + Serialize + DeserializeOwned
{
}

impl<T> FieldElement for T where
    T: Clone + Debug + Display + Eq + Hash + Serialize + DeserializeOwned
{
}

/// The capability interface every consumer of field arithmetic is generic
/// over.
///
/// A `Field` value bundles the four operations `add`, `sub`, `mul`, `inv`
/// together with the identities and a canonical enumeration of the field.
/// Different values of the same `Field` type may represent different fields
/// (for instance, two [`BinaryField`](super::binary_field::BinaryField)s with
/// different moduli); elements are only meaningful relative to the field that
/// produced them.
///
/// Every operation returns values in canonical, fully reduced form.
pub trait Field: Clone + Debug {
    type Element: FieldElement;

    /// The additive identity.
    fn zero(&self) -> Self::Element;

    /// The multiplicative identity.
    fn one(&self) -> Self::Element;

    fn add(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn sub(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    fn mul(&self, a: &Self::Element, b: &Self::Element) -> Self::Element;

    /// The multiplicative inverse: `mul(a, inv(a)?) == one()`.
    ///
    /// # Errors
    ///
    /// [`FieldError::ZeroInverse`] if and only if `a` is the additive
    /// identity.
    fn inv(&self, a: &Self::Element) -> Result<Self::Element, FieldError>;

    /// The number of elements in the field.
    fn order(&self) -> u128;

    /// The element at position `index` in the canonical enumeration of the
    /// field. Position 0 is the additive identity.
    ///
    /// # Panics
    ///
    /// May panic if `index >= self.order()`.
    fn element(&self, index: u128) -> Self::Element;

    fn is_zero(&self, a: &Self::Element) -> bool {
        *a == self.zero()
    }

    fn is_one(&self, a: &Self::Element) -> bool {
        *a == self.one()
    }

    fn neg(&self, a: &Self::Element) -> Self::Element {
        self.sub(&self.zero(), a)
    }

    /// Square-and-multiply exponentiation. `pow(a, 0)` is the multiplicative
    /// identity, also for zero `a`.
    fn pow(&self, base: &Self::Element, exponent: u128) -> Self::Element {
        let mut acc = self.one();
        let mut square = base.clone();
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                acc = self.mul(&acc, &square);
            }
            square = self.mul(&square, &square);
            remaining >>= 1;
        }
        acc
    }

    /// The canonical enumeration of the entire field. Only sensible for
    /// small fields.
    fn elements(&self) -> impl Iterator<Item = Self::Element> + '_ {
        (0..self.order()).map(|index| self.element(index))
    }

    /// A uniformly random element, drawn from a caller-supplied entropy
    /// source.
    fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Element {
        self.element(rng.random_range(0..self.order()))
    }
}
