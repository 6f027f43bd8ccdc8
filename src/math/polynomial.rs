use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use itertools::EitherOrBoth;
use itertools::Itertools;
use serde::Deserialize;
use serde::Serialize;

use crate::math::traits::Field;
use crate::math::traits::FieldElement;

/// A univariate polynomial with coefficients in some [`Field`], in monomial
/// form.
///
/// Coefficients are stored in order of increasing degree and never include
/// trailing zeros: the zero polynomial is the empty coefficient vector, and
/// every other polynomial has a non-zero leading coefficient. All arithmetic
/// takes the owning field as an explicit parameter, because an element type
/// alone does not determine the field (two `BinaryField`s share the element
/// type but not the modulus).
///
/// This one representation plays two roles: elements of an
/// [`ExtensionField`](super::extension_field::ExtensionField) are reduced
/// polynomials over the base field, and the connection polynomial returned by
/// the [solver](super::berlekamp_massey) is a polynomial over whichever field
/// the sequence lives in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Polynomial<E> {
    coefficients: Vec<E>,
}

impl<E: FieldElement> Polynomial<E> {
    /// Normalizes: trailing zero coefficients are dropped.
    pub fn new<F: Field<Element = E>>(mut coefficients: Vec<E>, field: &F) -> Self {
        while coefficients.last().is_some_and(|c| field.is_zero(c)) {
            coefficients.pop();
        }
        Self { coefficients }
    }

    pub fn zero() -> Self {
        Self {
            coefficients: vec![],
        }
    }

    pub fn one<F: Field<Element = E>>(field: &F) -> Self {
        Self {
            coefficients: vec![field.one()],
        }
    }

    /// The monomial `x`.
    pub fn x<F: Field<Element = E>>(field: &F) -> Self {
        Self {
            coefficients: vec![field.zero(), field.one()],
        }
    }

    pub fn coefficients(&self) -> &[E] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<E> {
        self.coefficients
    }

    /// The coefficient of `x^index`, zero-padded beyond the degree.
    pub fn coefficient<F: Field<Element = E>>(&self, index: usize, field: &F) -> E {
        self.coefficients
            .get(index)
            .cloned()
            .unwrap_or_else(|| field.zero())
    }

    /// The degree, with the zero polynomial mapped to -1.
    pub fn degree(&self) -> isize {
        self.coefficients.len() as isize - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn is_one<F: Field<Element = E>>(&self, field: &F) -> bool {
        self.degree() == 0 && field.is_one(&self.coefficients[0])
    }

    pub fn leading_coefficient(&self) -> Option<&E> {
        self.coefficients.last()
    }

    pub fn add<F: Field<Element = E>>(&self, other: &Self, field: &F) -> Self {
        let summed = self
            .coefficients
            .iter()
            .zip_longest(&other.coefficients)
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => field.add(a, b),
                EitherOrBoth::Left(a) | EitherOrBoth::Right(a) => a.clone(),
            })
            .collect();
        Self::new(summed, field)
    }

    pub fn sub<F: Field<Element = E>>(&self, other: &Self, field: &F) -> Self {
        let difference = self
            .coefficients
            .iter()
            .zip_longest(&other.coefficients)
            .map(|pair| match pair {
                EitherOrBoth::Both(a, b) => field.sub(a, b),
                EitherOrBoth::Left(a) => a.clone(),
                EitherOrBoth::Right(b) => field.neg(b),
            })
            .collect();
        Self::new(difference, field)
    }

    pub fn mul<F: Field<Element = E>>(&self, other: &Self, field: &F) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut product = vec![field.zero(); self.coefficients.len() + other.coefficients.len() - 1];
        for (i, a) in self.coefficients.iter().enumerate() {
            for (j, b) in other.coefficients.iter().enumerate() {
                product[i + j] = field.add(&product[i + j], &field.mul(a, b));
            }
        }
        Self::new(product, field)
    }

    pub fn scalar_mul<F: Field<Element = E>>(&self, scalar: &E, field: &F) -> Self {
        let scaled = self
            .coefficients
            .iter()
            .map(|c| field.mul(c, scalar))
            .collect();
        Self::new(scaled, field)
    }

    /// Multiplication by `x^offset`.
    pub fn shift<F: Field<Element = E>>(&self, offset: usize, field: &F) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        let mut shifted = vec![field.zero(); offset];
        shifted.extend(self.coefficients.iter().cloned());
        Self { coefficients: shifted }
    }

    /// Polynomial long division: `self == quotient * divisor + remainder`
    /// with `remainder.degree() < divisor.degree()`.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is the zero polynomial.
    pub fn divide<F: Field<Element = E>>(&self, divisor: &Self, field: &F) -> (Self, Self) {
        let Some(divisor_lc) = divisor.leading_coefficient() else {
            panic!("cannot divide by the zero polynomial");
        };
        let divisor_lc_inv = field
            .inv(divisor_lc)
            .expect("leading coefficient is non-zero");
        let divisor_degree = divisor.coefficients.len() - 1;

        let mut remainder = self.coefficients.clone();
        let mut quotient = vec![field.zero(); self.coefficients.len().saturating_sub(divisor_degree)];
        while remainder.len() > divisor_degree {
            let lead = remainder.last().expect("remainder is non-empty").clone();
            let shift = remainder.len() - 1 - divisor_degree;
            let factor = field.mul(&lead, &divisor_lc_inv);
            for (i, d) in divisor.coefficients.iter().enumerate() {
                let subtrahend = field.mul(&factor, d);
                remainder[shift + i] = field.sub(&remainder[shift + i], &subtrahend);
            }
            remainder.pop();
            while remainder.last().is_some_and(|c| field.is_zero(c)) {
                remainder.pop();
            }
            if shift < quotient.len() {
                quotient[shift] = factor;
            }
        }
        (Self::new(quotient, field), Self::new(remainder, field))
    }

    /// The remainder of division by `modulus`.
    pub fn reduce<F: Field<Element = E>>(&self, modulus: &Self, field: &F) -> Self {
        self.divide(modulus, field).1
    }

    /// Extended Euclid: returns `(g, a, b)` with `a·x + b·y == g` and `g` the
    /// monic greatest common divisor of `x` and `y`.
    pub fn xgcd<F: Field<Element = E>>(mut x: Self, mut y: Self, field: &F) -> (Self, Self, Self) {
        let (mut a_factor, mut a1) = (Self::one(field), Self::zero());
        let (mut b_factor, mut b1) = (Self::zero(), Self::one(field));

        while !y.is_zero() {
            let (quotient, remainder) = x.divide(&y, field);
            let c = a_factor.sub(&quotient.mul(&a1, field), field);
            let d = b_factor.sub(&quotient.mul(&b1, field), field);

            x = y;
            y = remainder;
            a_factor = a1;
            a1 = c;
            b_factor = b1;
            b1 = d;
        }

        // normalize the gcd to leading coefficient 1
        let lc = x.leading_coefficient().cloned().unwrap_or_else(|| field.one());
        let lc_inv = field.inv(&lc).expect("leading coefficient is non-zero");
        let normalize = |poly: Self| poly.scalar_mul(&lc_inv, field);

        let [x, a, b] = [x, a_factor, b_factor].map(normalize);
        (x, a, b)
    }
}

/// Renders the ascending coefficient list, NTL style: `[c0, c1, c2]`.
impl<E: Display> Display for Polynomial<E> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[{}]", self.coefficients.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;
    use crate::math::prime_field::PrimeField;

    fn gf_13() -> PrimeField {
        PrimeField::new(13).unwrap()
    }

    fn poly(coefficients: &[u64]) -> Polynomial<u64> {
        Polynomial::new(coefficients.to_vec(), &gf_13())
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(poly(&[1, 2]), poly(&[1, 2, 0, 0]));
        assert_eq!(-1, poly(&[0, 0, 0]).degree());
        assert!(poly(&[]).is_zero());
        assert_eq!(1, poly(&[1, 2, 0]).degree());
        assert_eq!(Some(&2), poly(&[1, 2]).leading_coefficient());
        assert_eq!(None, Polynomial::<u64>::zero().leading_coefficient());
    }

    #[test]
    fn coefficient_reads_are_zero_padded() {
        let field = gf_13();
        let p = poly(&[5, 7]);
        assert_eq!(5, p.coefficient(0, &field));
        assert_eq!(7, p.coefficient(1, &field));
        assert_eq!(0, p.coefficient(2, &field));
    }

    #[proptest]
    fn addition_and_subtraction_round_trip(
        #[strategy(vec(0_u64..13, 0..8))] a: Vec<u64>,
        #[strategy(vec(0_u64..13, 0..8))] b: Vec<u64>,
    ) {
        let field = gf_13();
        let (a, b) = (poly(&a), poly(&b));
        let sum = a.add(&b, &field);
        prop_assert_eq!(&sum, &b.add(&a, &field));
        prop_assert_eq!(&a, &sum.sub(&b, &field));
        prop_assert_eq!(Polynomial::zero(), a.sub(&a, &field));
    }

    #[proptest]
    fn multiplication_distributes(
        #[strategy(vec(0_u64..13, 0..6))] a: Vec<u64>,
        #[strategy(vec(0_u64..13, 0..6))] b: Vec<u64>,
        #[strategy(vec(0_u64..13, 0..6))] c: Vec<u64>,
    ) {
        let field = gf_13();
        let (a, b, c) = (poly(&a), poly(&b), poly(&c));
        prop_assert_eq!(a.mul(&b, &field), b.mul(&a, &field));
        prop_assert_eq!(
            a.mul(&b.add(&c, &field), &field),
            a.mul(&b, &field).add(&a.mul(&c, &field), &field)
        );
    }

    #[test]
    fn shift_multiplies_by_x_powers() {
        let field = gf_13();
        let p = poly(&[3, 1]);
        assert_eq!(poly(&[0, 0, 3, 1]), p.shift(2, &field));
        assert_eq!(p, p.shift(0, &field));
        assert_eq!(Polynomial::zero(), Polynomial::zero().shift(5, &field));
        assert_eq!(
            p.shift(2, &field),
            p.mul(&Polynomial::x(&field).mul(&Polynomial::x(&field), &field), &field)
        );
    }

    #[proptest]
    fn division_round_trips(
        #[strategy(vec(0_u64..13, 0..10))] a: Vec<u64>,
        #[strategy(vec(0_u64..13, 1..6))] b: Vec<u64>,
    ) {
        let field = gf_13();
        let (a, b) = (poly(&a), poly(&b));
        prop_assume!(!b.is_zero());
        let (quotient, remainder) = a.divide(&b, &field);
        prop_assert!(remainder.degree() < b.degree());
        prop_assert_eq!(a, quotient.mul(&b, &field).add(&remainder, &field));
    }

    #[test]
    #[should_panic(expected = "cannot divide by the zero polynomial")]
    fn division_by_zero_panics() {
        let field = gf_13();
        let _ = poly(&[1]).divide(&Polynomial::zero(), &field);
    }

    #[proptest]
    fn xgcd_satisfies_bezout(
        #[strategy(vec(0_u64..13, 0..8))] x: Vec<u64>,
        #[strategy(vec(0_u64..13, 0..8))] y: Vec<u64>,
    ) {
        let field = gf_13();
        let (x, y) = (poly(&x), poly(&y));
        let (gcd, a, b) = Polynomial::xgcd(x.clone(), y.clone(), &field);
        let bezout = a.mul(&x, &field).add(&b.mul(&y, &field), &field);
        prop_assert_eq!(&gcd, &bezout);
        if !gcd.is_zero() {
            prop_assert_eq!(Some(&1), gcd.leading_coefficient());
        }
    }

    #[test]
    fn xgcd_does_not_panic_on_input_zero() {
        let field = gf_13();
        let zero = Polynomial::<u64>::zero;
        let (gcd, _, _) = Polynomial::xgcd(zero(), zero(), &field);
        assert_eq!(zero(), gcd);
    }

    #[test]
    fn display_renders_coefficient_lists() {
        assert_eq!("[]", Polynomial::<u64>::zero().to_string());
        assert_eq!("[5, 0, 7]", poly(&[5, 0, 7]).to_string());
    }

    #[test]
    fn serde_round_trip() {
        let p = poly(&[5, 0, 7]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(p, serde_json::from_str(&json).unwrap());
    }
}
