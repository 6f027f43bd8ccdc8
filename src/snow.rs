//! The two field parameterizations of the SNOW 2.0 experiment.
//!
//! The CRYPTO 2015 fast-correlation-attack paper re-expresses the SNOW 2.0
//! LFSR, which is defined over GF((2^8)^4) built on one GF(2^8), in terms of
//! the Rijndael GF(2^8) and a degree-5 extension on top of it. The claimed
//! complexity improvement hinges on the keystream keeping a short linear
//! recurrence after that change of representation. Everything in this module
//! is configuration (fixed, published constants) handed to the generic
//! machinery in [`crate::math`].

use num_traits::ConstOne;
use num_traits::ConstZero;

use crate::error::FieldSetupError;
use crate::math::binary_field::BinaryField;
use crate::math::extension_field::ExtensionField;
use crate::math::gf2_polynomial::Gf2Poly;
use crate::math::polynomial::Polynomial;
use crate::math::traits::Field;

/// An element of either extension field: a reduced polynomial over GF(2^8).
pub type SnowElement = Polynomial<Gf2Poly>;

/// The SNOW 2.0 base field: GF(2^8) with x^8 + x^7 + x^5 + x^3 + 1.
pub fn snow_base_field() -> Result<BinaryField, FieldSetupError> {
    BinaryField::new(Gf2Poly::from_bits(0b1_1010_1001))
}

/// The SNOW 2.0 LFSR field GF((2^8)^4), defined by
/// y^4 + β^23·y^3 + β^245·y^2 + β^48·y + β^239
/// where β is the class of x in the base field.
pub fn snow_field() -> Result<ExtensionField<BinaryField>, FieldSetupError> {
    let base = snow_base_field()?;
    let beta = Gf2Poly::X;
    let modulus = Polynomial::new(
        vec![
            base.pow(&beta, 239),
            base.pow(&beta, 48),
            base.pow(&beta, 245),
            base.pow(&beta, 23),
            base.one(),
        ],
        &base,
    );
    ExtensionField::new(base, modulus)
}

/// The Rijndael base field: GF(2^8) with x^8 + x^4 + x^3 + x + 1.
pub fn aes_base_field() -> Result<BinaryField, FieldSetupError> {
    BinaryField::new(Gf2Poly::from_bits(0b1_0001_1011))
}

/// The degree-5 extension of the Rijndael field used by the paper's
/// re-expression of the SNOW 2.0 LFSR.
pub fn aes_field() -> Result<ExtensionField<BinaryField>, FieldSetupError> {
    let base = aes_base_field()?;
    let coefficient = |bits| Gf2Poly::from_bits(bits);
    let modulus = Polynomial::new(
        vec![
            coefficient(0b0110_0111),
            coefficient(0b0110_0100),
            coefficient(0b1000_1101),
            coefficient(0b0101_1100),
            coefficient(0b0100_1000),
            coefficient(0b0000_0001),
        ],
        &base,
    );
    ExtensionField::new(base, modulus)
}

/// The multiplier α of the LFSR update rule: the class of y in the given
/// extension field.
pub fn alpha(field: &ExtensionField<BinaryField>) -> SnowElement {
    field.from_coefficients(vec![Gf2Poly::ZERO, Gf2Poly::ONE])
}

/// Carries a sequence of elements into another extension field without
/// changing any coefficient bit pattern: only the arithmetic wrapped around
/// the bits changes. This embedding is not a field isomorphism; whether the
/// linear complexity survives it is precisely the experimental question.
pub fn reinterpret_sequence(
    sequence: &[SnowElement],
    target: &ExtensionField<BinaryField>,
) -> Vec<SnowElement> {
    sequence
        .iter()
        .map(|element| target.from_coefficients(element.coefficients().to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::math::berlekamp_massey::berlekamp_massey;
    use crate::math::lfsr::Lfsr;

    type SnowField = ExtensionField<BinaryField>;
    type SnowLfsr = Lfsr<SnowField>;

    #[test]
    fn both_parameterizations_pass_the_dual_irreducibility_check() {
        let snow = snow_field().unwrap();
        assert_eq!(4, snow.degree());
        assert_eq!(1_u128 << 32, snow.order());

        let aes = aes_field().unwrap();
        assert_eq!(5, aes.degree());
        assert_eq!(1_u128 << 40, aes.order());
    }

    #[test]
    fn alpha_and_its_inverse_multiply_to_one() {
        for field in [snow_field().unwrap(), aes_field().unwrap()] {
            let alpha = alpha(&field);
            let alpha_inverse = field.inv(&alpha).unwrap();
            assert!(field.is_one(&field.mul(&alpha, &alpha_inverse)));
        }
    }

    fn snow_sequence(rng_seed: u64) -> (SnowField, Vec<SnowElement>) {
        let field = snow_field().unwrap();
        let alpha = alpha(&field);
        let alpha_inverse = field.inv(&alpha).unwrap();

        let mut rng = StdRng::seed_from_u64(rng_seed);
        let seed = (0..SnowLfsr::ORDER)
            .map(|_| field.random_element(&mut rng))
            .collect_vec();

        let lfsr = Lfsr::new(field.clone(), alpha, alpha_inverse, seed).unwrap();
        let sequence = lfsr.take(3 * SnowLfsr::ORDER).collect_vec();
        (field, sequence)
    }

    #[test]
    fn the_snow_recurrence_is_recovered_from_48_terms() {
        let (field, sequence) = snow_sequence(0x5eed);
        let recurrence = berlekamp_massey(&field, &sequence).unwrap();

        assert!(recurrence.linear_complexity() <= SnowLfsr::ORDER);
        assert!(recurrence.linear_complexity() > 0);
        assert!(recurrence.reproduces(&sequence, &field));

        let regenerated = recurrence.extrapolate(
            &sequence[..recurrence.linear_complexity()],
            sequence.len(),
            &field,
        );
        assert_eq!(sequence, regenerated);
    }

    #[test]
    fn reinterpretation_preserves_bit_patterns() {
        let (_, sequence) = snow_sequence(7);
        let aes = aes_field().unwrap();
        let reinterpreted = reinterpret_sequence(&sequence, &aes);

        assert_eq!(sequence.len(), reinterpreted.len());
        for (original, carried) in sequence.iter().zip(&reinterpreted) {
            assert_eq!(original.coefficients(), carried.coefficients());
        }
    }

    #[test]
    fn the_dual_field_experiment_runs_to_completion() {
        let (snow, sequence) = snow_sequence(2015);
        let snow_recurrence = berlekamp_massey(&snow, &sequence).unwrap();
        assert!(snow_recurrence.linear_complexity() <= SnowLfsr::ORDER);
        assert!(snow_recurrence.reproduces(&sequence, &snow));

        let aes = aes_field().unwrap();
        let reinterpreted = reinterpret_sequence(&sequence, &aes);
        let aes_recurrence = berlekamp_massey(&aes, &reinterpreted).unwrap();

        // the embedding is not an isomorphism, so the two complexities need
        // not match; each result must merely explain its own sequence
        assert!(aes_recurrence.linear_complexity() <= reinterpreted.len());
        assert!(aes_recurrence.reproduces(&reinterpreted, &aes));
    }
}
