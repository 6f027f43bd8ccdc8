use serde::Deserialize;
use serde::Serialize;

use crate::error::BerlekampMasseyError;
use crate::math::polynomial::Polynomial;
use crate::math::traits::Field;
use crate::math::traits::FieldElement;

/// The minimal linear recurrence discovered for a sequence.
///
/// The connection polynomial `C` is normalized to `C[0] == 1`, and the
/// recurrence it encodes is
///
/// ```text
/// s[i] = -( C[1]·s[i-1] + C[2]·s[i-2] + ... + C[L]·s[i-L] )
/// ```
///
/// where `L` is the [linear complexity](Self::linear_complexity). `C` can
/// have degree below `L`; missing high coefficients read as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearRecurrence<E> {
    connection: Polynomial<E>,
    linear_complexity: usize,
}

impl<E: FieldElement> LinearRecurrence<E> {
    pub fn connection_polynomial(&self) -> &Polynomial<E> {
        &self.connection
    }

    /// The order of the recurrence: the length of the shortest LFSR that
    /// generates the analyzed sequence.
    pub fn linear_complexity(&self) -> usize {
        self.linear_complexity
    }

    /// Whether every term of `sequence` beyond the first `L` obeys the
    /// recurrence.
    pub fn reproduces<F: Field<Element = E>>(&self, sequence: &[E], field: &F) -> bool {
        (self.linear_complexity..sequence.len())
            .all(|i| sequence[i] == self.next_term(&sequence[..i], field))
    }

    /// Runs the recurrence forward from a prefix of at least `L` terms until
    /// the returned sequence has `length` terms in total.
    ///
    /// # Panics
    ///
    /// Panics if fewer than `L` prefix terms are supplied.
    pub fn extrapolate<F: Field<Element = E>>(
        &self,
        prefix: &[E],
        length: usize,
        field: &F,
    ) -> Vec<E> {
        assert!(
            prefix.len() >= self.linear_complexity,
            "extrapolation requires at least {} known terms",
            self.linear_complexity
        );
        let mut sequence = prefix.to_vec();
        while sequence.len() < length {
            let next = self.next_term(&sequence, field);
            sequence.push(next);
        }
        sequence
    }

    fn next_term<F: Field<Element = E>>(&self, prefix: &[E], field: &F) -> E {
        let i = prefix.len();
        let mut acc = field.zero();
        for k in 1..=self.linear_complexity {
            let weighted = field.mul(&self.connection.coefficient(k, field), &prefix[i - k]);
            acc = field.add(&acc, &weighted);
        }
        field.neg(&acc)
    }
}

/// Computes the shortest linear recurrence satisfied by `sequence`, over any
/// [`Field`].
///
/// The classical Berlekamp-Massey iteration: scan the sequence once, keeping
/// a candidate connection polynomial `C` and the polynomial `B` frozen at the
/// last length change. At position `n` the discrepancy between the value `C`
/// predicts from the already-consumed prefix and the observed value is
///
/// ```text
/// Δ = s[n] + Σ_{k=1..L} C[k]·s[n-k]
/// ```
///
/// A zero `Δ` means `C` already explains this position. Otherwise `C` is
/// corrected by a scaled, shifted copy of `B`, growing `L` to `n + 1 - L`
/// when the current recurrence is too short (`2L ≤ n`).
///
/// Guarantees: when `sequence` contains at least `2·L_true` terms of a
/// sequence with true linear complexity `L_true`, the result is
/// the unique minimal recurrence. Shorter inputs yield the minimal
/// recurrence consistent with the observed prefix only, which may differ
/// from the generator's; that is the expected answer, not a failure. Empty
/// and all-zero sequences yield complexity 0 with connection polynomial 1.
///
/// # Errors
///
/// [`BerlekampMasseyError::InvariantViolation`] if the stored discrepancy
/// turns out non-invertible. The algorithm only ever stores non-zero
/// discrepancies, so this cannot happen with a law-abiding [`Field`]; it is
/// surfaced as an error rather than a wrong polynomial.
pub fn berlekamp_massey<F: Field>(
    field: &F,
    sequence: &[F::Element],
) -> Result<LinearRecurrence<F::Element>, BerlekampMasseyError> {
    let mut connection = Polynomial::one(field);
    let mut last_change = Polynomial::one(field);
    let mut complexity = 0_usize;
    let mut shift = 1_usize;
    let mut stored_discrepancy = field.one();

    for (step, observed) in sequence.iter().enumerate() {
        // strictly causal: only the already-consumed prefix is read
        let mut discrepancy = observed.clone();
        for k in 1..=complexity {
            let weighted = field.mul(&connection.coefficient(k, field), &sequence[step - k]);
            discrepancy = field.add(&discrepancy, &weighted);
        }

        if field.is_zero(&discrepancy) {
            shift += 1;
            continue;
        }

        let stored_inverse = field
            .inv(&stored_discrepancy)
            .map_err(|_| BerlekampMasseyError::InvariantViolation { step })?;
        let scale = field.mul(&discrepancy, &stored_inverse);
        let correction = last_change.scalar_mul(&scale, field).shift(shift, field);

        if 2 * complexity <= step {
            let previous = connection.clone();
            connection = connection.sub(&correction, field);
            last_change = previous;
            complexity = step + 1 - complexity;
            stored_discrepancy = discrepancy;
            shift = 1;
        } else {
            connection = connection.sub(&correction, field);
            shift += 1;
        }
    }

    Ok(LinearRecurrence {
        connection,
        linear_complexity: complexity,
    })
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use proptest::collection::vec;
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;
    use crate::math::lfsr::Lfsr;
    use crate::math::prime_field::PrimeField;

    fn gf_101() -> PrimeField {
        PrimeField::new(101).unwrap()
    }

    #[test]
    fn empty_sequence_yields_the_trivial_recurrence() {
        let field = gf_101();
        let recurrence = berlekamp_massey(&field, &[]).unwrap();
        assert_eq!(0, recurrence.linear_complexity());
        assert!(recurrence.connection_polynomial().is_one(&field));
    }

    #[test]
    fn all_zero_sequences_yield_complexity_zero() {
        let field = gf_101();
        let recurrence = berlekamp_massey(&field, &[0; 20]).unwrap();
        assert_eq!(0, recurrence.linear_complexity());
        assert!(recurrence.connection_polynomial().is_one(&field));
        assert!(recurrence.reproduces(&[0; 20], &field));
    }

    #[test]
    fn fibonacci_has_complexity_two() {
        let field = gf_101();
        let mut sequence = vec![1_u64, 1];
        while sequence.len() < 12 {
            let n = sequence.len();
            sequence.push(field.add(&sequence[n - 1], &sequence[n - 2]));
        }

        let recurrence = berlekamp_massey(&field, &sequence).unwrap();
        assert_eq!(2, recurrence.linear_complexity());
        // s[i] - s[i-1] - s[i-2] = 0, so C = 1 - x - x^2
        let expected = Polynomial::new(vec![1, 100, 100], &field);
        assert_eq!(&expected, recurrence.connection_polynomial());
        assert!(recurrence.reproduces(&sequence, &field));
    }

    #[test]
    fn geometric_sequences_have_complexity_one() {
        let field = gf_101();
        let sequence = (0..10).map(|e| field.pow(&2, e)).collect_vec();
        let recurrence = berlekamp_massey(&field, &sequence).unwrap();
        assert_eq!(1, recurrence.linear_complexity());
        // s[i] - 2·s[i-1] = 0, so C = 1 - 2x
        let expected = Polynomial::new(vec![1, 99], &field);
        assert_eq!(&expected, recurrence.connection_polynomial());
    }

    #[test]
    fn short_prefixes_get_the_minimal_consistent_recurrence() {
        // two terms of a Fibonacci sequence look constant; the order-1
        // answer is correct for the observed prefix even though the
        // generator has order 2
        let field = gf_101();
        let recurrence = berlekamp_massey(&field, &[1, 1]).unwrap();
        assert_eq!(1, recurrence.linear_complexity());
        let expected = Polynomial::new(vec![1, 100], &field);
        assert_eq!(&expected, recurrence.connection_polynomial());
        assert!(recurrence.reproduces(&[1, 1], &field));
    }

    #[proptest]
    fn discovered_recurrences_explain_their_input(
        #[strategy(vec(0_u64..101, 0..60))] sequence: Vec<u64>,
    ) {
        let field = gf_101();
        let recurrence = berlekamp_massey(&field, &sequence).unwrap();
        prop_assert!(recurrence.linear_complexity() <= sequence.len());
        prop_assert!(recurrence.reproduces(&sequence, &field));
    }

    #[proptest]
    fn discovered_recurrences_extrapolate_their_source(
        #[strategy(vec(0_u64..101, 16))] seed: Vec<u64>,
    ) {
        let field = gf_101();
        // 2 · 51 = 102 ≡ 1 (mod 101)
        let lfsr = Lfsr::new(field, 2, 51, seed).unwrap();
        let sequence = lfsr.take(3 * Lfsr::<PrimeField>::ORDER).collect_vec();

        let recurrence = berlekamp_massey(&field, &sequence).unwrap();
        prop_assert!(recurrence.linear_complexity() <= Lfsr::<PrimeField>::ORDER);
        let regenerated = recurrence.extrapolate(
            &sequence[..recurrence.linear_complexity()],
            sequence.len(),
            &field,
        );
        prop_assert_eq!(sequence, regenerated);
    }
}
