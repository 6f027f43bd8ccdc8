use std::collections::VecDeque;

use crate::error::LfsrError;
use crate::math::traits::Field;

/// The second-stage LFSR update rule, over any [`Field`]:
///
/// ```text
/// s[i] = alpha_inverse·s[i-5] + s[i-14] + alpha·s[i-16]
/// ```
///
/// This is the SNOW 2.0 feedback relation `s[t+16] = α⁻¹·s[t+11] + s[t+2] +
/// α·s[t]` with the lags counted backwards from the newest term. The
/// generator owns its sliding window exclusively; it is deterministic for
/// identical seeds and can only be restarted by constructing a fresh
/// instance from a fresh seed.
///
/// The iterator yields the 16 seed values first and then extends the
/// sequence indefinitely. It never returns `None`; bound it with
/// [`Iterator::take`].
#[derive(Debug, Clone)]
pub struct Lfsr<F: Field> {
    field: F,
    alpha: F::Element,
    alpha_inverse: F::Element,
    window: VecDeque<F::Element>,
    yielded: usize,
}

impl<F: Field> Lfsr<F> {
    /// The order of the recurrence, and the required seed length.
    pub const ORDER: usize = 16;

    const LAG_SHORT: usize = 5;
    const LAG_MID: usize = 14;

    /// # Errors
    ///
    /// - [`LfsrError::WrongSeedLength`] unless exactly [`Self::ORDER`] seed
    ///   elements are supplied,
    /// - [`LfsrError::AlphaInverseMismatch`] unless
    ///   `alpha · alpha_inverse == 1` in the given field.
    pub fn new(
        field: F,
        alpha: F::Element,
        alpha_inverse: F::Element,
        seed: Vec<F::Element>,
    ) -> Result<Self, LfsrError> {
        if seed.len() != Self::ORDER {
            return Err(LfsrError::WrongSeedLength {
                expected: Self::ORDER,
                actual: seed.len(),
            });
        }
        if !field.is_one(&field.mul(&alpha, &alpha_inverse)) {
            return Err(LfsrError::AlphaInverseMismatch);
        }
        Ok(Self {
            field,
            alpha,
            alpha_inverse,
            window: seed.into(),
            yielded: 0,
        })
    }
}

impl<F: Field> Iterator for Lfsr<F> {
    type Item = F::Element;

    fn next(&mut self) -> Option<F::Element> {
        if self.yielded < Self::ORDER {
            let seed_value = self.window[self.yielded].clone();
            self.yielded += 1;
            return Some(seed_value);
        }

        // window[k] holds s[i - ORDER + k] for the upcoming index i
        let short = &self.window[Self::ORDER - Self::LAG_SHORT];
        let mid = &self.window[Self::ORDER - Self::LAG_MID];
        let long = &self.window[0];
        let next = self.field.add(
            &self.field.add(&self.field.mul(&self.alpha_inverse, short), mid),
            &self.field.mul(&self.alpha, long),
        );

        self.window.pop_front();
        self.window.push_back(next.clone());
        self.yielded += 1;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;
    use crate::math::prime_field::PrimeField;

    fn gf_13() -> PrimeField {
        PrimeField::new(13).unwrap()
    }

    fn seed() -> Vec<u64> {
        (1..=16).map(|i| i % 13).collect()
    }

    // 2 · 7 = 14 ≡ 1 (mod 13)
    fn lfsr() -> Lfsr<PrimeField> {
        Lfsr::new(gf_13(), 2, 7, seed()).unwrap()
    }

    #[test]
    fn seed_preconditions_are_enforced() {
        assert_eq!(
            Err(LfsrError::WrongSeedLength {
                expected: 16,
                actual: 3
            }),
            Lfsr::new(gf_13(), 2, 7, vec![1, 2, 3]).map(|_| ())
        );
        assert_eq!(
            Err(LfsrError::AlphaInverseMismatch),
            Lfsr::new(gf_13(), 2, 8, seed()).map(|_| ())
        );
    }

    #[test]
    fn the_seed_is_emitted_verbatim() {
        let prefix = lfsr().take(16).collect_vec();
        assert_eq!(seed(), prefix);
    }

    #[test]
    fn generation_is_deterministic() {
        assert_eq!(lfsr().take(100).collect_vec(), lfsr().take(100).collect_vec());
    }

    #[test]
    fn every_term_satisfies_the_recurrence() {
        let field = gf_13();
        let sequence = lfsr().take(100).collect_vec();
        for i in 16..sequence.len() {
            let expected = field.add(
                &field.add(
                    &field.mul(&7, &sequence[i - 5]),
                    &sequence[i - 14],
                ),
                &field.mul(&2, &sequence[i - 16]),
            );
            assert_eq!(expected, sequence[i], "at index {i}");
        }
    }
}
