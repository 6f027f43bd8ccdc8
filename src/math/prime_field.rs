use crate::error::FieldError;
use crate::error::FieldSetupError;
use crate::math::traits::Field;

/// The prime field GF(p) with canonical `u64` representatives.
///
/// Mostly a witness that consumers of [`Field`] really are agnostic about the
/// element representation; the extension-field machinery in this crate is
/// built on [`BinaryField`](super::binary_field::BinaryField) instead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PrimeField {
    characteristic: u64,
}

impl PrimeField {
    /// # Errors
    ///
    /// [`FieldSetupError::NonPrimeCharacteristic`] unless `characteristic` is
    /// prime. Trial division; intended for the small fields used in tests
    /// and experiments.
    pub fn new(characteristic: u64) -> Result<Self, FieldSetupError> {
        if !is_prime(characteristic) {
            return Err(FieldSetupError::NonPrimeCharacteristic(characteristic));
        }
        Ok(Self { characteristic })
    }

    pub const fn characteristic(&self) -> u64 {
        self.characteristic
    }
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut candidate = 2;
    while candidate * candidate <= n {
        if n % candidate == 0 {
            return false;
        }
        candidate += 1;
    }
    true
}

impl Field for PrimeField {
    type Element = u64;

    fn zero(&self) -> u64 {
        0
    }

    fn one(&self) -> u64 {
        1
    }

    fn add(&self, a: &u64, b: &u64) -> u64 {
        ((*a as u128 + *b as u128) % self.characteristic as u128) as u64
    }

    fn sub(&self, a: &u64, b: &u64) -> u64 {
        let p = self.characteristic as u128;
        ((*a as u128 + (p - *b as u128)) % p) as u64
    }

    fn mul(&self, a: &u64, b: &u64) -> u64 {
        ((*a as u128 * *b as u128) % self.characteristic as u128) as u64
    }

    /// Fermat inversion, `a^(p-2)`.
    fn inv(&self, a: &u64) -> Result<u64, FieldError> {
        if *a == 0 {
            return Err(FieldError::ZeroInverse);
        }
        Ok(self.pow(a, (self.characteristic - 2) as u128))
    }

    fn order(&self) -> u128 {
        self.characteristic as u128
    }

    fn element(&self, index: u128) -> u64 {
        debug_assert!(index < self.order());
        index as u64
    }
}
