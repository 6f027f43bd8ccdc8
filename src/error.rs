use thiserror::Error;

/// Domain errors of field arithmetic itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum FieldError {
    #[error("the additive identity has no multiplicative inverse")]
    ZeroInverse,
}

/// Precondition failures detected once, at field-construction time.
///
/// Construction refuses to proceed on any of these; no partially valid field
/// is ever handed out.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum FieldSetupError {
    #[error("modulus polynomial must have degree at least 1")]
    DegenerateModulus,

    #[error("modulus degree {0} exceeds the supported maximum of {max}", max = crate::math::binary_field::BinaryField::MAX_DEGREE)]
    ModulusDegreeTooLarge(u32),

    #[error("modulus polynomial is reducible and does not define a field extension")]
    ReducibleModulus,

    #[error("iterated and exhaustive irreducibility tests disagree on the modulus")]
    IrreducibilityTestsDisagree,

    #[error("characteristic {0} is not prime")]
    NonPrimeCharacteristic(u64),
}

/// Precondition failures of the LFSR sequence generator.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum LfsrError {
    #[error("expected {expected} seed elements, got {actual}")]
    WrongSeedLength { expected: usize, actual: usize },

    #[error("alpha_inverse is not the multiplicative inverse of alpha")]
    AlphaInverseMismatch,
}

/// Fatal internal-invariant failures of the solver.
///
/// The classical algorithm only ever inverts a stored discrepancy that was
/// non-zero when it was stored. Observing the contrary means the caller's
/// field implementation violated its contract.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[non_exhaustive]
pub enum BerlekampMasseyError {
    #[error("attempted to invert a zero discrepancy at step {step}")]
    InvariantViolation { step: usize },
}
