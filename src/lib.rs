//! Reconstruction of minimal linear recurrences over finite fields.
//!
//! The crate pairs a field-agnostic [Berlekamp-Massey
//! solver](math::berlekamp_massey) with configurable finite-field
//! arithmetic: prime fields, binary extension fields `GF(2^m)`, and
//! polynomial extensions `GF(q^n)` over any of those. A [second-stage LFSR
//! generator](math::lfsr) produces sequences with known ground truth, and
//! the [`snow`] module carries the two field parameterizations used to
//! re-examine the SNOW 2.0 state-recovery claim from CRYPTO 2015.

pub mod error;
pub mod math;
pub mod prelude;
pub mod snow;
