//! One-stop import for working with the crate.
//!
//! ```
//! use lfsr_complexity::prelude::*;
//! ```

pub use crate::error::BerlekampMasseyError;
pub use crate::error::FieldError;
pub use crate::error::FieldSetupError;
pub use crate::error::LfsrError;
pub use crate::math::berlekamp_massey::LinearRecurrence;
pub use crate::math::berlekamp_massey::berlekamp_massey;
pub use crate::math::binary_field::BinaryField;
pub use crate::math::extension_field::ExtensionField;
pub use crate::math::gf2_polynomial::Gf2Poly;
pub use crate::math::lfsr::Lfsr;
pub use crate::math::polynomial::Polynomial;
pub use crate::math::prime_field::PrimeField;
pub use crate::math::traits::Field;
pub use crate::math::traits::FieldElement;
