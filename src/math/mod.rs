pub mod berlekamp_massey;
pub mod binary_field;
pub mod extension_field;
pub mod gf2_polynomial;
pub mod irreducibility;
pub mod lfsr;
pub mod polynomial;
pub mod prime_field;
pub mod traits;
