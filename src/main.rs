//! Re-runs the SNOW 2.0 linear-complexity experiment.
//!
//! One fixed bit sequence, two arithmetics: 48 terms are generated by the
//! SNOW 2.0 LFSR over GF((2^8)^4), the minimal recurrence is reconstructed
//! there, and then the very same bit patterns are re-read as elements of the
//! degree-5 extension of the Rijndael field and the reconstruction is
//! repeated. Comparing the two reported complexities is the point of the
//! program.

use std::error::Error;

use lfsr_complexity::prelude::*;
use lfsr_complexity::snow;

type SnowLfsr = Lfsr<ExtensionField<BinaryField>>;

fn report(label: &str, recurrence: &LinearRecurrence<snow::SnowElement>) {
    println!("===================================================");
    println!("{label}");
    println!("connection polynomial coefficients:");
    for coefficient in recurrence.connection_polynomial().coefficients() {
        println!("  {coefficient}");
    }
    println!("linear complexity: {}", recurrence.linear_complexity());
    println!("===================================================");
}

fn main() -> Result<(), Box<dyn Error>> {
    let snow_field = snow::snow_field()?;
    let alpha = snow::alpha(&snow_field);
    let alpha_inverse = snow_field.inv(&alpha)?;

    let mut rng = rand::rng();
    let seed: Vec<_> = (0..SnowLfsr::ORDER)
        .map(|_| snow_field.random_element(&mut rng))
        .collect();

    let lfsr = Lfsr::new(snow_field.clone(), alpha, alpha_inverse, seed)?;
    let sequence: Vec<_> = lfsr.take(3 * SnowLfsr::ORDER).collect();

    let snow_recurrence = berlekamp_massey(&snow_field, &sequence)?;
    report("with the SNOW 2.0 field", &snow_recurrence);

    let aes_field = snow::aes_field()?;
    let reinterpreted = snow::reinterpret_sequence(&sequence, &aes_field);
    let aes_recurrence = berlekamp_massey(&aes_field, &reinterpreted)?;
    report("with the AES field", &aes_recurrence);

    Ok(())
}
