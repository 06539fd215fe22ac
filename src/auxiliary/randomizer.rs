#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::io;

/// Generate a pseudorandom seed for the game's PRNG.
pub fn generate_seed() -> io::Result<(u64, u64)> {
    use byteorder::{ByteOrder, NativeEndian};
    use getrandom::getrandom;

    let mut seed = [0_u8; 16];

    getrandom(&mut seed)?;

    Ok((
        NativeEndian::read_u64(&seed[0..8]),
        NativeEndian::read_u64(&seed[8..16]),
    ))
}

/// Draw a uniform value in `[0, 1)` from the generator.
pub fn unit_f32(rng: &mut randomize::PCG32) -> f32 {
    randomize::f32_half_open_right(rng.next_u32())
}
