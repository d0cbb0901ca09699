//! Generation of random probable primes.

use num_bigint::prime::probably_prime;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use tracing::trace;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};

/// Rounds handed to the probabilistic primality test.
///
/// A composite survives a single Miller-Rabin round with probability at most
/// ¼, so 25 rounds bound the false-positive rate by 2⁻⁵⁰.
pub const PRIME_TEST_ROUNDS: usize = 25;

/// Generate a random probable prime of exactly `bit_size` bits.
///
/// `bit_size` must be a positive multiple of 8. Each candidate is drawn as
/// `bit_size / 8` bytes from `rng` with the two most significant bits forced
/// on, so the prime lies in `[3·2^(bit_size-2), 2^bit_size)`. The search is
/// unbounded: near `bit_size` bits roughly one odd candidate in
/// `bit_size·ln2/2` is prime.
///
/// A failure to read from `rng` is returned as [`Error::Entropy`].
pub fn generate_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<BigUint> {
    if bit_size == 0 || bit_size % 8 != 0 {
        return Err(Error::InvalidBitLength(bit_size));
    }

    let mut bytes = Zeroizing::new(vec![0u8; bit_size / 8]);
    let last = bytes.len() - 1;
    let mut candidates = 0u64;

    loop {
        rng.try_fill_bytes(&mut bytes[..])?;
        candidates += 1;

        // Setting the top two bits, rather than just the top bit,
        // means that when two of these values are multiplied together,
        // the result isn't ever one bit short.
        bytes[0] |= 0xC0;
        // Make the value odd since an even number this large certainly isn't prime.
        bytes[last] |= 1;

        let candidate = BigUint::from_bytes_be(&bytes);
        if probably_prime(&candidate, PRIME_TEST_ROUNDS) {
            trace!(bit_size, candidates, "found probable prime");
            return Ok(candidate);
        }
    }
}
