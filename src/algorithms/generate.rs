//! Generate the components of an RSA private key

use num_bigint::{BigUint, IntoBigUint, ModInverse};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;
use tracing::debug;
use zeroize::Zeroizing;

use crate::{
    errors::{Error, Result},
    prime::generate_prime,
};

/// Output of key generation. The primes are only kept so that callers inside
/// the crate (and tests) can check the key; they are wiped on drop.
pub(crate) struct RsaKeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: Zeroizing<BigUint>,
    #[cfg_attr(not(test), allow(dead_code))]
    pub primes: [Zeroizing<BigUint>; 2],
}

/// Generates a two-prime RSA keypair of the given bit size, public exponent,
/// and the given random source.
///
/// Each prime has `bit_size / 2` bits with its top two bits set, so the
/// modulus always has exactly `bit_size` bits. Equal primes are discarded and
/// drawn again. If `exp` is not invertible modulo φ(n) the function fails with
/// [`Error::KeyGeneration`] instead of retrying, leaving that choice to the
/// caller.
pub(crate) fn generate_key_with_exp<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
    exp: BigUint,
) -> Result<RsaKeyComponents> {
    if bit_size == 0 || bit_size % 16 != 0 {
        return Err(Error::InvalidBitLength(bit_size));
    }

    let (p, q, n) = loop {
        let p = Zeroizing::new(generate_prime(rng, bit_size / 2)?);
        let q = Zeroizing::new(generate_prime(rng, bit_size / 2)?);

        // Only reachable for tiny sizes, where few primes carry the 0b11 prefix.
        if p == q {
            debug!(bit_size, "drew the same prime twice, retrying");
            continue;
        }

        // Both primes are at least 3·2^(bit_size/2 - 2), so p·q cannot fall
        // below 2^(bit_size - 1).
        let n = compute_modulus(&p, &q);
        debug_assert_eq!(n.bits(), bit_size);

        break (p, q, n);
    };

    let d = compute_private_exponent_euler_totient(&p, &q, &exp)?;
    debug!(bit_size, "generated key");

    Ok(RsaKeyComponents {
        n,
        e: exp,
        d,
        primes: [p, q],
    })
}

/// Computes `n = p·q`.
pub(crate) fn compute_modulus(p: &BigUint, q: &BigUint) -> BigUint {
    p * q
}

/// Compute the private exponent from its primes (p and q) and public exponent.
/// This uses Euler's totient function, φ(n) = (p-1)(q-1).
pub(crate) fn compute_private_exponent_euler_totient(
    p: &BigUint,
    q: &BigUint,
    exp: &BigUint,
) -> Result<Zeroizing<BigUint>> {
    let totient = Zeroizing::new((p - BigUint::one()) * (q - BigUint::one()));

    if !exp.gcd(&totient).is_one() {
        return Err(Error::KeyGeneration);
    }

    (exp % &*totient)
        .mod_inverse(&*totient)
        .and_then(|d| d.into_biguint())
        .map(Zeroizing::new)
        .ok_or(Error::KeyGeneration)
}
