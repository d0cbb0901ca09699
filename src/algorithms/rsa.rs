//! Generic RSA implementation

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// ⚠️ Raw RSA encryption of m with the public key. No padding is performed.
///
/// Computes `m^e mod n`. Values of `m` at or above `n` are reduced modulo
/// `n`, so only `m < n` survives a round trip.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_encrypt<K: PublicKeyParts + ?Sized>(key: &K, m: &BigUint) -> BigUint {
    m.modpow(key.e(), key.n())
}

/// ⚠️ Performs raw RSA decryption with no padding or error checking.
///
/// Computes `c^d mod n`. Only keys carrying a private exponent can be passed
/// here, so the degenerate `c^0` case cannot occur.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_decrypt<K: PrivateKeyParts + ?Sized>(priv_key: &K, c: &BigUint) -> BigUint {
    c.modpow(priv_key.d(), priv_key.n())
}

/// ⚠️ Performs raw RSA decryption with no padding.
///
/// Returns a plaintext `BigUint`. The result is re-encrypted and compared with
/// `c mod n`; a mismatch means `d` does not belong to `(n, e)` and is reported
/// as [`Error::Verification`].
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn rsa_decrypt_and_check<K: PrivateKeyParts + ?Sized>(
    priv_key: &K,
    c: &BigUint,
) -> Result<BigUint> {
    let m = Zeroizing::new(rsa_decrypt(priv_key, c));

    // In order to catch a private exponent that does not match the public
    // half, m^e is calculated, which should match the original ciphertext.
    let check = rsa_encrypt(priv_key, &m);

    if check != c % priv_key.n() {
        return Err(Error::Verification);
    }

    Ok((*m).clone())
}
