use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::{CryptoRngCore, OsRng};
use zeroize::Zeroize;

use crate::algorithms::generate::{generate_key_with_exp, RsaKeyComponents};
use crate::algorithms::rsa::{rsa_decrypt, rsa_encrypt};
use crate::errors::{Error, KeyRole, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Public exponent of every generated key.
pub const EXP: u64 = 65537;

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Modulus: product of the two generation primes.
    n: BigUint,
    /// Public exponent.
    e: BigUint,
}

/// Represents a whole RSA key, public and private parts.
///
/// The generation primes are not kept; a private key is just `(n, e, d)`.
#[derive(Debug, Clone)]
pub struct RsaPrivateKey {
    /// Public components of the private key.
    pubkey_components: RsaPublicKey,
    /// Private exponent
    d: BigUint,
}

impl Eq for RsaPrivateKey {}
impl PartialEq for RsaPrivateKey {
    #[inline]
    fn eq(&self, other: &RsaPrivateKey) -> bool {
        self.pubkey_components == other.pubkey_components && self.d == other.d
    }
}

impl AsRef<RsaPublicKey> for RsaPrivateKey {
    fn as_ref(&self) -> &RsaPublicKey {
        &self.pubkey_components
    }
}

impl Zeroize for RsaPrivateKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl From<RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: RsaPrivateKey) -> Self {
        (&private_key).into()
    }
}

impl From<&RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: &RsaPrivateKey) -> Self {
        private_key.pubkey_components.clone()
    }
}

impl PublicKeyParts for RsaPublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl RsaPublicKey {
    /// Create a new public key from its components.
    ///
    /// Both the modulus and the exponent must be strictly positive.
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        if n.is_zero() || e.is_zero() {
            return Err(Error::InvalidKey(KeyRole::Public));
        }

        Ok(Self { n, e })
    }

    /// Encrypt the message integer `m`, computing `m^e mod n`.
    ///
    /// No padding is applied. Round-tripping only works for `m < n`.
    pub fn encrypt(&self, m: &BigUint) -> BigUint {
        rsa_encrypt(self, m)
    }
}

impl PublicKeyParts for RsaPrivateKey {
    fn n(&self) -> &BigUint {
        &self.pubkey_components.n
    }

    fn e(&self) -> &BigUint {
        &self.pubkey_components.e
    }
}

impl PrivateKeyParts for RsaPrivateKey {
    fn d(&self) -> &BigUint {
        &self.d
    }
}

impl RsaPrivateKey {
    /// Generate a new RSA key pair with a modulus of the given bit size,
    /// reading randomness from `rng`.
    ///
    /// `bit_size` must be a positive multiple of 16 so that each of the two
    /// primes is a whole number of bytes. The public exponent is always
    /// 65537. [`Error::KeyGeneration`] means the primes drawn did not admit
    /// a private exponent; calling again draws fresh primes.
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<RsaPrivateKey> {
        let RsaKeyComponents { n, e, d, .. } =
            generate_key_with_exp(rng, bit_size, BigUint::from(EXP))?;
        RsaPrivateKey::from_components(n, e, (*d).clone())
    }

    /// Generate a new RSA key pair from the operating system's secure
    /// randomness source.
    pub fn generate(bit_size: usize) -> Result<RsaPrivateKey> {
        Self::new(&mut OsRng, bit_size)
    }

    /// Constructs an RSA key pair from individual components.
    ///
    /// All three components must be strictly positive.
    pub fn from_components(n: BigUint, e: BigUint, d: BigUint) -> Result<RsaPrivateKey> {
        if n.is_zero() || e.is_zero() || d.is_zero() {
            return Err(Error::InvalidKey(KeyRole::Private));
        }

        Ok(RsaPrivateKey {
            pubkey_components: RsaPublicKey { n, e },
            d,
        })
    }

    /// Get the public key from the private key, cloning `n` and `e`.
    pub fn to_public_key(&self) -> RsaPublicKey {
        self.pubkey_components.clone()
    }

    /// Encrypt the message integer `m` with the public half of this key.
    pub fn encrypt(&self, m: &BigUint) -> BigUint {
        rsa_encrypt(self, m)
    }

    /// Decrypt the ciphertext integer `c`, computing `c^d mod n`.
    pub fn decrypt(&self, c: &BigUint) -> BigUint {
        rsa_decrypt(self, c)
    }
}
