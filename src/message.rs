//! Conversion between byte strings and the message integers the transforms
//! operate on.
//!
//! A message is read as a big-endian unsigned integer. Leading zero bytes
//! carry no value and are therefore lost: `b"\0hi"` decodes back as `b"hi"`.
//! The empty message maps to zero and zero maps back to the empty message.

use num_bigint::BigUint;
use num_traits::Zero;

/// Encode `msg` as a big-endian unsigned integer.
pub fn encode(msg: &[u8]) -> BigUint {
    BigUint::from_bytes_be(msg)
}

/// Decode `m` into its minimal big-endian byte representation.
pub fn decode(m: &BigUint) -> Vec<u8> {
    if m.is_zero() {
        return Vec::new();
    }

    m.to_bytes_be()
}
